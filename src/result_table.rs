//! ResultTable
//!
//! An ordered collection of filled, valid [`Combination`]s with the tuple
//! and named-map export affordances described in spec §6.

use std::collections::HashMap;

use crate::combination::Combination;
use crate::value::Value;

/// The reserved key under which a combination's description (its `key()`)
/// is stored in the named-map export.
pub const DESCRIPTION_KEY: &str = "__description";

/// An ordered, key-deduplicated collection of emitted combinations.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<Combination>,
}

impl ResultTable {
    pub fn new() -> Self {
        ResultTable { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Combination] {
        &self.rows
    }

    /// Whether a combination with this key has already been appended.
    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.iter().any(|r| r.key() == key)
    }

    /// Append `combination`, skipping it (returning `false`) if a row with
    /// the same key is already present.
    pub fn push_unique(&mut self, combination: Combination) -> bool {
        if self.contains_key(&combination.key()) {
            return false;
        }
        self.rows.push(combination);
        true
    }

    /// Export each row as `(description, v1, v2, ..., vk)`. Resolving each
    /// slot's value is effectful: `Cyclic` partitions advance their cursor
    /// on export, per spec §6.
    pub fn to_tuples(&self) -> Vec<(String, Vec<Value>)> {
        self.rows
            .iter()
            .map(|row| {
                let description = row.key();
                let values = row
                    .slots()
                    .iter()
                    .map(|slot| slot.as_ref().map_or(Value::Str(String::new()), |p| p.value()))
                    .collect();
                (description, values)
            })
            .collect()
    }

    /// Export each row as `parameter_name -> value`, plus the description
    /// under [`DESCRIPTION_KEY`]. `parameter_names` must align 1:1 with the
    /// combination's slot order (the owning `TestInput`'s parameter order).
    pub fn to_named_maps(&self, parameter_names: &[String]) -> Vec<HashMap<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut map = HashMap::new();
                map.insert(
                    DESCRIPTION_KEY.to_string(),
                    Value::Str(row.key()),
                );
                for (i, slot) in row.slots().iter().enumerate() {
                    if let (Some(name), Some(partition)) = (parameter_names.get(i), slot) {
                        map.insert(name.clone(), partition.value());
                    }
                }
                map
            })
            .collect()
    }
}
