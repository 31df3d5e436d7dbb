//! Combination
//!
//! A partial or complete assignment of at most one partition per parameter,
//! plus the merge/diff/validity operations over it (spec §4.5).

use crate::partition::Partition;
use crate::test_input::TestInput;

/// An assignment of partitions to parameter slots, indexed by parameter
/// position in the owning [`TestInput`].
#[derive(Debug, Clone)]
pub struct Combination {
    slots: Vec<Option<Partition>>,
}

impl Combination {
    /// An all-empty combination sized to `len` slots.
    pub fn empty(len: usize) -> Self {
        Combination {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<Partition>] {
        &self.slots
    }

    pub fn get(&self, i: usize) -> Option<&Partition> {
        self.slots[i].as_ref()
    }

    pub fn set(&mut self, i: usize, partition: Partition) {
        self.slots[i] = Some(partition);
    }

    /// I3: a filled combination has no empty slots.
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// I2: the `|`-joined sequence of slot names, `_` for empty slots.
    pub fn key(&self) -> String {
        self.slots
            .iter()
            .map(|s| s.as_ref().map_or("_", Partition::name))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// I4: every unordered pair of filled, distinct-index slots satisfies
    /// the symmetric compatibility relation. O(k^2) in the number of
    /// filled slots.
    pub fn is_valid(&self, input: &TestInput) -> bool {
        for i in 0..self.slots.len() {
            let Some(a) = &self.slots[i] else { continue };
            for j in (i + 1)..self.slots.len() {
                let Some(b) = &self.slots[j] else { continue };
                if !input.compat(i, a, j, b) {
                    return false;
                }
            }
        }
        true
    }

    /// Would placing `partition` in slot `i` keep the combination valid
    /// against every already-filled slot?
    pub fn is_compatible_with_filled(
        &self,
        input: &TestInput,
        i: usize,
        partition: &Partition,
    ) -> bool {
        for (j, slot) in self.slots.iter().enumerate() {
            if j == i {
                continue;
            }
            let Some(b) = slot else { continue };
            let ok = if i < j {
                input.compat(i, partition, j, b)
            } else {
                input.compat(j, b, i, partition)
            };
            if !ok {
                return false;
            }
        }
        true
    }

    /// Merge two combinations: each slot is `a`'s if non-empty, else `b`'s.
    /// Returns `None` on conflict (both non-empty with differing names).
    pub fn merge(a: &Combination, b: &Combination) -> Option<Combination> {
        if a.len() != b.len() {
            return None;
        }
        let mut out = Combination::empty(a.len());
        for i in 0..a.len() {
            match (&a.slots[i], &b.slots[i]) {
                (Some(x), Some(y)) => {
                    if x.name() != y.name() {
                        return None;
                    }
                    out.slots[i] = Some(x.clone());
                }
                (Some(x), None) => out.slots[i] = Some(x.clone()),
                (None, Some(y)) => out.slots[i] = Some(y.clone()),
                (None, None) => {}
            }
        }
        Some(out)
    }

    /// Diff `a` against `b`, slot by slot:
    /// - both filled, same partition name → empty (no change)
    /// - both filled, differing names → `b`'s partition (the change)
    /// - only `b` filled → `b`'s partition
    /// - only `a` filled, or neither filled → empty
    ///
    /// Differing non-empty slots are treated as "`b` overrides `a`", not as
    /// a conflict — unlike `merge`, `diff` never fails except on a length
    /// mismatch, which returns `None`.
    pub fn diff(a: &Combination, b: &Combination) -> Option<Combination> {
        if a.len() != b.len() {
            return None;
        }
        let mut out = Combination::empty(a.len());
        for i in 0..a.len() {
            match (&a.slots[i], &b.slots[i]) {
                (Some(x), Some(y)) => {
                    if x.name() != y.name() {
                        out.slots[i] = Some(y.clone());
                    }
                }
                (None, Some(y)) => out.slots[i] = Some(y.clone()),
                (Some(_), None) | (None, None) => {}
            }
        }
        Some(out)
    }
}
