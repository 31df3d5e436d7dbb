//! Parameter
//!
//! An ordered set of partitions plus the local compatibility rules declared
//! against them.

use std::fmt;
use std::sync::Arc;

use crate::error::{GenError, GenResult};
use crate::partition::Partition;

/// A pure two-argument compatibility predicate over partitions.
///
/// Wraps the callback in an `Arc` so [`Rule`] is cheaply cloneable and so
/// the preprocessor can dedup by referential identity (`Arc::ptr_eq`)
/// without requiring the callback type to implement `PartialEq` — rule
/// closures are opaque to everything except their own invocation.
#[derive(Clone)]
pub struct Rule(Arc<dyn Fn(&Partition, &Partition) -> bool + Send + Sync>);

impl Rule {
    pub fn new(f: impl Fn(&Partition, &Partition) -> bool + Send + Sync + 'static) -> Self {
        Rule(Arc::new(f))
    }

    /// Evaluate the predicate. May panic if the user callback panics; the
    /// generator boundary converts that into [`crate::error::GenError::RuleFailure`].
    pub fn test(&self, a: &Partition, b: &Partition) -> bool {
        (self.0)(a, b)
    }

    /// Referential identity, used by the preprocessor to avoid appending
    /// the same user rule to a parameter twice.
    pub fn same_as(&self, other: &Rule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule(@{:p})", Arc::as_ptr(&self.0))
    }
}

/// An ordered set of partitions and the compatibility rules declared
/// against this parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    partitions: Vec<Partition>,
    rules: Vec<Rule>,
}

impl Parameter {
    /// Construct a parameter with no local rules.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidArgument`] if `partitions` is empty.
    pub fn new(name: impl Into<String>, partitions: Vec<Partition>) -> GenResult<Self> {
        Parameter::with_rules(name, partitions, Vec::new())
    }

    /// Construct a parameter with local compatibility rules.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidArgument`] if `partitions` is empty.
    pub fn with_rules(
        name: impl Into<String>,
        mut partitions: Vec<Partition>,
        rules: Vec<Rule>,
    ) -> GenResult<Self> {
        let name = name.into();
        if partitions.is_empty() {
            return Err(GenError::InvalidArgument(format!(
                "parameter '{name}' must have at least one partition"
            )));
        }
        for p in &mut partitions {
            p.attach_parent(&name);
        }
        Ok(Parameter {
            name,
            partitions,
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a rule, skipping it if an identical (by reference) rule is
    /// already present. Used by the preprocessor to close the compatibility
    /// relation without duplicating a rule object.
    pub(crate) fn add_rule_if_absent(&mut self, rule: Rule) {
        if !self.rules.iter().any(|r| r.same_as(&rule)) {
            self.rules.push(rule);
        }
    }

    /// Conjunction of all local rules applied to `(a, b)` in declared
    /// order. With no rules, trivially `true`.
    pub fn are_compatible(&self, a: &Partition, b: &Partition) -> bool {
        self.rules.iter().all(|r| r.test(a, b))
    }

    pub(crate) fn partition_by_name(&self, name: &str) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.name() == name)
    }
}
