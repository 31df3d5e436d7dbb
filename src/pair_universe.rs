//! PairUniverse
//!
//! The set of all compatible (param-i, partition-a, param-j, partition-b)
//! pairs in canonical form, `i < j`, used as the coverage target by the
//! pairwise generator.

use std::collections::HashSet;

use crate::test_input::TestInput;

/// A canonical, compatible pair of (parameter index, partition name)
/// tuples with `i < j`. Equality/hashing are structural over names, not
/// over `Partition`/`Arc` identity, so the universe is a plain
/// `HashSet<CanonicalPair>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPair {
    pub i: usize,
    pub a: String,
    pub j: usize,
    pub b: String,
}

impl CanonicalPair {
    fn new(i: usize, a: &str, j: usize, b: &str) -> Self {
        debug_assert!(i < j);
        CanonicalPair {
            i,
            a: a.to_string(),
            j,
            b: b.to_string(),
        }
    }
}

/// All compatible pairs across parameter indices `i < j` in `input`.
///
/// `input` should already be the output of [`crate::rule_preprocessor::preprocess`]
/// so that `compat` is evaluated against a symmetric relation.
pub fn build(input: &TestInput) -> HashSet<CanonicalPair> {
    let params = input.parameters();
    let mut universe = HashSet::new();
    for i in 0..params.len() {
        for j in (i + 1)..params.len() {
            for a in params[i].partitions() {
                for b in params[j].partitions() {
                    if input.compat(i, a, j, b) {
                        universe.insert(CanonicalPair::new(i, a.name(), j, b.name()));
                    }
                }
            }
        }
    }
    universe
}
