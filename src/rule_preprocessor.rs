//! RulePreprocessor
//!
//! Rules are declared on whichever parameter they "feel natural" on (e.g. a
//! "Safari only with macOS" rule on the Browser parameter). The pairwise
//! search needs a single consistent compatibility relation between any two
//! parameters; this module derives that symmetric closure.
//!
//! For every parameter `ps` that carries rules, for every rule `r`, for
//! every other parameter `pt`: if `r` "touches" the `(ps, pt)` pair — i.e.
//! evaluating it against some `(a in ps, b in pt)` in either argument order
//! produces `false` — `r` is appended to `pt`'s rules, unless `pt` already
//! carries that exact rule object.
//!
//! Preprocessing is pure and infallible: it never invokes anything but the
//! rule predicates supplied by the caller, and a panicking rule is the
//! caller's problem (it surfaces at generation time, not here).

use tracing::debug;

use crate::parameter::Rule;
use crate::test_input::TestInput;

/// Returns `true` if `rule`, evaluated over the full cross product of
/// `source`'s and `target`'s partitions in both argument orders, rejects
/// at least one pairing.
fn rule_touches(rule: &Rule, source: &crate::parameter::Parameter, target: &crate::parameter::Parameter) -> bool {
    for a in source.partitions() {
        for b in target.partitions() {
            if !rule.test(a, b) || !rule.test(b, a) {
                return true;
            }
        }
    }
    false
}

/// Derive the symmetric compatibility closure for `input`, returning a new
/// [`TestInput`] with the same parameter order and partitions, but with
/// each parameter's rule list augmented so that for every two parameters
/// `(pi, pj)` and every `(a in pi, b in pj)`,
/// `pi.are_compatible(a, b) == pj.are_compatible(b, a)`.
pub fn preprocess(input: &TestInput) -> TestInput {
    let mut output = input.clone();
    let n = output.parameters().len();

    // Collect (source_index, rule) pairs first so we don't mutate a
    // parameter's rule list while still iterating its own original rules.
    let mut to_propagate: Vec<(usize, Rule)> = Vec::new();
    for (s, param) in output.parameters().iter().enumerate() {
        for rule in param.rules() {
            to_propagate.push((s, rule.clone()));
        }
    }

    for (s, rule) in to_propagate {
        for t in 0..n {
            if t == s {
                continue;
            }
            let touches = {
                let params = output.parameters();
                rule_touches(&rule, &params[s], &params[t])
            };
            if touches {
                debug!(source = s, target = t, "propagating rule to parameter");
                output.parameters_mut()[t].add_rule_if_absent(rule.clone());
            }
        }
    }

    output
}
