//! # PairGen — Constraint-Aware Pairwise Test-Case Generator
//!
//! Given a set of input parameters, each with a finite set of equivalence
//! partitions, and a set of pairwise compatibility constraints between
//! partitions across parameters, this crate produces a set of complete
//! assignments (one partition per parameter) that satisfy all constraints
//! and either cover every compatible pairwise interaction between
//! parameters, or enumerate the full Cartesian product up to a bound.
//!
//! ## Pipeline
//!
//! ```text
//! TestInput
//!     ↓
//! [RulePreprocessor]     → symmetric compatibility closure
//!     ↓
//! [PairUniverse]         → coverage target
//!     ↓
//! [PairwiseGenerator]    → greedy two-phase coverage search
//!   (or [CartesianGenerator] for the bounded full product)
//!     ↓
//! ResultTable
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pairgen::{constant, parameter, TestInput, generate_pairwise};
//!
//! let browser = parameter(
//!     "Browser",
//!     vec![constant("Chrome", "Chrome"), constant("Firefox", "Firefox")],
//! ).unwrap();
//! let os = parameter(
//!     "Os",
//!     vec![constant("Windows", "Windows"), constant("macOS", "macOS")],
//! ).unwrap();
//!
//! let input = TestInput::new().with_parameter(browser).with_parameter(os);
//! let table = generate_pairwise(&input).unwrap();
//! assert_eq!(table.len(), 4);
//! ```

pub mod cancellation;
pub mod cartesian_generator;
pub mod combination;
pub mod config;
pub mod error;
pub mod pair_universe;
pub mod parameter;
pub mod partition;
pub mod result_table;
pub mod rule_preprocessor;
pub mod test_input;
pub mod value;

pub use cancellation::{CancellationToken, GeneratorOutcome};
pub use cartesian_generator::CartesianGenerator;
pub use combination::Combination;
pub use config::{GeneratorConfig, SearchConfig};
pub use error::{GenError, GenResult};
pub use pair_universe::CanonicalPair;
pub use parameter::{Parameter, Rule};
pub use partition::Partition;
pub use pairwise_generator::PairwiseGenerator;
pub use result_table::ResultTable;
pub use test_input::TestInput;
pub use value::Value;

mod pairwise_generator;

use std::panic::{self, AssertUnwindSafe};

use tracing::instrument;

/// Construct a constant partition: always evaluates to `value`.
pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Partition {
    Partition::constant(name, value)
}

/// Construct a constant partition whose name is derived from the value's
/// `Display` form.
pub fn constant_named(value: impl Into<Value>) -> Partition {
    Partition::constant_named(value)
}

/// Construct a partition that invokes `producer` fresh on every `value()`
/// call.
pub fn lazy(name: impl Into<String>, producer: impl Fn() -> Value + Send + Sync + 'static) -> Partition {
    Partition::lazy(name, producer)
}

/// Construct a partition that cycles through `values`, wrapping around.
///
/// # Errors
/// Returns [`GenError::InvalidArgument`] if `values` is empty.
pub fn cyclic(name: impl Into<String>, values: Vec<Value>) -> GenResult<Partition> {
    Partition::cyclic(name, values)
}

/// Construct a parameter with no local rules.
///
/// # Errors
/// Returns [`GenError::InvalidArgument`] if `partitions` is empty.
pub fn parameter(name: impl Into<String>, partitions: Vec<Partition>) -> GenResult<Parameter> {
    Parameter::new(name, partitions)
}

/// Construct a parameter with local compatibility rules.
///
/// # Errors
/// Returns [`GenError::InvalidArgument`] if `partitions` is empty.
pub fn parameter_with_rules(
    name: impl Into<String>,
    partitions: Vec<Partition>,
    rules: Vec<Rule>,
) -> GenResult<Parameter> {
    Parameter::with_rules(name, partitions, rules)
}

fn run_generator<F>(f: F) -> GenResult<ResultTable>
where
    F: FnOnce() -> GenResult<GeneratorOutcome>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map(GeneratorOutcome::into_result_table),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "rule callback panicked".to_string());
            Err(GenError::RuleFailure(message))
        }
    }
}

/// Apply [`rule_preprocessor::preprocess`] then run the
/// [`PairwiseGenerator`], producing a minimal covering set of combinations.
///
/// A panic raised by a user-supplied rule callback is converted into
/// [`GenError::RuleFailure`] rather than unwinding out of this call, per
/// spec §4.1's "rule callbacks propagate unchanged to the caller" within
/// Rust's panic-based failure model.
#[instrument(skip(input))]
pub fn generate_pairwise(input: &TestInput) -> GenResult<ResultTable> {
    run_generator(|| {
        let preprocessed = rule_preprocessor::preprocess(input);
        let token = CancellationToken::new();
        PairwiseGenerator::new(&preprocessed).generate(&token)
    })
}

/// Same as [`generate_pairwise`], but accepts a `jump_hint` kept purely for
/// back-compat with callers of the legacy algorithm; it does not affect the
/// output.
pub fn generate_pairwise_with_hint(input: &TestInput, _jump_hint: u64) -> GenResult<ResultTable> {
    generate_pairwise(input)
}

/// Same as [`generate_pairwise`], but honors [`config::SearchConfig`]'s
/// `enable_gap_filling` knob. Disabling gap filling trades the P2
/// completeness guarantee for a faster, primary-pass-only run; this is
/// off-spec and intended for diagnostics, not general use.
#[instrument(skip(input))]
pub fn generate_pairwise_with_config(
    input: &TestInput,
    config: &GeneratorConfig,
) -> GenResult<ResultTable> {
    let search_config = config.search.clone();
    run_generator(|| {
        let preprocessed = rule_preprocessor::preprocess(input);
        let token = CancellationToken::new();
        PairwiseGenerator::new(&preprocessed)
            .with_search_config(search_config)
            .generate(&token)
    })
}

/// Cancellable variant of [`generate_pairwise`].
pub fn generate_pairwise_cancellable(
    input: &TestInput,
    cancel: &CancellationToken,
) -> GenResult<GeneratorOutcome> {
    match panic::catch_unwind(AssertUnwindSafe(|| {
        let preprocessed = rule_preprocessor::preprocess(input);
        PairwiseGenerator::new(&preprocessed).generate(cancel)
    })) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "rule callback panicked".to_string());
            Err(GenError::RuleFailure(message))
        }
    }
}

/// Enumerate the bounded Cartesian product, filtered by constraints.
///
/// # Errors
/// Returns [`GenError::InvalidArgument`] if `limit < 1`.
#[instrument(skip(input))]
pub fn generate_cartesian(input: &TestInput, limit: u64) -> GenResult<ResultTable> {
    let generator = CartesianGenerator::new(input, limit)?;
    run_generator(|| {
        let token = CancellationToken::new();
        generator.generate(&token)
    })
}

/// Cancellable variant of [`generate_cartesian`].
///
/// # Errors
/// Returns [`GenError::InvalidArgument`] if `limit < 1`.
pub fn generate_cartesian_cancellable(
    input: &TestInput,
    limit: u64,
    cancel: &CancellationToken,
) -> GenResult<GeneratorOutcome> {
    let generator = CartesianGenerator::new(input, limit)?;
    generator.generate(cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_cartesian_rejects_zero_limit() {
        let input = TestInput::new().with_parameter(
            Parameter::new("P", vec![Partition::constant("a", "a")]).unwrap(),
        );
        assert!(matches!(
            generate_cartesian(&input, 0),
            Err(GenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn jump_hint_does_not_change_output() {
        let input = TestInput::new()
            .with_parameter(
                Parameter::new(
                    "A",
                    vec![Partition::constant("a1", "a1"), Partition::constant("a2", "a2")],
                )
                .unwrap(),
            )
            .with_parameter(
                Parameter::new(
                    "B",
                    vec![Partition::constant("b1", "b1"), Partition::constant("b2", "b2")],
                )
                .unwrap(),
            );
        let plain = generate_pairwise(&input).unwrap();
        let hinted = generate_pairwise_with_hint(&input, 42).unwrap();
        let plain_keys: Vec<_> = plain.rows().iter().map(Combination::key).collect();
        let hinted_keys: Vec<_> = hinted.rows().iter().map(Combination::key).collect();
        assert_eq!(plain_keys, hinted_keys);
    }

    #[test]
    fn rule_panic_is_converted_to_rule_failure() {
        let exploding = Rule::new(|_, _| panic!("boom"));
        let input = TestInput::new()
            .with_parameter(
                Parameter::with_rules(
                    "A",
                    vec![Partition::constant("a1", "a1")],
                    vec![exploding],
                )
                .unwrap(),
            )
            .with_parameter(
                Parameter::new("B", vec![Partition::constant("b1", "b1")]).unwrap(),
            );
        let result = generate_pairwise(&input);
        assert!(matches!(result, Err(GenError::RuleFailure(_))));
    }
}
