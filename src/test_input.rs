//! TestInput
//!
//! An ordered sequence of [`Parameter`]s forming the problem instance.
//! Parameter order is significant: it fixes the indices used throughout
//! the preprocessor, pair universe, and generators.

use crate::error::{GenError, GenResult};
use crate::parameter::Parameter;
use crate::partition::Partition;

/// A combinatorial test problem: an ordered list of parameters.
#[derive(Debug, Default, Clone)]
pub struct TestInput {
    parameters: Vec<Parameter>,
}

impl TestInput {
    pub fn new() -> Self {
        TestInput {
            parameters: Vec::new(),
        }
    }

    /// Append a parameter, fixing its index.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// `compat(p_i, a, p_j, b)`: both directions must agree. After
    /// preprocessing these two checks are equivalent; both are evaluated
    /// here as a defense-in-depth check (spec §4.1).
    pub fn compat(&self, i: usize, a: &Partition, j: usize, b: &Partition) -> bool {
        let pi = &self.parameters[i];
        let pj = &self.parameters[j];
        pi.are_compatible(a, b) && pj.are_compatible(b, a)
    }

    /// Validate that the instance has at least one parameter, and that
    /// every parameter has at least one partition (the latter is already
    /// enforced at `Parameter` construction, re-checked here for instances
    /// assembled from externally constructed parameters).
    pub fn validate_nonempty(&self) -> GenResult<()> {
        if self.parameters.is_empty() {
            return Err(GenError::InvalidArgument(
                "test input must have at least one parameter".to_string(),
            ));
        }
        Ok(())
    }
}

impl FromIterator<Parameter> for TestInput {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        TestInput {
            parameters: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_invalid_for_generation() {
        let input = TestInput::new();
        assert!(input.validate_nonempty().is_err());
    }

    #[test]
    fn parameter_order_fixes_indices() {
        let a = Parameter::new("A", vec![Partition::constant("a1", "a1")]).unwrap();
        let b = Parameter::new("B", vec![Partition::constant("b1", "b1")]).unwrap();
        let input = TestInput::new().with_parameter(a).with_parameter(b);
        assert_eq!(input.parameters()[0].name(), "A");
        assert_eq!(input.parameters()[1].name(), "B");
    }
}
