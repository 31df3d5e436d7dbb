//! Error handling: invalid-argument cases from spec §7.

use pairgen::{constant, cyclic, generate_cartesian, parameter, GenError, TestInput};

#[test]
fn empty_cyclic_sequence_is_invalid_argument() {
    let err = cyclic("empty", vec![]).unwrap_err();
    assert!(matches!(err, GenError::InvalidArgument(_)));
}

#[test]
fn zero_partition_parameter_is_invalid_argument() {
    let err = parameter("P", vec![]).unwrap_err();
    assert!(matches!(err, GenError::InvalidArgument(_)));
}

#[test]
fn non_positive_cartesian_limit_is_invalid_argument() {
    let p = parameter("P", vec![constant("a", "a")]).unwrap();
    let input = TestInput::new().with_parameter(p);
    assert!(matches!(
        generate_cartesian(&input, 0),
        Err(GenError::InvalidArgument(_))
    ));
}

#[test]
fn invalid_argument_aborts_before_generation_work() {
    // A limit of 0 must fail fast without touching the input's parameters.
    let input = TestInput::new();
    let err = generate_cartesian(&input, 0).unwrap_err();
    assert!(matches!(err, GenError::InvalidArgument(_)));
}
