//! Configuration loading defaults, mirroring the teacher's config test
//! style: assert sane defaults exist even with no config files present.

use pairgen::{
    constant, generate_pairwise, generate_pairwise_with_config, parameter, Combination,
    GeneratorConfig, SearchConfig, TestInput,
};

#[test]
fn default_search_config_enables_gap_filling_and_has_sane_limit() {
    let config = GeneratorConfig::default();
    assert!(config.search.enable_gap_filling);
    assert!(config.search.default_cartesian_limit > 0);
}

#[test]
fn generate_pairwise_with_config_matches_plain_generate_by_default() {
    let a = parameter("A", vec![constant("a1", "a1"), constant("a2", "a2")]).unwrap();
    let b = parameter("B", vec![constant("b1", "b1"), constant("b2", "b2")]).unwrap();
    let input = TestInput::new().with_parameter(a).with_parameter(b);

    let plain = generate_pairwise(&input).unwrap();
    let configured = generate_pairwise_with_config(&input, &GeneratorConfig::default()).unwrap();

    let plain_keys: Vec<_> = plain.rows().iter().map(Combination::key).collect();
    let configured_keys: Vec<_> = configured.rows().iter().map(Combination::key).collect();
    assert_eq!(plain_keys, configured_keys);
}

#[test]
fn generate_pairwise_with_config_honors_disabled_gap_filling() {
    let a = parameter("A", vec![constant("a1", "a1"), constant("a2", "a2")]).unwrap();
    let b = parameter("B", vec![constant("b1", "b1"), constant("b2", "b2")]).unwrap();
    let input = TestInput::new().with_parameter(a).with_parameter(b);

    let mut config = GeneratorConfig::default();
    config.search = SearchConfig {
        enable_gap_filling: false,
        ..SearchConfig::default()
    };
    let without_gap_filling = generate_pairwise_with_config(&input, &config).unwrap();
    let with_gap_filling = generate_pairwise(&input).unwrap();

    assert!(without_gap_filling.len() <= with_gap_filling.len());
}

#[test]
fn load_without_config_files_falls_back_to_defaults() {
    // No config.toml / config.local.toml present in the test working
    // directory; figment must not error, just fall back to defaults.
    let config = GeneratorConfig::load().expect("config load should not fail without files");
    assert_eq!(config, GeneratorConfig::default());
}
