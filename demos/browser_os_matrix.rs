//! Browser/OS Pairwise Matrix Example
//!
//! Demonstrates the full pipeline: construct parameters with a one-sided
//! rule, preprocess it into a symmetric closure, and generate a minimal
//! pairwise-covering set of combinations.

use anyhow::{Context, Result};
use pairgen::{constant, generate_pairwise, parameter, parameter_with_rules, Rule, TestInput};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Browser/OS Pairwise Matrix ===\n");

    let reject_safari_non_mac = Rule::new(|a, b| !(a.name() == "Safari" && b.name() != "macOS"));

    let browser = parameter_with_rules(
        "Browser",
        vec![
            constant("Chrome", "Chrome"),
            constant("Firefox", "Firefox"),
            constant("Safari", "Safari"),
        ],
        vec![reject_safari_non_mac],
    )
    .context("building Browser parameter")?;

    let os = parameter(
        "Os",
        vec![
            constant("Windows", "Windows"),
            constant("macOS", "macOS"),
            constant("Linux", "Linux"),
        ],
    )
    .context("building Os parameter")?;

    let input = TestInput::new().with_parameter(browser).with_parameter(os);

    let table = generate_pairwise(&input).context("generating pairwise combinations")?;

    println!("Generated {} combinations:", table.len());
    for row in table.rows() {
        println!("  {}", row.key());
    }

    for row in table.rows() {
        let browser = row.get(0).expect("every emitted row is filled").name();
        let os = row.get(1).expect("every emitted row is filled").name();
        assert!(!(browser == "Safari" && os != "macOS"));
    }
    println!("\nNo combination pairs Safari with a non-macOS platform.");
    Ok(())
}
