//! Concrete scenario tests drawn from spec §8.

use std::collections::HashSet;

use pairgen::{constant, generate_cartesian, generate_pairwise, parameter, parameter_with_rules, Rule, TestInput};

fn browser_os_2x2() -> TestInput {
    let browser = parameter(
        "Browser",
        vec![constant("a1", "a1"), constant("a2", "a2")],
    )
    .unwrap();
    let os = parameter("Os", vec![constant("b1", "b1"), constant("b2", "b2")]).unwrap();
    TestInput::new().with_parameter(browser).with_parameter(os)
}

fn browser_os_3x3() -> TestInput {
    let browser = parameter(
        "Browser",
        vec![
            constant("Chrome", "Chrome"),
            constant("Firefox", "Firefox"),
            constant("Safari", "Safari"),
        ],
    )
    .unwrap();
    let os = parameter(
        "Os",
        vec![
            constant("Windows", "Windows"),
            constant("macOS", "macOS"),
            constant("Linux", "Linux"),
        ],
    )
    .unwrap();
    TestInput::new().with_parameter(browser).with_parameter(os)
}

#[test]
fn scenario_1_two_by_two_no_rules() {
    let input = browser_os_2x2();
    let table = generate_pairwise(&input).unwrap();
    assert_eq!(table.len(), 4);
}

#[test]
fn scenario_2_three_by_three_no_rules() {
    let input = browser_os_3x3();
    let table = generate_pairwise(&input).unwrap();
    assert_eq!(table.len(), 9);
}

#[test]
fn scenario_3_safari_only_with_macos_one_sided() {
    let reject = Rule::new(|a, b| !(a.name() == "Safari" && b.name() != "macOS"));
    let browser = parameter_with_rules(
        "Browser",
        vec![
            constant("Chrome", "Chrome"),
            constant("Firefox", "Firefox"),
            constant("Safari", "Safari"),
        ],
        vec![reject],
    )
    .unwrap();
    let os = parameter(
        "Os",
        vec![
            constant("Windows", "Windows"),
            constant("macOS", "macOS"),
            constant("Linux", "Linux"),
        ],
    )
    .unwrap();
    let input = TestInput::new().with_parameter(browser).with_parameter(os);

    let table = generate_pairwise(&input).unwrap();

    for row in table.rows() {
        let b = row.get(0).unwrap().name();
        let o = row.get(1).unwrap().name();
        assert!(!(b == "Safari" && (o == "Windows" || o == "Linux")));
    }
    assert!(table.len() >= 3 && table.len() <= 5);
}

#[test]
fn scenario_4_two_one_sided_rules_across_four_parameters() {
    let reject_safari_windows = Rule::new(|a, b| !(a.name() == "Safari" && b.name() == "Windows"));
    let reject_safari_linux = Rule::new(|a, b| !(a.name() == "Safari" && b.name() == "Linux"));
    let browser = parameter_with_rules(
        "Browser",
        vec![
            constant("Chrome", "Chrome"),
            constant("Firefox", "Firefox"),
            constant("Safari", "Safari"),
        ],
        vec![reject_safari_windows, reject_safari_linux],
    )
    .unwrap();
    let os = parameter(
        "Os",
        vec![
            constant("Windows", "Windows"),
            constant("macOS", "macOS"),
            constant("Linux", "Linux"),
        ],
    )
    .unwrap();
    let reject_4k_mobile = Rule::new(|a, b| !(a.name() == "4K" && b.name() == "Mobile"));
    let res = parameter_with_rules(
        "Res",
        vec![constant("HD", "HD"), constant("FHD", "FHD"), constant("4K", "4K")],
        vec![reject_4k_mobile],
    )
    .unwrap();
    let dev = parameter(
        "Dev",
        vec![constant("Desktop", "Desktop"), constant("Mobile", "Mobile")],
    )
    .unwrap();

    let input = TestInput::new()
        .with_parameter(browser)
        .with_parameter(os)
        .with_parameter(res)
        .with_parameter(dev);

    let table = generate_pairwise(&input).unwrap();

    for row in table.rows() {
        let browser = row.get(0).unwrap().name();
        let os = row.get(1).unwrap().name();
        let res = row.get(2).unwrap().name();
        let dev = row.get(3).unwrap().name();
        assert!(!(browser == "Safari" && os == "Windows"));
        assert!(!(browser == "Safari" && os == "Linux"));
        assert!(!(res == "4K" && dev == "Mobile"));
    }
    assert!(table.len() >= 7 && table.len() <= 12);
}

#[test]
fn scenario_5_single_parameter() {
    let p = parameter(
        "P",
        vec![constant("x1", "x1"), constant("x2", "x2"), constant("x3", "x3")],
    )
    .unwrap();
    let input = TestInput::new().with_parameter(p);
    let table = generate_pairwise(&input).unwrap();
    assert_eq!(table.len(), 3);
    let names: HashSet<_> = table
        .rows()
        .iter()
        .map(|r| r.get(0).unwrap().name().to_string())
        .collect();
    assert_eq!(names, HashSet::from(["x1".to_string(), "x2".to_string(), "x3".to_string()]));
}

#[test]
fn scenario_6_cartesian_with_limit() {
    let input = browser_os_3x3();
    let table = generate_cartesian(&input, 4).unwrap();
    assert_eq!(table.len(), 4);
    let keys: Vec<_> = table.rows().iter().map(|r| r.key()).collect();
    assert_eq!(
        keys,
        vec![
            "Chrome|Windows".to_string(),
            "Chrome|macOS".to_string(),
            "Chrome|Linux".to_string(),
            "Firefox|Windows".to_string(),
        ]
    );
}
