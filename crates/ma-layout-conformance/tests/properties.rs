use ma_layout_conformance::generators::InitScenario;
use ma_layout_conformance::{RunConfig, registry};
use test_strategy::proptest;

#[proptest]
fn initialization_is_idempotent(scenario: InitScenario) {
    let entry = scenario.entry();
    if let Some(once) = entry.stamp(scenario.fill_byte, 1) {
        let once = once.unwrap();
        let repeated = entry.stamp(scenario.fill_byte, scenario.repeats).unwrap().unwrap();
        assert!(once == repeated, "{} changed on re-initialization", entry.name);
    }
}

#[proptest]
fn every_descriptor_conforms_over_any_fill(fill_byte: u8) {
    let config = RunConfig {
        fill_byte,
        ..RunConfig::default()
    };
    for entry in registry() {
        if let Some(report) = entry.check(&config) {
            let report = report.unwrap();
            assert!(report.is_conformant(), "{report}");
        }
    }
}
