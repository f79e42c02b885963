use mention_steps::{discover_features, Feature, Runner, StepRegistry};
use std::path::PathBuf;

fn features_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../features")
}

#[test]
fn repository_features_pass() {
    let paths = discover_features(&[features_dir()]).unwrap();
    assert!(!paths.is_empty());

    let features: Vec<Feature> = paths
        .iter()
        .map(|p| Feature::from_file(p).unwrap())
        .collect();

    let registry = StepRegistry::with_mention_steps().unwrap();
    let report = Runner::new(&registry).run(&features);

    for feature in &report.features {
        for scenario in &feature.scenarios {
            assert!(scenario.passed(), "scenario '{}' failed: {:?}", scenario.name, scenario.steps);
        }
    }
    assert!(report.success());
    assert_eq!(report.summary.scenarios, 7);
}
