use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_yaml_matches_default_impl() {
    assert_eq!(Preferences::default(), *DEFAULT_PREFS);
    assert_eq!(30, DEFAULT_PREFS.sim.scramble_moves);
    assert!(DEFAULT_PREFS.sim.group_undo);
    assert!(!DEFAULT_PREFS.sim.animate);
}

#[test]
fn test_user_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("rubik_prefs_test_{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "sim:\n  scramble_moves: 12\n  validate: true").unwrap();
    drop(file);

    let prefs = Preferences::load(Some(&path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(12, prefs.sim.scramble_moves);
    assert!(prefs.sim.validate);
    assert!(prefs.sim.group_undo);
    assert_eq!(DEFAULT_PREFS.display, prefs.display);
}

#[test]
fn test_bad_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("rubik_prefs_test_does_not_exist.yaml");
    assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(&path)));
}

#[test]
fn test_yaml_roundtrip() {
    let mut prefs = Preferences::default();
    prefs.sim.animate = true;
    prefs.display.number = true;
    let yaml = prefs.to_yaml().unwrap();
    assert_eq!(prefs, serde_norway::from_str::<Preferences>(&yaml).unwrap());
}
