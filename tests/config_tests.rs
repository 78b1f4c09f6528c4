use std::fs;
use std::path::Path;
use store_assets::config::Config;

#[test]
fn defaults_match_the_shipping_listing() {
    let config = Config::default();
    assert_eq!(config.branding.app_name, "DailyHabit");
    assert_eq!(config.branding.habits.len(), 5);
    assert_eq!(config.output.assets_dir, "assets");
    assert_eq!(config.output.store_images_dir, "store_images");
    assert_eq!(config.output.screenshots_dir, "store_screenshots");
    config.validate().expect("defaults must validate");
}

#[test]
fn absent_file_falls_back_to_defaults_without_creating_it() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store-assets.yaml");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.branding.app_name, "DailyHabit");

    // A default run must leave no config file behind
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store-assets.yaml");
    fs::write(&path, "branding:\n  app_name: MyHabitApp\n").expect("write config");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.branding.app_name, "MyHabitApp");
    // Untouched fields keep their defaults
    assert_eq!(config.branding.habits.len(), 5);
    assert_eq!(config.output.assets_dir, "assets");
}

#[test]
fn empty_habit_list_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store-assets.yaml");
    fs::write(&path, "branding:\n  habits: []\n").expect("write config");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn unparseable_yaml_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store-assets.yaml");
    fs::write(&path, "branding: [this is: not valid").expect("write config");

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn load_ignores_missing_default_path() {
    // Config::load reads from the working directory; absent is fine
    if !Path::new("store-assets.yaml").exists() {
        let config = Config::load().expect("load with no file");
        config.validate().expect("defaults validate");
    }
}
