use gardenist::config::Config;
use gardenist::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_view, "plants");
    assert!(config.ui.mouse_enabled);
    assert!(config.display.show_notes);
    assert!(config.display.show_varieties);
    assert_eq!(config.notifications.duration_secs, 4);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid toast duration
    config.ui.sidebar_width = 35;
    config.notifications.duration_secs = 0;
    assert!(config.validate().is_err());

    config.notifications.duration_secs = 120;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_bad_date_format() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"plants\""));
    assert!(toml_str.contains("duration_secs = 4"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.sidebar_width, 35);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_view, "plants"); // default value
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.display.date_format, datetime::STORAGE_DATE_FORMAT); // default value
    assert_eq!(config.notifications.duration_secs, 4); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_level_filter_mapping() {
    let mut config = Config::default();
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Info);

    config.logging.level = "debug".to_string();
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);

    config.logging.level = "error".to_string();
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Error);
}
