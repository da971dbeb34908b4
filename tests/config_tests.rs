use propterm::infrastructure::config::ConfigManager;
use propterm::PropTermConfig;

/// Configuration loading and persistence tests
#[test]
fn test_config_toml_round_trip() {
    let config = PropTermConfig::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");
    let deserialized: PropTermConfig =
        toml::from_str(&toml_str).expect("Failed to deserialize config");

    assert_eq!(config.global.log_level, deserialized.global.log_level);
    assert_eq!(config.global.indicator_ms, deserialized.global.indicator_ms);
    assert_eq!(config.terminal.baud_rate, deserialized.terminal.baud_rate);
    assert_eq!(config.terminal.echo, deserialized.terminal.echo);
}

#[test]
fn test_config_save_and_load_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");

    let mut config = PropTermConfig::default();
    config.terminal.port = "/dev/ttyUSB7".to_string();
    config.terminal.baud_rate = 57600;
    config.global.indicator_ms = 250;

    let manager = ConfigManager::new().expect("Failed to create ConfigManager");
    manager
        .save_config_to_path(&path, &config)
        .expect("Failed to save config");

    let loaded = manager
        .load_config_from_path(&path)
        .expect("Failed to load config");

    assert_eq!(loaded.terminal.port, "/dev/ttyUSB7");
    assert_eq!(loaded.terminal.baud_rate, 57600);
    assert_eq!(loaded.global.indicator_ms, 250);
}

#[test]
fn test_load_missing_file_fails() {
    let manager = ConfigManager::new().expect("Failed to create ConfigManager");
    let result = manager.load_config_from_path(std::path::Path::new("/nonexistent/config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "terminal = not valid toml [").expect("Failed to write file");

    let manager = ConfigManager::new().expect("Failed to create ConfigManager");
    assert!(manager.load_config_from_path(&path).is_err());
}
