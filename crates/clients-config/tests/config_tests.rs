use clients_config::{model::MAX_BANNER_TIMEOUT_MS, Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_two_second_banner() {
    let cfg = Config::default();

    assert_eq!(cfg.banner_timeout_ms, 2000);
    assert!(!cfg.log_filter.is_empty());
}

#[test]
fn load_without_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.banner_timeout_ms = 500;
    cfg.data_dir = Some(dir.path().join("data"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.banner_timeout_ms, 500);
    assert_eq!(loaded.data_dir, Some(dir.path().join("data")));
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write garbage");

    let err = ConfigManager::new(path).load().expect_err("garbage must fail");

    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn oversized_banner_timeout_is_rejected_on_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, format!("{{\"banner_timeout_ms\": {}}}", u64::MAX)).expect("write config");

    let err = ConfigManager::new(path).load().expect_err("out of range");

    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn largest_banner_timeout_is_accepted() {
    let mut cfg = Config::default();
    cfg.banner_timeout_ms = MAX_BANNER_TIMEOUT_MS;

    assert!(cfg.validate().is_ok());
}
