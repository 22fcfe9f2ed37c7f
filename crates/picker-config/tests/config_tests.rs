use picker_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_locale() {
    let cfg = Config::default();

    assert!(!cfg.locale.is_empty());
    assert!(cfg.use_color());
    assert!(!cfg.editable_selection);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent").join("config.json"));

    assert_eq!(manager.load().expect("load config"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("picker")).expect("manager");

    let mut cfg = Config::default();
    cfg.locale = "pt-BR".to_string();
    cfg.editable_selection = true;
    cfg.default_group_label = Some("Sem grupo".to_string());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"accessibility": {"plain_output": true}, "default_group_label": "  "}"#)
        .expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");

    assert_eq!(loaded.locale, "en-US");
    assert!(!loaded.use_color());
    assert_eq!(loaded.default_group_label(), None);
}
