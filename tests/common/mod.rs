use assert_fs::{prelude::*, TempDir};

pub const SAMPLE_CATALOG: &str = r#"{
    "groups": [
        {"id": "g1", "name": "Bills"},
        {"id": "g2", "name": "Leisure"}
    ],
    "items": [
        {"id": "a", "name": "Coffee"},
        {"id": "b", "name": "Rent", "hidden": true, "group_id": "g1"},
        {"id": "c", "name": "Electricity", "group_id": "g1"},
        {"id": "d", "name": "Cinema", "hidden": true, "group_id": "g2"}
    ]
}"#;

/// Fixture directory holding a catalog plus a colour-free config, so runs
/// never touch the user's real configuration.
pub struct PickerFixture {
    pub dir: TempDir,
}

impl PickerFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        dir.child("catalog.json")
            .write_str(SAMPLE_CATALOG)
            .expect("write catalog");
        dir.child("config.json")
            .write_str(r#"{"ui_color_enabled": false}"#)
            .expect("write config");
        Self { dir }
    }

    pub fn with_config(self, json: &str) -> Self {
        self.dir
            .child("config.json")
            .write_str(json)
            .expect("write config");
        self
    }

    pub fn catalog_path(&self) -> std::path::PathBuf {
        self.dir.path().join("catalog.json")
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.json")
    }
}
