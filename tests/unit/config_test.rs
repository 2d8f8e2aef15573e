//! Tests for configuration validation

use priority_dispatch::config::{FleetConfig, ResourceSeed, CONFIG_PATH_ENV, DEFAULT_CAPACITY};
use priority_dispatch::core::FareTable;

fn fleet(resources: Vec<ResourceSeed>) -> FleetConfig {
    FleetConfig {
        default_capacity: DEFAULT_CAPACITY,
        resources,
        fares: None,
    }
}

#[test]
fn test_fleet_config_validation() {
    let valid = fleet(vec![ResourceSeed::new("Huye", 3900)]);
    assert!(valid.validate().is_ok());
    assert!(FleetConfig::kigali().validate().is_ok());
}

#[test]
fn test_fleet_config_empty_resources() {
    assert!(fleet(Vec::new()).validate().is_err());
}

#[test]
fn test_fleet_config_invalid_capacity() {
    let invalid = fleet(vec![ResourceSeed::new("Huye", 3900).with_capacity(0)]);
    assert!(invalid.validate().is_err());

    let mut invalid_default = fleet(vec![ResourceSeed::new("Huye", 3900)]);
    invalid_default.default_capacity = -1;
    assert!(invalid_default.validate().is_err());
}

#[test]
fn test_fleet_config_empty_location() {
    assert!(fleet(vec![ResourceSeed::new("  ", 3900)]).validate().is_err());
}

#[test]
fn test_fleet_config_duplicate_ids() {
    let invalid = fleet(vec![
        ResourceSeed::new("Huye", 3900).with_id("T1"),
        ResourceSeed::new("Musanze", 3500).with_id("T1"),
    ]);
    let err = invalid.validate().unwrap_err();
    assert!(err.contains("duplicate id"), "{err}");
}

#[test]
fn test_capacity_falls_back_to_default() {
    let cfg = fleet(vec![
        ResourceSeed::new("Huye", 3900),
        ResourceSeed::new("Musanze", 3500).with_capacity(28),
    ]);
    assert_eq!(cfg.capacity_of(&cfg.resources[0]), DEFAULT_CAPACITY);
    assert_eq!(cfg.capacity_of(&cfg.resources[1]), 28);
}

#[test]
fn test_fleet_config_from_json() {
    let json = r#"{
        "default_capacity": 2,
        "resources": [
            { "id": "T1", "location": "Huye", "fare": 3900 },
            { "location": "Musanze", "fare": 3500, "capacity": 28 }
        ],
        "fares": { "Kigali-Huye": 3900, "Kigali-Musanze": 3500 }
    }"#;

    let config = FleetConfig::from_json_str(json).unwrap();
    assert_eq!(config.default_capacity, 2);
    assert_eq!(config.resources.len(), 2);
    assert_eq!(config.resources[0].id.as_ref().unwrap().as_str(), "T1");
    assert_eq!(config.resources[1].capacity, Some(28));
    assert_eq!(config.fares.as_ref().map(FareTable::len), Some(2));
}

#[test]
fn test_fleet_config_from_json_defaults() {
    let json = r#"{ "resources": [ { "location": "Huye", "fare": 3900 } ] }"#;
    let config = FleetConfig::from_json_str(json).unwrap();
    assert_eq!(config.default_capacity, DEFAULT_CAPACITY);
    assert!(config.fares.is_none());
}

#[test]
fn test_fleet_config_from_json_rejects_invalid() {
    assert!(FleetConfig::from_json_str("{ not json").is_err());
    assert!(FleetConfig::from_json_str(r#"{ "resources": [] }"#).is_err());
}

#[test]
fn test_fleet_config_from_path() {
    let path = std::env::temp_dir().join(format!("fleet-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "resources": [ { "location": "Rusizi", "fare": 9000, "capacity": 3 } ] }"#,
    )
    .unwrap();

    let config = FleetConfig::from_path(&path).unwrap();
    assert_eq!(config.resources[0].location, "Rusizi");
    std::fs::remove_file(&path).unwrap();

    assert!(FleetConfig::from_path(&path).is_err());
}

/// Restores `CONFIG_PATH_ENV` and removes scratch files when dropped.
struct EnvGuard {
    previous: Option<String>,
    files: Vec<std::path::PathBuf>,
}

impl EnvGuard {
    fn take() -> Self {
        let previous = std::env::var(CONFIG_PATH_ENV).ok();
        std::env::remove_var(CONFIG_PATH_ENV);
        Self {
            previous,
            files: Vec::new(),
        }
    }

    fn scratch(&mut self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        self.files.push(path.clone());
        path
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(CONFIG_PATH_ENV, value),
            None => std::env::remove_var(CONFIG_PATH_ENV),
        }
        for file in &self.files {
            let _ = std::fs::remove_file(file);
        }
    }
}

// Both cases share one test so nothing else races on the variable.
#[test]
fn test_fleet_config_from_env() {
    let mut guard = EnvGuard::take();

    let fallback = FleetConfig::from_env().unwrap();
    assert_eq!(fallback, FleetConfig::kigali());

    let config = guard.scratch(
        "env-fleet.json",
        r#"{ "resources": [ { "id": "N1", "location": "Nyagatare", "fare": 4000 } ] }"#,
    );
    let dotenv = guard.scratch(
        "fleet.env",
        &format!("{CONFIG_PATH_ENV}={}\n", config.display()),
    );

    let loaded = FleetConfig::from_dotenv(&dotenv).unwrap();
    assert_eq!(loaded.resources.len(), 1);
    assert_eq!(loaded.resources[0].location, "Nyagatare");
    assert_eq!(
        std::env::var(CONFIG_PATH_ENV).unwrap(),
        config.display().to_string()
    );

    // The variable set by the dotenv file now drives the plain loader too.
    assert_eq!(FleetConfig::from_env().unwrap(), loaded);

    let absent = std::env::temp_dir().join(format!("{}-absent.json", std::process::id()));
    std::env::set_var(CONFIG_PATH_ENV, &absent);
    assert!(FleetConfig::from_env().is_err());
}
