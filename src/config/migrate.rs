//! Configuration file migration: detect and fill fields added by newer
//! releases, preserving everything the user already set.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields every up-to-date config file must contain, with their defaults.
fn required_fields() -> Vec<(&'static str, Value)> {
    vec![
        ("database", Value::String(String::new())),
        ("match_threshold", Value::from(0.6)),
        ("week_start", Value::String("sunday".to_string())),
        ("default_source", Value::String("cli".to_string())),
    ]
}

/// Names of fields missing from the given config file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config("config file is not a YAML mapping".into()));
    };

    let mut missing = Vec::new();
    for (key, _) in required_fields() {
        if !map.contains_key(Value::String(key.to_string())) {
            missing.push(key.to_string());
        }
    }

    Ok(missing)
}

/// Insert defaults for any missing fields, preserving existing values.
///
/// Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(AppError::Config("config file is not a YAML mapping".into()));
    };

    let mut changed = false;
    for (key, default) in required_fields() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            // `database` has a computed default; never invent a path here.
            if key == "database" {
                map.insert(
                    k,
                    Value::String(
                        crate::config::Config::database_file()
                            .to_string_lossy()
                            .to_string(),
                    ),
                );
            } else {
                map.insert(k, default);
            }
            changed = true;
        }
    }

    if changed {
        let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized)?;
    }

    Ok(changed)
}
