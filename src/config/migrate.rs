//! Settings file checks and in-place migrations.

use super::{DEFAULT_ARRIVAL, DEFAULT_LUNCH_BREAK, DEFAULT_WORK_DURATION};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every persisted key with the value used when it is missing.
pub const FIELDS: [(&str, &str); 3] = [
    ("arrival", DEFAULT_ARRIVAL),
    ("work_duration", DEFAULT_WORK_DURATION),
    ("lunch_break", DEFAULT_LUNCH_BREAK),
];

/// What a migration changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub added: Vec<&'static str>,
    pub converted: Vec<&'static str>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.converted.is_empty()
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys absent from the settings file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(FIELDS
        .iter()
        .filter(|(key, _)| !map.contains_key(&Value::String(key.to_string())))
        .map(|(key, _)| *key)
        .collect())
}

/// Add missing keys with their defaults and turn numeric values written by
/// hand (`lunch_break: 30`) into strings. Present string values are kept.
pub fn migrate_config(path: &Path) -> AppResult<MigrationReport> {
    let mut map = read_mapping(path)?;
    let mut report = MigrationReport::default();

    for (key, default) in FIELDS {
        let k = Value::String(key.to_string());
        let replacement = match map.get(&k) {
            None | Some(Value::Null) => {
                report.added.push(key);
                default.to_string()
            }
            Some(Value::Number(n)) => {
                report.converted.push(key);
                n.to_string()
            }
            Some(_) => continue,
        };
        map.insert(k, Value::String(replacement));
    }

    if report.is_empty() {
        return Ok(report);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    tracing::info!(
        path = %path.display(),
        added = ?report.added,
        converted = ?report.converted,
        "configuration migrated"
    );
    Ok(report)
}
