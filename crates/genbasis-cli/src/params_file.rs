use std::path::Path;

use serde_json::{Map, Value, json};

use crate::CliError;

/// Parameter values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub min_support: Option<u64>,
    pub min_rule_support: Option<f64>,
    pub min_confidence: Option<f64>,
    pub epsilon: Option<f64>,
}

impl ParamOverrides {
    pub fn is_empty(&self) -> bool {
        self.min_support.is_none()
            && self.min_rule_support.is_none()
            && self.min_confidence.is_none()
            && self.epsilon.is_none()
    }
}

/// Read a `.json` or `.toml` parameter file into a JSON document.
pub fn read_params_file(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("toml") => {
            let value: toml::Value = toml::from_str(&content)?;
            Ok(serde_json::to_value(value)?)
        }
        Some("json") | None => Ok(serde_json::from_str(&content)?),
        Some(other) => Err(CliError::InvalidConfig(format!(
            "unsupported parameter file extension '.{other}' (use .json or .toml)"
        ))),
    }
}

/// Load the parameter document, then apply `overrides` on top.
///
/// A missing file is tolerated only when overrides are given; validation
/// then reports whatever is still missing.
pub fn load_params_value(path: &Path, overrides: &ParamOverrides) -> Result<Value, CliError> {
    let mut value = if path.exists() || overrides.is_empty() {
        read_params_file(path)?
    } else {
        tracing::warn!(path = %path.display(), "parameter file not found; using overrides only");
        Value::Object(Map::new())
    };
    apply_overrides(&mut value, overrides);
    Ok(value)
}

pub fn apply_overrides(value: &mut Value, overrides: &ParamOverrides) {
    let Value::Object(map) = value else {
        return;
    };
    if let Some(min_support) = overrides.min_support {
        map.insert("min_support".to_string(), json!(min_support));
    }
    if let Some(min_rule_support) = overrides.min_rule_support {
        map.insert("min_rule_support".to_string(), json!(min_rule_support));
    }
    if let Some(min_confidence) = overrides.min_confidence {
        map.insert("min_confidence".to_string(), json!(min_confidence));
    }
    if let Some(epsilon) = overrides.epsilon {
        map.insert("epsilon".to_string(), json!(epsilon));
    }
}
