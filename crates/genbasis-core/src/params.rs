use jsonschema::JSONSchema;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::validation::{ValidationIssue, ValidationReport};

const KNOWN_KEYS: [&str; 4] = ["min_support", "min_rule_support", "min_confidence", "epsilon"];

/// Thresholds that drive one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MiningParams {
    /// Absolute number of transactions an itemset must appear in to be frequent.
    #[schemars(range(min = 1))]
    pub min_support: u64,
    /// Minimum relative support a rule needs to survive filtering.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub min_rule_support: f64,
    /// Minimum confidence a rule needs to survive filtering.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub min_confidence: f64,
    /// Tolerance, relative to the dataset size, between a generator count and
    /// the support of its closed itemset. Zero keeps exact generators only.
    #[serde(default)]
    #[schemars(range(min = 0.0))]
    pub epsilon: f64,
}

impl MiningParams {
    /// Range checks that must pass before any mining starts.
    pub fn validate(&self) -> Result<()> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(Error::InvalidParams(format!(
                "{}: {}",
                issue.path.trim_start_matches('/'),
                issue.message
            ))),
            None => Ok(()),
        }
    }

    fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.min_support == 0 {
            issues.push(ValidationIssue::error(
                "out_of_range",
                "/min_support",
                "must be a positive integer",
                None,
            ));
        }
        for (path, value) in [
            ("/min_rule_support", self.min_rule_support),
            ("/min_confidence", self.min_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ValidationIssue::error(
                    "out_of_range",
                    path,
                    format!("must be within [0, 1], got {value}"),
                    None,
                ));
            }
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            issues.push(ValidationIssue::error(
                "out_of_range",
                "/epsilon",
                format!("must be a non-negative number, got {}", self.epsilon),
                None,
            ));
        }

        issues
    }
}

/// Emit the JSON Schema for parameter files.
pub fn params_json_schema() -> RootSchema {
    schema_for!(MiningParams)
}

/// Validate a parameter document against the parameter JSON Schema.
pub fn validate_params_json(params_json: &Value) -> Result<ValidationReport> {
    let schema = serde_json::to_value(params_json_schema())
        .map_err(|err| Error::Schema(err.to_string()))?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(params_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push(ValidationIssue::error(
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    if let Value::Object(map) = params_json {
        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                report.push(ValidationIssue::warning(
                    "unknown_param",
                    format!("/{key}"),
                    format!("unknown parameter '{key}' is ignored"),
                    Some(format!("recognized parameters: {}", KNOWN_KEYS.join(", "))),
                ));
            }
        }
    }

    Ok(report)
}

/// Validate a parameter document end-to-end and decode it.
///
/// Warnings (such as unknown keys) do not fail parsing; the caller decides
/// whether to surface them.
pub fn parse_params(
    params_json: &Value,
) -> std::result::Result<(MiningParams, ValidationReport), ValidationReport> {
    let structural = match validate_params_json(params_json) {
        Ok(report) => report,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push(ValidationIssue::error(
                "schema_validation_error",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    if !structural.is_ok() {
        return Err(structural);
    }

    let params: MiningParams = match serde_json::from_value(params_json.clone()) {
        Ok(params) => params,
        Err(err) => {
            let mut report = structural;
            report.push(ValidationIssue::error(
                "invalid_params_json",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    let mut report = structural;
    for issue in params.issues() {
        report.push(issue);
    }

    if report.is_ok() {
        Ok((params, report))
    } else {
        Err(report)
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MiningParams {
        MiningParams {
            min_support: 2,
            min_rule_support: 0.2,
            min_confidence: 0.5,
            epsilon: 0.0,
        }
    }

    #[test]
    fn accepts_valid_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn rejects_zero_min_support() {
        let params = MiningParams {
            min_support: 0,
            ..params()
        };
        let err = params.validate().expect_err("min_support 0 must fail");
        assert!(err.to_string().contains("min_support"));
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let params = MiningParams {
            min_confidence: 1.5,
            ..params()
        };
        assert!(params.validate().is_err());

        let params = MiningParams {
            min_rule_support: f64::NAN,
            ..self::params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_negative_epsilon() {
        let params = MiningParams {
            epsilon: -0.1,
            ..params()
        };
        let err = params.validate().expect_err("negative epsilon must fail");
        assert!(err.to_string().contains("epsilon"));
    }
}
