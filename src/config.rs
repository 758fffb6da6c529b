use config::{Config, Environment, File};
use serde::Deserialize;

use crate::aggregate::packs::{PacksConfig, RoundingRule};
use crate::error::GroceryError;
use crate::units::Unit;

/// Pack-rounding settings as they appear in `packs.toml`.
///
/// Each `[[rules]]` table carries a `type` plus the fields that type needs:
///
/// ```toml
/// [[rules]]
/// type = "nearest"
/// unit = "lb"
/// step = 1.0
///
/// [[rules]]
/// type = "ceil-multiple"
/// unit = "count"
/// keyword = "egg"
/// multiple = 12
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct PacksSettings {
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleEntry>,
}

/// One rule entry before validation. Flat on purpose: the config crate's
/// deserializer handles plain structs more predictably than tagged enums,
/// and a flat entry gives better error messages for a missing field.
#[derive(Debug, Deserialize, Clone)]
pub struct RuleEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub unit: String,
    pub step: Option<f64>,
    pub keyword: Option<String>,
    pub multiple: Option<f64>,
}

// Default value functions
fn default_rules() -> Vec<RuleEntry> {
    vec![
        RuleEntry {
            kind: "nearest".to_string(),
            unit: "lb".to_string(),
            step: Some(1.0),
            keyword: None,
            multiple: None,
        },
        RuleEntry {
            kind: "ceil".to_string(),
            unit: "count".to_string(),
            step: None,
            keyword: None,
            multiple: None,
        },
        RuleEntry {
            kind: "ceil-multiple".to_string(),
            unit: "count".to_string(),
            step: None,
            keyword: Some("egg".to_string()),
            multiple: Some(12.0),
        },
    ]
}

impl RuleEntry {
    fn into_rule(self) -> Result<RoundingRule, GroceryError> {
        let unit = Unit::from(self.unit);
        match self.kind.as_str() {
            "nearest" => {
                let step = self
                    .step
                    .ok_or_else(|| GroceryError::InvalidRule("nearest requires a step".into()))?;
                if !(step.is_finite() && step > 0.0) {
                    return Err(GroceryError::InvalidRule("step must be positive".into()));
                }
                Ok(RoundingRule::Nearest { unit, step })
            }
            "ceil" => Ok(RoundingRule::Ceil { unit }),
            "ceil-multiple" => {
                let keyword = self.keyword.ok_or_else(|| {
                    GroceryError::InvalidRule("ceil-multiple requires a keyword".into())
                })?;
                let multiple = self.multiple.ok_or_else(|| {
                    GroceryError::InvalidRule("ceil-multiple requires a multiple".into())
                })?;
                if !(multiple.is_finite() && multiple > 0.0) {
                    return Err(GroceryError::InvalidRule("multiple must be positive".into()));
                }
                Ok(RoundingRule::CeilMultiple {
                    unit,
                    keyword: keyword.to_lowercase(),
                    multiple,
                })
            }
            other => Err(GroceryError::InvalidRule(format!(
                "unknown rule type '{other}'"
            ))),
        }
    }
}

impl PacksSettings {
    pub fn into_packs_config(self) -> Result<PacksConfig, GroceryError> {
        let rules = self
            .rules
            .into_iter()
            .map(RuleEntry::into_rule)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PacksConfig { rules })
    }
}

/// Load pack-rounding configuration from file and environment variables.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with GROCERY__ prefix
/// 2. packs.toml file in current directory
/// 3. Default rules (whole pounds, whole count items, eggs by the dozen)
pub fn load_packs_config() -> Result<PacksConfig, GroceryError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("packs").required(false))
        // Use double underscore for nested: GROCERY__RULES
        .add_source(
            Environment::with_prefix("GROCERY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: PacksSettings = settings.try_deserialize()?;
    settings.into_packs_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_builtin_config() {
        let settings = PacksSettings {
            rules: default_rules(),
        };
        let loaded = settings.into_packs_config().unwrap();
        assert_eq!(loaded, PacksConfig::default());
    }

    #[test]
    fn test_nearest_requires_step() {
        let entry = RuleEntry {
            kind: "nearest".to_string(),
            unit: "lb".to_string(),
            step: None,
            keyword: None,
            multiple: None,
        };
        assert!(matches!(
            entry.into_rule(),
            Err(GroceryError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_unknown_rule_type_rejected() {
        let entry = RuleEntry {
            kind: "floor".to_string(),
            unit: "lb".to_string(),
            step: Some(1.0),
            keyword: None,
            multiple: None,
        };
        assert!(entry.into_rule().is_err());
    }

    #[test]
    fn test_keyword_lowercased() {
        let entry = RuleEntry {
            kind: "ceil-multiple".to_string(),
            unit: "count".to_string(),
            step: None,
            keyword: Some("Egg".to_string()),
            multiple: Some(12.0),
        };
        match entry.into_rule().unwrap() {
            RoundingRule::CeilMultiple { keyword, .. } => assert_eq!(keyword, "egg"),
            other => panic!("unexpected rule: {other:?}"),
        }
    }
}
