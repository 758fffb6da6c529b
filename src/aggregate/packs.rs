//! Rounds aggregated quantities to purchasable pack sizes.
//!
//! Rules are applied in list order; a later rule can further adjust a
//! quantity already touched by an earlier one. Items matching no rule pass
//! through unchanged, zero and negative quantities included.

use serde::{Deserialize, Serialize};

use crate::model::AggregatedItem;
use crate::units::Unit;

/// How a quantity is adjusted to match how the item is sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoundingRule {
    /// Round to the nearest multiple of `step` (e.g. whole pounds)
    Nearest { unit: Unit, step: f64 },
    /// Round up to the next integer (e.g. countable items)
    Ceil { unit: Unit },
    /// For items whose name contains `keyword`, round up to the next
    /// multiple of `multiple` (e.g. eggs to dozens)
    CeilMultiple {
        unit: Unit,
        keyword: String,
        multiple: f64,
    },
}

impl RoundingRule {
    fn unit(&self) -> &Unit {
        match self {
            RoundingRule::Nearest { unit, .. }
            | RoundingRule::Ceil { unit }
            | RoundingRule::CeilMultiple { unit, .. } => unit,
        }
    }

    fn apply(&self, name: &str, qty: f64) -> f64 {
        match self {
            RoundingRule::Nearest { step, .. } => (qty / step).round() * step,
            RoundingRule::Ceil { .. } => qty.ceil(),
            RoundingRule::CeilMultiple {
                keyword, multiple, ..
            } => {
                if name.to_lowercase().contains(keyword.as_str()) {
                    (qty / multiple).ceil() * multiple
                } else {
                    qty
                }
            }
        }
    }
}

/// Ordered rounding rules; order is an externally observable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacksConfig {
    pub rules: Vec<RoundingRule>,
}

impl Default for PacksConfig {
    fn default() -> Self {
        PacksConfig {
            rules: vec![
                RoundingRule::Nearest {
                    unit: Unit::from("lb".to_string()),
                    step: 1.0,
                },
                RoundingRule::Ceil {
                    unit: Unit::from("count".to_string()),
                },
                RoundingRule::CeilMultiple {
                    unit: Unit::from("count".to_string()),
                    keyword: "egg".to_string(),
                    multiple: 12.0,
                },
            ],
        }
    }
}

/// Apply the rule list, in order, to every item whose unit matches.
pub fn round_to_packs(items: &[AggregatedItem], config: &PacksConfig) -> Vec<AggregatedItem> {
    items
        .iter()
        .map(|item| {
            let mut qty = item.qty;
            for rule in &config.rules {
                if item.unit.as_ref() == Some(rule.unit()) {
                    qty = rule.apply(&item.name, qty);
                }
            }
            AggregatedItem {
                qty,
                ..item.clone()
            }
        })
        .collect()
}
