use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::categories::Category;
use crate::units::Unit;

/// One ingredient line as tokenized from recipe text.
///
/// Quantity and unit are syntactic: they reflect what was typed ("cups",
/// "tbsp.") and are only canonicalized later, during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The ingredient item name, e.g. "olive oil"
    pub item: String,
    /// Parsed numeric quantity, if present (e.g. 1.5 for "1 1/2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    /// Unit string as typed, minus one trailing period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-form note/descriptor (e.g. "chopped", "room temperature")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Ingredient {
    pub fn item_only(item: impl Into<String>) -> Self {
        Ingredient {
            item: item.into(),
            qty: None,
            unit: None,
            note: None,
        }
    }
}

/// A recipe as parsed from the plain-text template.
///
/// Absent sections yield empty or `None` fields, never an error; the
/// validator decides whether the result is complete enough to keep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Recipe title from the text
    pub title: String,
    /// Number of servings, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Lowercase tags, in text order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Parsed list of ingredients
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Step-by-step instructions, one step per entry
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A stored recipe: parsed fields plus identity and bookkeeping set by the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable string id, used as the store key and the multiplier key
    pub id: String,
    #[serde(flatten)]
    pub parsed: ParsedRecipe,
    /// Original text, useful for re-parse and export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Wrap a parsed recipe under the given id. Timestamps are left unset;
    /// the store stamps them on save.
    pub fn new(id: impl Into<String>, parsed: ParsedRecipe, source_text: Option<String>) -> Self {
        Recipe {
            id: id.into(),
            parsed,
            source_text,
            created_at: None,
            updated_at: None,
        }
    }
}

/// One line of the merged shopping list.
///
/// Items are keyed by `(lowercased name, unit-or-"unitless")` during
/// aggregation; quantities accumulate in place for every ingredient that
/// maps to the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    pub qty: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Aggregated items grouped under a display category, ready to format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryGroup {
    pub category: Category,
    pub items: Vec<AggregatedItem>,
}
