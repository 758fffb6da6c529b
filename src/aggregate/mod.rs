//! Scales ingredient quantities by per-recipe serving multipliers and
//! merges them into a single shopping list.

pub mod categories;
pub mod packs;

use log::warn;
use std::collections::HashMap;

use crate::model::{AggregatedItem, Ingredient, Recipe};
use crate::units::{self, Unit};

/// An ingredient with its unit canonicalized and any trailing comma phrase
/// of the item moved into the note.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIngredient {
    pub item: String,
    pub qty: Option<f64>,
    pub unit: Option<Unit>,
    pub note: Option<String>,
}

/// Canonicalize the unit and split "butter, softened" into item "butter"
/// with note "softened". An existing note is kept and the extracted phrase
/// appended with "; ".
pub fn normalize_ingredient(ing: &Ingredient) -> NormalizedIngredient {
    let unit = ing.unit.as_deref().map(units::canonicalize);

    let (item, extracted) = match ing.item.split_once(',') {
        Some((head, tail)) => (head.trim().to_string(), Some(tail.trim().to_string())),
        None => (ing.item.clone(), None),
    };

    let note = match (ing.note.clone(), extracted) {
        (Some(existing), Some(extra)) => Some(format!("{existing}; {extra}")),
        (Some(existing), None) => Some(existing),
        (None, extra) => extra,
    };

    NormalizedIngredient {
        item,
        qty: ing.qty,
        unit,
        note,
    }
}

fn aggregation_key(name: &str, unit: Option<&Unit>) -> String {
    let unit = unit.map(Unit::as_str).unwrap_or("unitless");
    format!("{}__{}", name.to_lowercase(), unit)
}

/// Fold a scaled quantity into an existing entry. Same unit: plain sum.
/// Different defined units: convert into the existing entry's unit, and if
/// the units turn out incompatible, sum the raw quantities anyway (lossy
/// fallback, kept observable via a warning).
fn merge_quantity(existing: &mut AggregatedItem, unit: Option<&Unit>, qty: f64) {
    if existing.unit.as_ref() == unit {
        existing.qty += qty;
        return;
    }

    if let (Some(into), Some(from)) = (existing.unit.as_ref(), unit) {
        match units::convert(qty, from, into) {
            Some(converted) => existing.qty += converted,
            None => {
                warn!(
                    "summing incompatible units for '{}': {} + {} {}",
                    existing.name, into, qty, from
                );
                existing.qty += qty;
            }
        }
        return;
    }

    existing.qty += qty;
}

/// Scale every ingredient of every recipe by that recipe's multiplier
/// (default 1) and merge into one list keyed by lowercased name + unit.
/// A missing quantity counts as 1 before scaling. Output is sorted by name,
/// case-insensitively.
pub fn aggregate(recipes: &[Recipe], multipliers: &HashMap<String, f64>) -> Vec<AggregatedItem> {
    let mut map: HashMap<String, AggregatedItem> = HashMap::new();

    for recipe in recipes {
        let mult = multipliers.get(&recipe.id).copied().unwrap_or(1.0);

        for ing in &recipe.parsed.ingredients {
            let norm = normalize_ingredient(ing);
            let qty = norm.qty.unwrap_or(1.0) * mult;
            let key = aggregation_key(&norm.item, norm.unit.as_ref());

            match map.get_mut(&key) {
                Some(existing) => merge_quantity(existing, norm.unit.as_ref(), qty),
                None => {
                    map.insert(
                        key,
                        AggregatedItem {
                            name: norm.item,
                            unit: norm.unit,
                            qty,
                            note: norm.note,
                        },
                    );
                }
            }
        }
    }

    let mut items: Vec<AggregatedItem> = map.into_values().collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParsedRecipe, Recipe};
    use crate::units::canonicalize;

    fn recipe(id: &str, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe::new(
            id,
            ParsedRecipe {
                title: id.to_string(),
                ingredients,
                ..ParsedRecipe::default()
            },
            None,
        )
    }

    fn ing(item: &str, qty: Option<f64>, unit: Option<&str>) -> Ingredient {
        Ingredient {
            item: item.to_string(),
            qty,
            unit: unit.map(String::from),
            note: None,
        }
    }

    #[test]
    fn test_normalize_extracts_trailing_note() {
        let norm = normalize_ingredient(&ing("butter, softened", Some(1.0), Some("cup")));
        assert_eq!(norm.item, "butter");
        assert_eq!(norm.note.as_deref(), Some("softened"));
        assert_eq!(norm.unit, Some(canonicalize("cup")));
    }

    #[test]
    fn test_normalize_appends_to_existing_note() {
        let mut base = ing("butter, softened", None, None);
        base.note = Some("salted".to_string());
        let norm = normalize_ingredient(&base);
        assert_eq!(norm.note.as_deref(), Some("salted; softened"));
    }

    #[test]
    fn test_multiplier_weighted_sum() {
        let recipes = vec![
            recipe("a", vec![ing("flour", Some(2.0), Some("cup"))]),
            recipe("b", vec![ing("Flour", Some(1.0), Some("cups"))]),
        ];
        let mut mult = HashMap::new();
        mult.insert("a".to_string(), 2.0);
        mult.insert("b".to_string(), 3.0);

        let items = aggregate(&recipes, &mult);
        assert_eq!(items.len(), 1);
        assert!((items[0].qty - 7.0).abs() < 1e-9);
        assert_eq!(items[0].unit, Some(canonicalize("cup")));
    }

    #[test]
    fn test_default_multiplier_is_one() {
        let recipes = vec![recipe("a", vec![ing("milk", Some(1.5), Some("cup"))])];
        let items = aggregate(&recipes, &HashMap::new());
        assert_eq!(items[0].qty, 1.5);
    }

    #[test]
    fn test_absent_quantity_counts_as_one() {
        let recipes = vec![
            recipe("a", vec![ing("lemon", None, None)]),
            recipe("b", vec![ing("lemon", Some(2.0), None)]),
        ];
        let items = aggregate(&recipes, &HashMap::new());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].qty, 3.0);
    }

    #[test]
    fn test_different_units_stay_separate_entries() {
        // the aggregation key includes the unit, so cup-broth and g-broth
        // are distinct lines
        let recipes = vec![recipe(
            "a",
            vec![
                ing("broth", Some(1.0), Some("cup")),
                ing("broth", Some(100.0), Some("g")),
            ],
        )];
        let items = aggregate(&recipes, &HashMap::new());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_merge_converts_between_compatible_units() {
        let mut existing = AggregatedItem {
            name: "broth".to_string(),
            unit: Some(canonicalize("cup")),
            qty: 1.0,
            note: None,
        };
        merge_quantity(&mut existing, Some(&canonicalize("tbsp")), 8.0);
        assert!((existing.qty - 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_merge_incompatible_units_sums_raw() {
        let mut existing = AggregatedItem {
            name: "flour".to_string(),
            unit: Some(canonicalize("cup")),
            qty: 1.0,
            note: None,
        };
        merge_quantity(&mut existing, Some(&canonicalize("g")), 100.0);
        assert_eq!(existing.qty, 101.0);
    }

    #[test]
    fn test_output_sorted_case_insensitively() {
        let recipes = vec![recipe(
            "a",
            vec![
                ing("Zucchini", Some(1.0), None),
                ing("apple", Some(1.0), None),
                ing("Banana", Some(1.0), None),
            ],
        )];
        let items = aggregate(&recipes, &HashMap::new());
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Banana", "Zucchini"]);
    }
}
