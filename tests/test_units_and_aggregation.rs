use std::collections::HashMap;

use grocery_buddy::{
    aggregate::aggregate, canonicalize, convert, parse_recipe, Recipe, Unit, UnitCategory,
};

const EPS: f64 = 1e-9;

#[test]
fn test_alias_round_trip_preserves_quantity() {
    // canonicalize any alias, convert there and back
    for (a, b) in [("cups", "tablespoons"), ("liters", "tsp"), ("kilograms", "ounces")] {
        let from = canonicalize(a);
        let to = canonicalize(b);
        let x = 2.7;
        let there = convert(x, &from, &to).unwrap();
        let back = convert(there, &to, &from).unwrap();
        assert!((back - x).abs() < EPS, "{a} <-> {b} drifted: {back}");
    }
}

#[test]
fn test_identity_conversion_for_every_unit() {
    for raw in ["ml", "l", "tsp", "tbsp", "fl-oz", "cup", "g", "kg", "oz", "lb", "count", "sprig"]
    {
        let unit = canonicalize(raw);
        assert_eq!(convert(5.0, &unit, &unit), Some(5.0), "identity failed for {raw}");
    }
}

#[test]
fn test_volume_to_mass_is_never_convertible() {
    for volume in ["ml", "l", "tsp", "tbsp", "fl-oz", "cup"] {
        for mass in ["g", "kg", "oz", "lb"] {
            let v = canonicalize(volume);
            let m = canonicalize(mass);
            assert_eq!(convert(1.0, &v, &m), None, "{volume} -> {mass}");
            assert_eq!(convert(1.0, &m, &v), None, "{mass} -> {volume}");
        }
    }
}

#[test]
fn test_unknown_unit_category() {
    let sprig = canonicalize("sprig");
    assert!(matches!(sprig, Unit::Other(_)));
    assert_eq!(sprig.category(), UnitCategory::Unknown);
    assert_eq!(convert(1.0, &sprig, &canonicalize("count")), None);
}

fn recipe_from(id: &str, text: &str) -> Recipe {
    Recipe::new(id, parse_recipe(text), None)
}

#[test]
fn test_multiplier_weighted_sum_across_recipes() {
    let quantities = [2.0, 0.5, 1.25];
    let multipliers_by_index = [1.0, 3.0, 2.0];

    let recipes: Vec<Recipe> = quantities
        .iter()
        .enumerate()
        .map(|(i, qty)| {
            recipe_from(
                &format!("r{i}"),
                &format!("Title: r{i}\nIngredients:\n- {qty} cup milk"),
            )
        })
        .collect();

    let mut multipliers = HashMap::new();
    for (i, m) in multipliers_by_index.iter().enumerate() {
        multipliers.insert(format!("r{i}"), *m);
    }

    let items = aggregate(&recipes, &multipliers);
    assert_eq!(items.len(), 1);

    let expected: f64 = quantities
        .iter()
        .zip(multipliers_by_index.iter())
        .map(|(q, m)| q * m)
        .sum();
    assert!((items[0].qty - expected).abs() < EPS);
}

#[test]
fn test_cup_and_tbsp_sum_to_cup_equivalent() {
    // one recipe needs 1 cup, the other 8 tbsp of the same item; the two
    // lines convert to a combined 1.5 cup-equivalent
    let recipes = vec![
        recipe_from("a", "Title: a\nIngredients:\n- 1 cup broth"),
        recipe_from("b", "Title: b\nIngredients:\n- 8 tbsp broth"),
    ];

    let items = aggregate(&recipes, &HashMap::new());
    assert_eq!(items.len(), 2);

    let cup = canonicalize("cup");
    let total: f64 = items
        .iter()
        .map(|item| convert(item.qty, item.unit.as_ref().unwrap(), &cup).unwrap())
        .sum();
    assert!((total - 1.5).abs() < 1e-3);
}

#[test]
fn test_note_survives_aggregation() {
    let recipes = vec![recipe_from(
        "a",
        "Title: a\nIngredients:\n- 1 cup butter, softened",
    )];
    let items = aggregate(&recipes, &HashMap::new());
    assert_eq!(items[0].name, "butter");
    assert_eq!(items[0].note.as_deref(), Some("softened"));
}

#[test]
fn test_unit_spellings_merge_after_canonicalization() {
    let recipes = vec![
        recipe_from("a", "Title: a\nIngredients:\n- 1 tablespoon olive oil"),
        recipe_from("b", "Title: b\nIngredients:\n- 2 tbsp. olive oil"),
    ];
    let items = aggregate(&recipes, &HashMap::new());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].unit, Some(canonicalize("tbsp")));
    assert!((items[0].qty - 3.0).abs() < EPS);
}
