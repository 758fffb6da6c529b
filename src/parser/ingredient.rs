//! Tokenizes a single ingredient line into quantity, unit, and item.
//!
//! The grammar is deliberately small: an optional leading quantity (integer,
//! decimal, fraction, or mixed number), an optional unit token, an optional
//! connective "of", and everything else is the item. Unit detection is a
//! two-table heuristic (recognized spellings plus a short-token fallback
//! guarded by a food-word blacklist) tuned to avoid swallowing a food word
//! as a fake unit.

use crate::model::Ingredient;

/// Spellings always accepted as units, long and short forms. Not exhaustive;
/// short tokens outside this set still qualify via the length fallback.
const RECOGNIZED_UNITS: &[&str] = &[
    "tsp",
    "tbsp",
    "tbl",
    "tablespoon",
    "tablespoons",
    "teaspoon",
    "teaspoons",
    "cup",
    "cups",
    "ml",
    "l",
    "dl",
    "g",
    "kg",
    "mg",
    "gram",
    "grams",
    "oz",
    "fl-oz",
    "lb",
    "lbs",
    "pound",
    "pounds",
    "pinch",
    "dash",
    "clove",
    "cloves",
    "can",
    "cans",
    "package",
    "packages",
    "rib",
    "ribs",
];

/// Short food words that the length fallback would otherwise misclassify.
const NON_UNIT_WORDS: &[&str] = &["egg", "eggs", "onion", "onions"];

/// Strip one leading "- " or "* " bullet, then trim.
pub fn strip_bullet_prefix(line: &str) -> &str {
    let trimmed = line.trim();
    for bullet in ["-", "*"] {
        if let Some(rest) = trimmed.strip_prefix(bullet) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return rest.trim();
            }
        }
    }
    trimmed
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// "1/2" → 0.5; rejects zero denominators.
fn parse_fraction(token: &str) -> Option<f64> {
    let (num, den) = token.split_once('/')?;
    if !is_all_digits(num) || !is_all_digits(den) {
        return None;
    }
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// "1.5" → 1.5; requires digits on both sides of the point.
fn parse_decimal(token: &str) -> Option<f64> {
    let (whole, frac) = token.split_once('.')?;
    if !is_all_digits(whole) || !is_all_digits(frac) {
        return None;
    }
    token.parse().ok()
}

/// Consume a leading quantity from the token stream. Supports "2", "1.5",
/// "1/2", and the mixed form "1 1/2". Returns the quantity (if any) and the
/// index of the first unconsumed token.
fn take_quantity(tokens: &[&str]) -> (Option<f64>, usize) {
    let first = match tokens.first() {
        Some(t) => *t,
        None => return (None, 0),
    };

    if let Some(qty) = parse_decimal(first) {
        return (Some(qty), 1);
    }

    if is_all_digits(first) {
        let whole: f64 = match first.parse() {
            Ok(w) => w,
            Err(_) => return (None, 0),
        };
        if let Some(frac) = tokens.get(1).and_then(|t| parse_fraction(t)) {
            return (Some(whole + frac), 2);
        }
        return (Some(whole), 1);
    }

    if let Some(qty) = parse_fraction(first) {
        return (Some(qty), 1);
    }

    (None, 0)
}

/// Heuristic unit test: lowercase, strip a trailing period, require an
/// alphabetic shape (letters, dots, hyphens), then accept recognized
/// spellings or any 1-4 letter token not in the blacklist.
fn is_likely_unit(token: &str) -> bool {
    let lowered = token.to_lowercase();
    let cleaned = lowered.strip_suffix('.').unwrap_or(&lowered);

    let mut chars = cleaned.chars();
    let shape_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c == '.' || c == '-');
    if !shape_ok {
        return false;
    }

    if NON_UNIT_WORDS.contains(&cleaned) {
        return false;
    }

    RECOGNIZED_UNITS.contains(&cleaned) || (1..=4).contains(&cleaned.len())
}

/// Tokenize one ingredient line.
///
/// An empty line yields an empty-item placeholder rather than nothing; the
/// caller's non-blank-line discipline is what filters those out.
pub fn tokenize(line: &str) -> Ingredient {
    let text = strip_bullet_prefix(line);
    if text.is_empty() {
        return Ingredient::item_only("");
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();

    let (qty, mut idx) = take_quantity(&tokens);

    // No quantity: the whole line is the item.
    let qty = match qty {
        Some(q) => q,
        None => return Ingredient::item_only(text),
    };

    let mut unit = None;
    if let Some(&candidate) = tokens.get(idx) {
        if is_likely_unit(candidate) {
            unit = Some(candidate.strip_suffix('.').unwrap_or(candidate).to_string());
            idx += 1;
        }
    }

    // Skip the connective "of" between unit and item ("2 ribs of celery").
    if tokens
        .get(idx)
        .is_some_and(|t| t.eq_ignore_ascii_case("of"))
    {
        idx += 1;
    }

    Ingredient {
        item: tokens[idx..].join(" "),
        qty: Some(qty),
        unit,
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_quantity_and_unit() {
        let ing = tokenize("1 cup flour");
        assert_eq!(ing.qty, Some(1.0));
        assert_eq!(ing.unit.as_deref(), Some("cup"));
        assert_eq!(ing.item, "flour");
    }

    #[test]
    fn test_fraction() {
        let ing = tokenize("1/2 cup butter");
        assert_eq!(ing.qty, Some(0.5));
        assert_eq!(ing.unit.as_deref(), Some("cup"));
        assert_eq!(ing.item, "butter");
    }

    #[test]
    fn test_mixed_number() {
        let ing = tokenize("1 1/2 cups flour");
        assert_eq!(ing.qty, Some(1.5));
        assert_eq!(ing.unit.as_deref(), Some("cups"));
        assert_eq!(ing.item, "flour");
    }

    #[test]
    fn test_decimal() {
        let ing = tokenize("1.5 cups flour");
        assert_eq!(ing.qty, Some(1.5));
    }

    #[test]
    fn test_zero_denominator_is_not_a_fraction() {
        let ing = tokenize("1/0 cup flour");
        assert_eq!(ing.qty, None);
        assert_eq!(ing.item, "1/0 cup flour");
    }

    #[test]
    fn test_blacklisted_food_word_is_not_a_unit() {
        let ing = tokenize("2 eggs");
        assert_eq!(ing.qty, Some(2.0));
        assert_eq!(ing.unit, None);
        assert_eq!(ing.item, "eggs");

        let ing = tokenize("1 onion");
        assert_eq!(ing.unit, None);
        assert_eq!(ing.item, "onion");
    }

    #[test]
    fn test_recognized_long_spelling() {
        let ing = tokenize("1 tablespoon oil");
        assert_eq!(ing.unit.as_deref(), Some("tablespoon"));
        assert_eq!(ing.item, "oil");
    }

    #[test]
    fn test_trailing_period_stripped_from_unit() {
        let ing = tokenize("2 tbsp. sugar");
        assert_eq!(ing.unit.as_deref(), Some("tbsp"));
        assert_eq!(ing.item, "sugar");
    }

    #[test]
    fn test_of_connective_skipped() {
        let ing = tokenize("2 ribs of celery");
        assert_eq!(ing.qty, Some(2.0));
        assert_eq!(ing.unit.as_deref(), Some("ribs"));
        assert_eq!(ing.item, "celery");
    }

    #[test]
    fn test_bullet_stripped() {
        let ing = tokenize("- 1 tsp salt");
        assert_eq!(ing.qty, Some(1.0));
        assert_eq!(ing.unit.as_deref(), Some("tsp"));
        assert_eq!(ing.item, "salt");

        let ing = tokenize("* 2 cups broth");
        assert_eq!(ing.qty, Some(2.0));
    }

    #[test]
    fn test_item_only_fallback() {
        let ing = tokenize("salt to taste");
        assert_eq!(ing.qty, None);
        assert_eq!(ing.unit, None);
        assert_eq!(ing.item, "salt to taste");
    }

    #[test]
    fn test_quantity_and_unit_without_item() {
        let ing = tokenize("1 cup");
        assert_eq!(ing.qty, Some(1.0));
        assert_eq!(ing.unit.as_deref(), Some("cup"));
        assert_eq!(ing.item, "");
    }

    #[test]
    fn test_empty_line_yields_placeholder() {
        let ing = tokenize("");
        assert_eq!(ing.item, "");
        assert_eq!(ing.qty, None);
        assert_eq!(ing.unit, None);
    }

    #[test]
    fn test_descriptors_stay_in_item() {
        let ing = tokenize("1 cup butter, softened");
        assert_eq!(ing.item, "butter, softened");
    }

    #[test]
    fn test_hyphenated_item() {
        let ing = tokenize("1 cup all-purpose flour");
        assert_eq!(ing.unit.as_deref(), Some("cup"));
        assert_eq!(ing.item, "all-purpose flour");
    }
}
