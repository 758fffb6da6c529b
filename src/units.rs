//! Canonical unit set, alias resolution, and same-category conversion.
//!
//! The canonical set is closed: six volume units converted through
//! milliliters, four mass units converted through grams, and a single
//! `count` unit. Anything else passes through as-is and belongs to no
//! known category, so it never converts to anything but itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed normalized unit symbols the system reasons about internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalUnit {
    // volume
    Ml,
    L,
    Tsp,
    Tbsp,
    FlOz,
    Cup,
    // mass
    G,
    Kg,
    Oz,
    Lb,
    // count-like
    Count,
}

/// Physical category of a unit; cross-category conversion is impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Volume,
    Mass,
    Count,
    Unknown,
}

impl CanonicalUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalUnit::Ml => "ml",
            CanonicalUnit::L => "l",
            CanonicalUnit::Tsp => "tsp",
            CanonicalUnit::Tbsp => "tbsp",
            CanonicalUnit::FlOz => "fl-oz",
            CanonicalUnit::Cup => "cup",
            CanonicalUnit::G => "g",
            CanonicalUnit::Kg => "kg",
            CanonicalUnit::Oz => "oz",
            CanonicalUnit::Lb => "lb",
            CanonicalUnit::Count => "count",
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            CanonicalUnit::Ml
            | CanonicalUnit::L
            | CanonicalUnit::Tsp
            | CanonicalUnit::Tbsp
            | CanonicalUnit::FlOz
            | CanonicalUnit::Cup => UnitCategory::Volume,
            CanonicalUnit::G | CanonicalUnit::Kg | CanonicalUnit::Oz | CanonicalUnit::Lb => {
                UnitCategory::Mass
            }
            CanonicalUnit::Count => UnitCategory::Count,
        }
    }

    /// Milliliters per one of this unit, for volume units.
    fn ml_factor(&self) -> Option<f64> {
        match self {
            CanonicalUnit::Ml => Some(1.0),
            CanonicalUnit::L => Some(1000.0),
            CanonicalUnit::Tsp => Some(4.92892),
            CanonicalUnit::Tbsp => Some(14.7868),
            CanonicalUnit::FlOz => Some(29.5735),
            CanonicalUnit::Cup => Some(236.588),
            _ => None,
        }
    }

    /// Grams per one of this unit, for mass units.
    fn g_factor(&self) -> Option<f64> {
        match self {
            CanonicalUnit::G => Some(1.0),
            CanonicalUnit::Kg => Some(1000.0),
            CanonicalUnit::Oz => Some(28.3495),
            CanonicalUnit::Lb => Some(453.592),
            _ => None,
        }
    }
}

/// A unit after canonicalization: either one of the closed canonical set,
/// or an unrecognized spelling carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Canonical(CanonicalUnit),
    Other(String),
}

impl Unit {
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Canonical(c) => c.as_str(),
            Unit::Other(s) => s.as_str(),
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Canonical(c) => c.category(),
            Unit::Other(_) => UnitCategory::Unknown,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        canonicalize(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

/// Map a raw unit spelling to its canonical unit: lowercase, strip one
/// trailing period, look up the alias table. Unknown spellings pass through.
pub fn canonicalize(raw: &str) -> Unit {
    let key = raw.to_lowercase();
    let key = key.strip_suffix('.').unwrap_or(&key);

    let canonical = match key {
        // volume
        "tsp" | "teaspoon" | "teaspoons" => Some(CanonicalUnit::Tsp),
        "tbsp" | "tablespoon" | "tablespoons" | "tbl" => Some(CanonicalUnit::Tbsp),
        "cup" | "cups" => Some(CanonicalUnit::Cup),
        "fl-oz" | "floz" | "fl.oz" => Some(CanonicalUnit::FlOz),
        "ml" | "milliliter" | "milliliters" => Some(CanonicalUnit::Ml),
        "l" | "liter" | "liters" => Some(CanonicalUnit::L),
        // mass
        "g" | "gram" | "grams" => Some(CanonicalUnit::G),
        "kg" | "kilogram" | "kilograms" => Some(CanonicalUnit::Kg),
        "oz" | "ounce" | "ounces" => Some(CanonicalUnit::Oz),
        "lb" | "lbs" | "pound" | "pounds" => Some(CanonicalUnit::Lb),
        // count-like
        "clove" | "cloves" | "can" | "cans" | "package" | "packages" | "piece" | "pieces"
        | "rib" | "ribs" | "count" => Some(CanonicalUnit::Count),
        _ => None,
    };

    match canonical {
        Some(c) => Unit::Canonical(c),
        None => Unit::Other(key.to_string()),
    }
}

/// Convert a quantity between two units of the same physical category.
///
/// Returns `None` when the units are cross-category or either is unknown;
/// the caller decides the fallback. `from == to` is always an identity,
/// including for unknown units.
pub fn convert(qty: f64, from: &Unit, to: &Unit) -> Option<f64> {
    if from == to {
        return Some(qty);
    }

    let (from, to) = match (from, to) {
        (Unit::Canonical(f), Unit::Canonical(t)) => (f, t),
        _ => return None,
    };

    if let (Some(f), Some(t)) = (from.ml_factor(), to.ml_factor()) {
        return Some(qty * f / t);
    }

    if let (Some(f), Some(t)) = (from.g_factor(), to.g_factor()) {
        return Some(qty * f / t);
    }

    None
}
