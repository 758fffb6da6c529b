//! Structural validation of parsed recipes.
//!
//! An explicit set of field-level checks producing an itemized issue list.
//! Validation is total (collects every issue instead of stopping at the
//! first) and pure.

use serde::Serialize;
use std::fmt;

use crate::model::ParsedRecipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One structural problem, located by a dotted/bracketed path such as
/// `ingredients[2].qty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub issues: Vec<ValidationIssue>,
}

fn issue(issues: &mut Vec<ValidationIssue>, path: impl Into<String>, message: impl Into<String>) {
    issues.push(ValidationIssue {
        path: path.into(),
        message: message.into(),
        severity: Severity::Error,
    });
}

/// Check a parsed recipe against the schema rules.
///
/// Rules: title required non-empty; servings, if present, positive; each
/// ingredient item required non-empty, its quantity (if present) a positive
/// finite number, unit and note (if present) non-empty after trimming; tags
/// and instructions may be empty lists but individual entries must be
/// non-empty.
pub fn validate(recipe: &ParsedRecipe) -> ValidationReport {
    let mut issues = Vec::new();

    if recipe.title.trim().is_empty() {
        issue(&mut issues, "title", "title is required");
    }

    if let Some(servings) = recipe.servings {
        if servings == 0 {
            issue(&mut issues, "servings", "servings must be a positive integer");
        }
    }

    for (i, tag) in recipe.tags.iter().enumerate() {
        if tag.trim().is_empty() {
            issue(&mut issues, format!("tags[{i}]"), "tag must not be empty");
        }
    }

    for (i, ing) in recipe.ingredients.iter().enumerate() {
        if ing.item.trim().is_empty() {
            issue(
                &mut issues,
                format!("ingredients[{i}].item"),
                "ingredient item is required",
            );
        }
        if let Some(qty) = ing.qty {
            if !(qty.is_finite() && qty > 0.0) {
                issue(
                    &mut issues,
                    format!("ingredients[{i}].qty"),
                    "quantity must be a positive number",
                );
            }
        }
        if let Some(unit) = &ing.unit {
            if unit.trim().is_empty() {
                issue(
                    &mut issues,
                    format!("ingredients[{i}].unit"),
                    "unit must not be empty",
                );
            }
        }
        if let Some(note) = &ing.note {
            if note.trim().is_empty() {
                issue(
                    &mut issues,
                    format!("ingredients[{i}].note"),
                    "note must not be empty",
                );
            }
        }
    }

    for (i, step) in recipe.instructions.iter().enumerate() {
        if step.trim().is_empty() {
            issue(
                &mut issues,
                format!("instructions[{i}]"),
                "instruction must not be empty",
            );
        }
    }

    ValidationReport {
        ok: issues.is_empty(),
        issues,
    }
}
