//! Converts each section's raw lines into typed recipe fields.
//!
//! Field parsers never fail: the worst case is an empty or absent value.
//! Completeness checks belong to the validator.

use crate::model::Ingredient;
use crate::parser::ingredient;

fn non_blank_lines(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}

/// First non-blank trimmed line; empty string if none.
pub fn parse_title(lines: &[String]) -> String {
    non_blank_lines(lines)
        .first()
        .map(|l| l.to_string())
        .unwrap_or_default()
}

/// First contiguous digit run of the first non-blank line; absent when no
/// digit run exists (or the run overflows a u32).
pub fn parse_servings(lines: &[String]) -> Option<u32> {
    let first = *non_blank_lines(lines).first()?;
    let start = first.find(|c: char| c.is_ascii_digit())?;
    let digits: String = first[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// First non-blank line split on commas, trimmed and lowercased, empty
/// segments dropped.
pub fn parse_tags(lines: &[String]) -> Vec<String> {
    match non_blank_lines(lines).first() {
        Some(first) => first
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Every non-blank line through the tokenizer, in order. Lines that
/// tokenize to nothing (no item, no quantity) are dropped.
pub fn parse_ingredients(lines: &[String]) -> Vec<Ingredient> {
    non_blank_lines(lines)
        .into_iter()
        .map(ingredient::tokenize)
        .filter(|ing| !ing.item.is_empty() || ing.qty.is_some())
        .collect()
}

/// Strip a leading "<digits>. " or "<digits>) " step number, if present.
fn strip_step_number(line: &str) -> &str {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return line;
    }
    let rest = &line[digits_end..];
    if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        if after.starts_with(char::is_whitespace) {
            return after.trim_start();
        }
    }
    line
}

/// Every non-blank line with its step-number prefix stripped, in order.
pub fn parse_instructions(lines: &[String]) -> Vec<String> {
    non_blank_lines(lines)
        .into_iter()
        .map(|l| strip_step_number(l).to_string())
        .collect()
}
