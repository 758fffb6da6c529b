//! Plain-text rendering of the grouped grocery list.

use crate::model::GroceryGroup;

/// Render groups as a category header, a dash underline, and one
/// `- <qty> [unit] <name>` line per item. Quantities print with two
/// decimals. Ends with a single trailing newline.
pub fn format_grocery_list(groups: &[GroceryGroup]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for group in groups {
        let header = group.category.as_str();
        lines.push(header.to_string());
        lines.push("-".repeat(header.len()));
        for item in &group.items {
            let unit = item
                .unit
                .as_ref()
                .map(|u| format!(" {u}"))
                .unwrap_or_default();
            lines.push(format!("- {:.2}{} {}", item.qty, unit, item.name));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}
