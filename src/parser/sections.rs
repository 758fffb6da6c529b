//! Splits raw recipe text into the five named sections.
//!
//! Lenient by design: garbage before the first header is silently dropped,
//! and unknown headers are never recognized, so their lines become ordinary
//! content of whatever section is current.

use std::collections::HashMap;

/// The five fixed section names of the recipe text template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Title,
    Servings,
    Tags,
    Ingredients,
    Instructions,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Title => "Title",
            SectionName::Servings => "Servings",
            SectionName::Tags => "Tags",
            SectionName::Ingredients => "Ingredients",
            SectionName::Instructions => "Instructions",
        }
    }

    const ALL: [SectionName; 5] = [
        SectionName::Title,
        SectionName::Servings,
        SectionName::Tags,
        SectionName::Ingredients,
        SectionName::Instructions,
    ];

    /// Match a case-insensitive header token ("title", "INGREDIENTS", ...).
    fn from_token(token: &str) -> Option<SectionName> {
        SectionName::ALL
            .iter()
            .copied()
            .find(|name| token.eq_ignore_ascii_case(name.as_str()))
    }
}

/// Section name → ordered raw content lines. An absent key means the section
/// was not present in the text.
pub type SectionMap = HashMap<SectionName, Vec<String>>;

fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// If the trimmed line is a section header, return its name and any inline
/// content after the colon (e.g. both "Title:" and "Title: My Recipe").
fn parse_header(line: &str) -> Option<(SectionName, &str)> {
    let trimmed = line.trim();
    let (token, rest) = trimmed.split_once(':')?;
    let name = SectionName::from_token(token.trim())?;
    Some((name, rest.trim()))
}

/// Scan lines in order, opening a section on each header line and appending
/// every other line (right-trimmed) to the current section. Lines before the
/// first header are discarded.
pub fn split_into_sections(input: &str) -> SectionMap {
    let text = normalize_line_endings(input);

    let mut sections: SectionMap = HashMap::new();
    let mut current: Option<SectionName> = None;

    for raw_line in text.split('\n') {
        let line = raw_line.trim_end();

        if let Some((name, inline)) = parse_header(line) {
            current = Some(name);
            let entry = sections.entry(name).or_default();
            if !inline.is_empty() {
                entry.push(inline.to_string());
            }
            continue;
        }

        if let Some(name) = current {
            sections.entry(name).or_default().push(line.to_string());
        }
    }

    sections
}
