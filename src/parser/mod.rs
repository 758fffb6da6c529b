//! Recipe text parsing: sectionizer, field parsers, and the ingredient
//! tokenizer, assembled by [`parse`].

pub mod fields;
pub mod ingredient;
pub mod sections;

use log::debug;

use crate::model::ParsedRecipe;
use crate::parser::sections::SectionName;

/// Parse recipe text into a [`ParsedRecipe`].
///
/// Never fails: missing or malformed sections degrade to empty or absent
/// fields. Run the result through [`crate::validate::validate`] to find out
/// whether it is complete enough to keep.
pub fn parse(text: &str) -> ParsedRecipe {
    let sections = sections::split_into_sections(text);

    let section = |name: SectionName| sections.get(&name).map(Vec::as_slice).unwrap_or(&[]);

    let recipe = ParsedRecipe {
        title: fields::parse_title(section(SectionName::Title)),
        servings: fields::parse_servings(section(SectionName::Servings)),
        tags: fields::parse_tags(section(SectionName::Tags)),
        ingredients: fields::parse_ingredients(section(SectionName::Ingredients)),
        instructions: fields::parse_instructions(section(SectionName::Instructions)),
    };

    debug!(
        "parsed recipe '{}': {} ingredients, {} instructions",
        recipe.title,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );

    recipe
}
