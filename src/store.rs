//! Recipe persistence behind a small save/load interface.
//!
//! The parsing/aggregation core never touches storage; callers inject a
//! [`RecipeStore`] where they need one. The bundled implementation keeps a
//! single pretty-printed JSON file.

use chrono::Utc;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GroceryError;
use crate::model::Recipe;

pub trait RecipeStore {
    /// Insert or replace a recipe. Stamps `created_at` on first save and
    /// `updated_at` on every save; returns the stored value.
    fn save(&mut self, recipe: Recipe) -> Result<Recipe, GroceryError>;
    fn get(&self, id: &str) -> Result<Option<Recipe>, GroceryError>;
    /// All recipes, ordered by id.
    fn list(&self) -> Result<Vec<Recipe>, GroceryError>;
    /// Remove a recipe; returns whether it existed.
    fn delete(&mut self, id: &str) -> Result<bool, GroceryError>;
    fn clear(&mut self) -> Result<(), GroceryError>;
}

/// Derive a stable recipe id from its title: lowercased, runs of
/// non-alphanumerics collapsed to single hyphens, trimmed of hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// File-backed store: one `recipes.json` map of id → recipe under the given
/// directory, read in full on every call and rewritten on every mutation.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, GroceryError> {
        fs::create_dir_all(dir)?;
        Ok(JsonFileStore {
            path: dir.join("recipes.json"),
        })
    }

    fn read_all(&self) -> Result<BTreeMap<String, Recipe>, GroceryError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, recipes: &BTreeMap<String, Recipe>) -> Result<(), GroceryError> {
        let contents = serde_json::to_string_pretty(recipes)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl RecipeStore for JsonFileStore {
    fn save(&mut self, mut recipe: Recipe) -> Result<Recipe, GroceryError> {
        let mut recipes = self.read_all()?;
        let now = Utc::now();
        recipe.created_at = recipes
            .get(&recipe.id)
            .and_then(|existing| existing.created_at)
            .or(Some(now));
        recipe.updated_at = Some(now);

        debug!("saving recipe '{}' to {}", recipe.id, self.path.display());
        recipes.insert(recipe.id.clone(), recipe.clone());
        self.write_all(&recipes)?;
        Ok(recipe)
    }

    fn get(&self, id: &str) -> Result<Option<Recipe>, GroceryError> {
        Ok(self.read_all()?.remove(id))
    }

    fn list(&self) -> Result<Vec<Recipe>, GroceryError> {
        Ok(self.read_all()?.into_values().collect())
    }

    fn delete(&mut self, id: &str) -> Result<bool, GroceryError> {
        let mut recipes = self.read_all()?;
        let existed = recipes.remove(id).is_some();
        if existed {
            self.write_all(&recipes)?;
        }
        Ok(existed)
    }

    fn clear(&mut self) -> Result<(), GroceryError> {
        self.write_all(&BTreeMap::new())
    }
}
