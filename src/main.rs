use log::error;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use grocery_buddy::config::load_packs_config;
use grocery_buddy::format::format_grocery_list;
use grocery_buddy::store::{slugify, JsonFileStore, RecipeStore};
use grocery_buddy::{build_grocery_list, parse_recipe, validate, GroceryError, Recipe};

const USAGE: &str = "\
Usage: grocery-buddy <command> [args]

Commands:
  add <file>            Parse and store a recipe text file
  list                  List stored recipes
  show <id>             Print a stored recipe's source text
  remove <id>           Delete a stored recipe
  shop <id[=mult]>...   Build a grocery list from the given recipes,
                        each optionally scaled (e.g. soup=2 cookies=0.5)

Options:
  --json                With shop: print the grouped list as JSON

The store directory is taken from GROCERY_HOME (default .grocery-buddy);
pack-rounding rules load from packs.toml / GROCERY__ env vars.";

fn store_dir() -> PathBuf {
    env::var("GROCERY_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".grocery-buddy"))
}

fn cmd_add(store: &mut JsonFileStore, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let parsed = parse_recipe(&text);

    let report = validate(&parsed);
    if !report.ok {
        eprintln!("Recipe has problems:");
        for issue in &report.issues {
            eprintln!("  {issue}");
        }
        return Err("recipe failed validation".into());
    }

    let id = slugify(&parsed.title);
    let saved = store.save(Recipe::new(id, parsed, Some(text)))?;
    println!("Saved '{}' as {}", saved.parsed.title, saved.id);
    Ok(())
}

fn cmd_list(store: &JsonFileStore) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = store.list()?;
    if recipes.is_empty() {
        println!("No recipes stored.");
        return Ok(());
    }
    for recipe in recipes {
        let servings = recipe
            .parsed
            .servings
            .map(|s| format!(", serves {s}"))
            .unwrap_or_default();
        println!(
            "{}  {} ({} ingredients{})",
            recipe.id,
            recipe.parsed.title,
            recipe.parsed.ingredients.len(),
            servings
        );
    }
    Ok(())
}

fn cmd_show(store: &JsonFileStore, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = store
        .get(id)?
        .ok_or_else(|| GroceryError::NotFound(id.to_string()))?;
    match recipe.source_text {
        Some(text) => println!("{text}"),
        None => println!("{}", serde_json::to_string_pretty(&recipe)?),
    }
    Ok(())
}

fn cmd_remove(store: &mut JsonFileStore, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if store.delete(id)? {
        println!("Removed {id}");
        Ok(())
    } else {
        Err(Box::new(GroceryError::NotFound(id.to_string())))
    }
}

/// Parse "soup=2" into ("soup", 2.0); a bare id scales by 1.
fn parse_selection(arg: &str) -> Result<(String, f64), Box<dyn std::error::Error>> {
    match arg.split_once('=') {
        Some((id, mult)) => {
            let mult: f64 = mult
                .parse()
                .map_err(|_| format!("invalid multiplier in '{arg}'"))?;
            if !(mult.is_finite() && mult > 0.0) {
                return Err(format!("multiplier must be positive in '{arg}'").into());
            }
            Ok((id.to_string(), mult))
        }
        None => Ok((arg.to_string(), 1.0)),
    }
}

fn cmd_shop(
    store: &JsonFileStore,
    selections: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut recipes = Vec::new();
    let mut multipliers = HashMap::new();

    for arg in selections {
        let (id, mult) = parse_selection(arg)?;
        let recipe = store
            .get(&id)?
            .ok_or_else(|| GroceryError::NotFound(id.clone()))?;
        multipliers.insert(id, mult);
        recipes.push(recipe);
    }

    let packs = load_packs_config()?;
    let groups = build_grocery_list(&recipes, &multipliers, &packs);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        print!("{}", format_grocery_list(&groups));
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let command = args.first().map(String::as_str).unwrap_or("");

    let mut store = JsonFileStore::open(&store_dir())?;

    match (command, args.get(1)) {
        ("add", Some(path)) => cmd_add(&mut store, path),
        ("list", _) => cmd_list(&store),
        ("show", Some(id)) => cmd_show(&store, id),
        ("remove", Some(id)) => cmd_remove(&mut store, id),
        ("shop", Some(_)) => cmd_shop(&store, &args[1..], json),
        _ => {
            eprintln!("{USAGE}");
            Err("missing or unknown command".into())
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
