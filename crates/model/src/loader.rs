use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::recipe::Recipe;

/// Parse a JSON array of recipes. Malformed records (missing name,
/// ingredients, or appliance) are dropped with a warning rather than
/// failing the whole load; the engine never sees them.
pub fn load_recipes<R: Read>(reader: R) -> Result<Vec<Recipe>> {
    let all: Vec<Recipe> = serde_json::from_reader(reader)?;
    let total = all.len();

    let recipes: Vec<Recipe> = all
        .into_iter()
        .filter(|recipe| {
            if recipe.is_well_formed() {
                true
            } else {
                warn!(
                    "skipping malformed recipe id={} ({:?}): missing name, ingredients, or appliance",
                    recipe.id, recipe.name
                );
                false
            }
        })
        .collect();

    if recipes.len() < total {
        warn!("loaded {} of {} recipes", recipes.len(), total);
    }

    Ok(recipes)
}

pub fn load_recipes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let file = File::open(path)?;
    load_recipes(BufReader::new(file))
}
