mod error;
mod loader;
mod recipe;

pub use error::{ModelError, Result};
pub use loader::{load_recipes, load_recipes_from_path};
pub use recipe::{Ingredient, Recipe};
