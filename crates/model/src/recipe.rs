use serde::{Deserialize, Deserializer, Serialize};

/// One ingredient line of a recipe. Only `ingredient` participates in
/// filtering; `quantity` and `unit` are presentation data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A recipe record as loaded from the data file. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub description: String,
    pub appliance: String,
    #[serde(default)]
    pub ustensils: Vec<String>,
}

impl Recipe {
    /// A recipe is usable by the engine when it has a name, at least one
    /// ingredient, and an appliance. Anything else is skipped at load.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.ingredients.is_empty()
            && !self.appliance.trim().is_empty()
    }
}

/// The source data mixes numeric quantities with quantities written as
/// strings ("1/2", "2"). Parse what we can, drop the rest; the field is
/// display-only either way.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}
