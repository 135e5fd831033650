use serde::{Deserialize, Serialize};

/// The three filter categories a tag can belong to. A closed enum so every
/// dispatch over categories is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    Ingredient,
    Ustensil,
    Appliance,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Ingredient,
        FilterCategory::Ustensil,
        FilterCategory::Appliance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Ingredient => "ingredient",
            FilterCategory::Ustensil => "ustensil",
            FilterCategory::Appliance => "appliance",
        }
    }
}

impl std::fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
