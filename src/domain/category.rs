//! Categories a place idea can be filed under

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of stop a place idea is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Sightseeing,
    Food,
    /// Rest and relaxation
    #[serde(rename = "r&r")]
    RestAndRelax,
    Shopping,
    Exploration,
}

impl Category {
    /// All categories in the order they are offered
    pub const ALL: [Category; 5] = [
        Category::Sightseeing,
        Category::Food,
        Category::RestAndRelax,
        Category::Shopping,
        Category::Exploration,
    ];

    /// Short name without icon
    pub fn name(&self) -> &'static str {
        match self {
            Category::Sightseeing => "Sightseeing",
            Category::Food => "Food",
            Category::RestAndRelax => "R&R",
            Category::Shopping => "Shopping",
            Category::Exploration => "Exploration",
        }
    }

    /// Label shown to the user and written to exports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sightseeing => "📸 Sightseeing",
            Category::Food => "🍜 Food",
            Category::RestAndRelax => "☕ R&R",
            Category::Shopping => "🛍️ Shopping",
            Category::Exploration => "🚶 Exploration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(category) = Category::ALL
            .iter()
            .find(|c| trimmed == c.label() || trimmed.eq_ignore_ascii_case(c.name()))
        {
            return Ok(*category);
        }

        match trimmed.to_lowercase().as_str() {
            "rr" | "rest" => Ok(Category::RestAndRelax),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: sightseeing, food, r&r, shopping, exploration",
                s
            )),
        }
    }
}
