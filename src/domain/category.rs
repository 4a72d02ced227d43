use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises expenses for the proportion report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Necessary,
    Leisure,
    Unexpected,
    Food,
    Transport,
    Education,
    Housing,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Necessary,
        Category::Leisure,
        Category::Unexpected,
        Category::Food,
        Category::Transport,
        Category::Education,
        Category::Housing,
        Category::Health,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Necessary => "Necessary",
            Category::Leisure => "Leisure",
            Category::Unexpected => "Unexpected",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Education => "Education",
            Category::Housing => "Housing",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
