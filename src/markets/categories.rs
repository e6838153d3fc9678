use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Fixed topical grouping used to filter markets.
///
/// The set is closed: selection state elsewhere is `Option<Category>` and
/// every variant has its own question pool in the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Crypto,
    Politics,
    Sports,
    Business,
    PopCulture,
    Science,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Crypto,
        Category::Politics,
        Category::Sports,
        Category::Business,
        Category::PopCulture,
        Category::Science,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Crypto => "Crypto",
            Category::Politics => "Politics",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::PopCulture => "Pop Culture",
            Category::Science => "Science",
        }
    }

    /// Decorative tile accent. Has no bearing on any logic.
    pub fn accent(&self) -> Color {
        match self {
            Category::Crypto => Color::LightYellow,
            Category::Politics => Color::LightBlue,
            Category::Sports => Color::LightGreen,
            Category::Business => Color::Yellow,
            Category::PopCulture => Color::LightMagenta,
            Category::Science => Color::Magenta,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_variant_once() {
        let mut titles: Vec<_> = Category::ALL.iter().map(|c| c.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn display_matches_title() {
        assert_eq!(Category::PopCulture.to_string(), "Pop Culture");
    }
}
