use ratatui::style::Color;
use std::collections::BTreeMap;

/// Used for categories that have no configured color, in order of appearance.
const FALLBACK: [Color; 8] = [
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightBlue,
    Color::LightRed,
    Color::Cyan,
    Color::Magenta,
];

pub const INCOME: Color = Color::Green;
pub const EXPENSE: Color = Color::LightRed;
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    categories: BTreeMap<String, Color>,
}

impl Theme {
    /// Parse the `[colors]` config table. Unparseable names are skipped.
    pub fn from_config(colors: &BTreeMap<String, String>) -> Self {
        let mut categories = BTreeMap::new();
        for (category, name) in colors {
            match name.parse::<Color>() {
                Ok(color) => {
                    categories.insert(category.clone(), color);
                }
                Err(_) => tracing::warn!(%category, color = %name, "ignoring unknown color"),
            }
        }
        Self { categories }
    }

    /// Configured color for `category`, else a palette entry picked by `index`.
    pub fn category(&self, category: &str, index: usize) -> Color {
        self.categories
            .get(category)
            .copied()
            .unwrap_or(FALLBACK[index % FALLBACK.len()])
    }
}
