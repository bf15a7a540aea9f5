//! Terminal output styling.
//!
//! Thin wrappers over `console` styles. Color is disabled automatically when
//! stdout is not a terminal, and by `--no-color` via the `NO_COLOR`
//! convention.

use console::Style;

/// Styles used across command output.
pub struct Theme {
    /// Tool names and other identifiers.
    pub highlight: Style,

    /// Secondary detail (installed versions, annotations).
    pub dim: Style,

    /// Something is newer than what is installed.
    pub outdated: Style,

    /// Already at the latest version.
    pub current: Style,

    /// Problems worth the user's attention.
    pub error: Style,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            highlight: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            outdated: Style::new().yellow(),
            current: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_styles_apply_to_text() {
        let theme = Theme::new();
        // Styling must at least round-trip the text itself.
        assert!(theme.highlight.apply_to("node").to_string().contains("node"));
        assert!(theme.error.apply_to("boom").to_string().contains("boom"));
    }
}
