//! Opaque color values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color value as supplied by the caller (e.g. `"#6366f1"`).
///
/// The value is carried through untouched. Nothing in this crate parses or
/// validates it; interpretation is left to whatever draws the swatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a raw color string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the color and return the raw string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a color list from string literals.
pub fn colors<I, S>(values: I) -> Vec<Color>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Color::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_not_interpreted() {
        let color = Color::new("not a color at all");
        assert_eq!(color.as_str(), "not a color at all");
        assert_eq!(color.to_string(), "not a color at all");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let color = Color::from("#FF0000");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#FF0000\"");

        let parsed: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, Color::from("#00ff00"));
    }

    #[test]
    fn test_colors_helper_keeps_order() {
        let list = colors(["#FFF", "#000", "#FFF"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].as_str(), "#FFF");
        assert_eq!(list[1].as_str(), "#000");
        assert_eq!(list[2].as_str(), "#FFF");
    }
}
