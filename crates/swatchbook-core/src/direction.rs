//! Layout direction and the layout classes it selects.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Direction parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("Unrecognized direction: {0:?}")]
    Unrecognized(String),
}

/// Axis a swatch group is laid out along.
///
/// Encoded on the wire as a one-letter code: `"h"` or `"v"`. `null` reads
/// as vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

impl Direction {
    /// Decode a direction code.
    ///
    /// Only `"h"` selects [`Direction::Horizontal`]. Any other value falls
    /// back to [`Direction::Vertical`].
    pub fn from_code(code: &str) -> Self {
        if code == "h" {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// Decode an optional direction code; `None` is vertical.
    pub fn from_optional_code(code: Option<&str>) -> Self {
        code.map(Self::from_code).unwrap_or_default()
    }

    /// Decode a direction, rejecting anything that is not a known spelling.
    ///
    /// Accepts `h`, `v`, `horizontal` and `vertical`, ignoring ASCII case.
    pub fn parse_strict(value: &str) -> Result<Self, DirectionError> {
        match value.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Direction::Horizontal),
            "v" | "vertical" => Ok(Direction::Vertical),
            _ => Err(DirectionError::Unrecognized(value.to_string())),
        }
    }

    /// The one-letter code for this direction.
    pub const fn code(self) -> &'static str {
        match self {
            Direction::Horizontal => "h",
            Direction::Vertical => "v",
        }
    }

    /// Layout class used for a group running in this direction.
    pub const fn layout_class(self) -> LayoutClass {
        match self {
            Direction::Horizontal => LayoutClass::HGroup,
            Direction::Vertical => LayoutClass::VGroup,
        }
    }
}

impl From<Option<String>> for Direction {
    fn from(value: Option<String>) -> Self {
        Self::from_optional_code(value.as_deref())
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The two container classes a swatch group can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutClass {
    /// Swatches side by side in a row.
    HGroup,
    /// Swatches stacked in a column.
    VGroup,
}

impl LayoutClass {
    /// Class name, as the styling layer knows it.
    pub const fn name(self) -> &'static str {
        match self {
            LayoutClass::HGroup => "hgroup",
            LayoutClass::VGroup => "vgroup",
        }
    }

    /// Whether children are placed along the horizontal axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, LayoutClass::HGroup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_h_is_horizontal() {
        assert_eq!(Direction::from_code("h"), Direction::Horizontal);
        assert_eq!(Direction::from_code("v"), Direction::Vertical);
        assert_eq!(Direction::from_code(""), Direction::Vertical);
        assert_eq!(Direction::from_code("H"), Direction::Vertical);
        assert_eq!(Direction::from_code("horizontal"), Direction::Vertical);
        assert_eq!(Direction::from_code("diagonal"), Direction::Vertical);
    }

    #[test]
    fn test_missing_code_is_vertical() {
        assert_eq!(Direction::from_optional_code(None), Direction::Vertical);
        assert_eq!(Direction::from_optional_code(Some("h")), Direction::Horizontal);
        assert_eq!(Direction::default(), Direction::Vertical);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(Direction::parse_strict("h"), Ok(Direction::Horizontal));
        assert_eq!(Direction::parse_strict("Horizontal"), Ok(Direction::Horizontal));
        assert_eq!(Direction::parse_strict("V"), Ok(Direction::Vertical));
        assert_eq!(Direction::parse_strict("vertical"), Ok(Direction::Vertical));
        assert_eq!(
            Direction::parse_strict("x"),
            Err(DirectionError::Unrecognized("x".to_string()))
        );
    }

    #[test]
    fn test_layout_class_selection() {
        assert_eq!(Direction::Horizontal.layout_class(), LayoutClass::HGroup);
        assert_eq!(Direction::Vertical.layout_class(), LayoutClass::VGroup);
        assert_eq!(LayoutClass::HGroup.name(), "hgroup");
        assert_eq!(LayoutClass::VGroup.name(), "vgroup");
        assert!(LayoutClass::HGroup.is_horizontal());
        assert!(!LayoutClass::VGroup.is_horizontal());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Direction::Horizontal).unwrap(), "\"h\"");
        assert_eq!(serde_json::to_string(&Direction::Vertical).unwrap(), "\"v\"");

        let h: Direction = serde_json::from_str("\"h\"").unwrap();
        assert_eq!(h, Direction::Horizontal);
        let unknown: Direction = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(unknown, Direction::Vertical);
        let null: Direction = serde_json::from_str("null").unwrap();
        assert_eq!(null, Direction::Vertical);
    }
}
