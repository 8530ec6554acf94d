//! egui widgets for Swatchbook.
//!
//! - **Colors**: CSS color parsing, the [`ColorSwatch`] widget, palette lookup
//! - **Group**: [`ColorSwatchGroup`], a row or column of swatches
//! - **Styles**: the `hgroup` / `vgroup` container layouts

pub mod colors;
pub mod group;
pub mod styles;

pub use colors::{
    parse_css_color, ColorParseError, ColorSwatch, ColorSwatchResponse, ColorSwatchStyle,
    PaletteLookup, SwatchAction,
};
pub use group::{ColorSwatchGroup, SwatchGroupResponse};
pub use styles::{container, item_spacing};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small swatch size
    pub const SMALL: f32 = 20.0;
    /// Large swatch size
    pub const LARGE: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Size of the copy / add-to-palette badges
    pub const BADGE: f32 = 7.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Hover outline (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Fill used when a color value cannot be parsed
    pub const UNPARSEABLE: Color32 = Color32::from_rgb(128, 128, 128);
    /// Badge color on light swatches
    pub const BADGE_DARK: Color32 = Color32::from_gray(30);
    /// Badge color on dark swatches
    pub const BADGE_LIGHT: Color32 = Color32::from_gray(245);
}
