//! Color parsing and the color swatch widget.

use egui::{
    vec2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};
use std::collections::HashSet;
use swatchbook_core::{Color, SwatchGroupConfig, SwatchNode};
use thiserror::Error;

use crate::{sizing, theme};

/// Color parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("Expected 3, 6 or 8 hex digits: {0:?}")]
    InvalidLength(String),
    #[error("Invalid hex digit in {0:?}")]
    InvalidHex(String),
}

/// Parse a CSS hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`) to Color32.
pub fn parse_css_color(color: &str) -> Result<Color32, ColorParseError> {
    let hex = color
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(color.to_string()))?;

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(color.to_string()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHex(color.to_string()))
    };

    match hex.len() {
        3 => {
            // #rgb expands each digit: f -> ff
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok(Color32::from_rgb(r, g, b))
        }
        6 => Ok(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Ok(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => Err(ColorParseError::InvalidLength(color.to_string())),
    }
}

/// Read access to a palette, enough for a swatch to tell whether its color
/// is already saved.
pub trait PaletteLookup {
    fn contains_color(&self, color: &Color) -> bool;
}

impl PaletteLookup for [Color] {
    fn contains_color(&self, color: &Color) -> bool {
        self.contains(color)
    }
}

impl PaletteLookup for Vec<Color> {
    fn contains_color(&self, color: &Color) -> bool {
        self.as_slice().contains_color(color)
    }
}

impl PaletteLookup for HashSet<Color> {
    fn contains_color(&self, color: &Color) -> bool {
        self.contains(color)
    }
}

/// Style for color swatches.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
    /// Whether to show as circle (true) or rounded rect (false)
    pub circular: bool,
}

impl Default for ColorSwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SMALL, sizing::SMALL),
            circular: false,
        }
    }
}

impl ColorSwatchStyle {
    /// Small rounded swatch (default)
    pub fn small() -> Self {
        Self::default()
    }

    /// Large rounded swatch
    pub fn large() -> Self {
        Self {
            size: vec2(sizing::LARGE, sizing::LARGE),
            circular: false,
        }
    }

    /// Size and shape from a group config.
    pub fn from_config(config: &SwatchGroupConfig) -> Self {
        Self {
            size: vec2(config.swatch_size, config.swatch_size),
            circular: config.circular,
        }
    }
}

/// Something a swatch did this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwatchAction {
    /// The color was copied to the clipboard
    Copied(Color),
    /// The add-to-palette callback was invoked with the color
    AddedToPalette(Color),
}

impl SwatchAction {
    pub fn color(&self) -> &Color {
        match self {
            SwatchAction::Copied(color) | SwatchAction::AddedToPalette(color) => color,
        }
    }
}

/// Result of showing a [`ColorSwatch`].
pub struct ColorSwatchResponse {
    /// The underlying egui Response
    pub response: Response,
    /// What the swatch did, if anything
    pub action: Option<SwatchAction>,
}

/// A single color swatch.
///
/// Primary click copies the color value when copying is enabled. Secondary
/// click hands the color to the add-to-palette callback, unless the palette
/// already holds it.
pub struct ColorSwatch<'a, F: ?Sized = dyn Fn(&Color), P: ?Sized = dyn PaletteLookup> {
    color: &'a Color,
    copy: bool,
    add_to_palette: Option<&'a F>,
    palette: Option<&'a P>,
    style: ColorSwatchStyle,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new swatch with copying off, no callback and no palette.
    pub fn new(color: &'a Color) -> Self {
        Self {
            color,
            copy: false,
            add_to_palette: None,
            palette: None,
            style: ColorSwatchStyle::default(),
        }
    }
}

impl<'a, F: ?Sized, P: ?Sized> ColorSwatch<'a, F, P> {
    /// Create a swatch from a group node, taking all four of its inputs.
    pub fn from_node(node: &SwatchNode<'a, F, P>) -> Self {
        Self {
            color: node.color,
            copy: node.copy,
            add_to_palette: node.add_to_palette,
            palette: node.palette,
            style: ColorSwatchStyle::default(),
        }
    }

    /// Enable or disable copy-on-click.
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Set the add-to-palette callback.
    pub fn add_to_palette<G: ?Sized>(self, callback: Option<&'a G>) -> ColorSwatch<'a, G, P> {
        ColorSwatch {
            color: self.color,
            copy: self.copy,
            add_to_palette: callback,
            palette: self.palette,
            style: self.style,
        }
    }

    /// Set the palette consulted for the "already saved" mark.
    pub fn palette<Q: ?Sized>(self, palette: Option<&'a Q>) -> ColorSwatch<'a, F, Q> {
        ColorSwatch {
            color: self.color,
            copy: self.copy,
            add_to_palette: self.add_to_palette,
            palette,
            style: self.style,
        }
    }

    /// Set the style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }
}

impl<'a, F, P> ColorSwatch<'a, F, P>
where
    F: Fn(&Color) + ?Sized,
    P: PaletteLookup + ?Sized,
{
    /// Show the swatch.
    pub fn show(self, ui: &mut Ui) -> ColorSwatchResponse {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        let fill = match parse_css_color(self.color.as_str()) {
            Ok(fill) => fill,
            Err(e) => {
                let warned_id = response.id.with("parse_warned");
                if !ui.data(|d| d.get_temp::<bool>(warned_id).unwrap_or(false)) {
                    log::warn!("Drawing swatch in gray: {}", e);
                    ui.data_mut(|d| d.insert_temp(warned_id, true));
                }
                theme::UNPARSEABLE
            }
        };

        let in_palette = self
            .palette
            .is_some_and(|palette| palette.contains_color(self.color));

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, fill, response.hovered(), in_palette);
        }

        let mut action = None;

        if self.copy && response.clicked() {
            ui.ctx().copy_text(self.color.to_string());
            log::debug!("Copied {} to clipboard", self.color);
            action = Some(SwatchAction::Copied(self.color.clone()));
        }

        if response.secondary_clicked() && !in_palette {
            if let Some(add) = self.add_to_palette {
                add(self.color);
                log::debug!("Added {} to palette", self.color);
                action = Some(SwatchAction::AddedToPalette(self.color.clone()));
            }
        }

        let tooltip = if self.copy {
            format!("{} (click to copy)", self.color)
        } else {
            self.color.to_string()
        };
        let cursor = if self.copy || self.add_to_palette.is_some() {
            CursorIcon::PointingHand
        } else {
            CursorIcon::Default
        };
        let response = response.on_hover_text(tooltip).on_hover_cursor(cursor);

        ColorSwatchResponse { response, action }
    }

    fn paint(&self, ui: &Ui, rect: Rect, fill: Color32, hovered: bool, in_palette: bool) {
        let painter = ui.painter();
        let outline = if hovered && (self.copy || self.add_to_palette.is_some()) {
            Stroke::new(2.0, theme::ACCENT)
        } else {
            Stroke::new(1.0, theme::BORDER)
        };

        if self.style.circular {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, outline);
        } else {
            let corner = CornerRadius::same(sizing::CORNER_RADIUS);
            painter.rect_filled(rect, corner, fill);
            painter.rect_stroke(rect, corner, outline, StrokeKind::Inside);
        }

        let badge_color = if is_light(fill) {
            theme::BADGE_DARK
        } else {
            theme::BADGE_LIGHT
        };
        let badge = Rect::from_min_size(
            Pos2::new(rect.right() - sizing::BADGE - 2.0, rect.top() + 2.0),
            vec2(sizing::BADGE, sizing::BADGE),
        );
        let stroke = Stroke::new(1.5, badge_color);

        match badge_for(in_palette, self.add_to_palette.is_some()) {
            Some(Badge::Saved) => {
                painter.line_segment(
                    [
                        Pos2::new(badge.left(), badge.center().y),
                        Pos2::new(badge.center().x - 1.0, badge.bottom()),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        Pos2::new(badge.center().x - 1.0, badge.bottom()),
                        Pos2::new(badge.right(), badge.top()),
                    ],
                    stroke,
                );
            }
            Some(Badge::Add) => {
                painter.line_segment(
                    [
                        Pos2::new(badge.left(), badge.center().y),
                        Pos2::new(badge.right(), badge.center().y),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        Pos2::new(badge.center().x, badge.top()),
                        Pos2::new(badge.center().x, badge.bottom()),
                    ],
                    stroke,
                );
            }
            None => {}
        }
    }
}

/// Corner mark on a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Badge {
    /// Check mark: the color is already in the palette
    Saved,
    /// Plus: secondary click adds the color to the palette
    Add,
}

fn badge_for(in_palette: bool, can_add: bool) -> Option<Badge> {
    if in_palette {
        Some(Badge::Saved)
    } else if can_add {
        Some(Badge::Add)
    } else {
        None
    }
}

/// Whether dark marks read better than light ones on `color`.
fn is_light(color: Color32) -> bool {
    let luma = 0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32;
    color.a() < 128 || luma > 150.0
}
