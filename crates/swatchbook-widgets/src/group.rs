//! A row or column of color swatches.

use egui::{Rect, Response, Ui};
use swatchbook_core::config::DEFAULT_SPACING;
use swatchbook_core::{Color, LayoutClass, SwatchGroup, SwatchGroupConfig, SwatchKey};

use crate::colors::{ColorSwatch, ColorSwatchStyle, PaletteLookup, SwatchAction};
use crate::styles;

/// Result of showing a [`ColorSwatchGroup`].
pub struct SwatchGroupResponse {
    /// Response covering the whole container
    pub response: Response,
    /// Container class the group was drawn with
    pub class: LayoutClass,
    /// Swatch keys and rects, in input order
    pub swatches: Vec<(SwatchKey, Rect)>,
    /// Actions taken by any swatch this frame
    pub actions: Vec<SwatchAction>,
}

/// egui front-end for a [`SwatchGroup`].
///
/// Each swatch is drawn under an id derived from its key, so per-swatch
/// state survives re-renders as long as positions do not change.
pub struct ColorSwatchGroup<'a, F: ?Sized = dyn Fn(&Color), P: ?Sized = [Color]> {
    group: SwatchGroup<'a, F, P>,
    style: ColorSwatchStyle,
    spacing: f32,
}

impl<'a, F: ?Sized, P: ?Sized> ColorSwatchGroup<'a, F, P> {
    pub fn new(group: SwatchGroup<'a, F, P>) -> Self {
        Self {
            group,
            style: ColorSwatchStyle::default(),
            spacing: DEFAULT_SPACING,
        }
    }

    /// Take swatch size, shape and spacing from a config.
    pub fn with_config(self, config: &SwatchGroupConfig) -> Self {
        self.style(ColorSwatchStyle::from_config(config))
            .spacing(config.spacing)
    }

    /// Set the swatch style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the gap between swatches.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<'a, F, P> ColorSwatchGroup<'a, F, P>
where
    F: Fn(&Color) + ?Sized,
    P: PaletteLookup + ?Sized,
{
    /// Show the group.
    pub fn show(self, ui: &mut Ui) -> SwatchGroupResponse {
        let layout = self.group.layout();
        let class = layout.class;

        let inner = styles::container(ui, class, |ui| {
            ui.spacing_mut().item_spacing = styles::item_spacing(class, self.spacing);

            let mut swatches = Vec::with_capacity(layout.len());
            let mut actions = Vec::new();
            for node in &layout.children {
                let swatch = ColorSwatch::from_node(node).style(self.style.clone());
                let shown = ui.push_id(node.key.as_str(), |ui| swatch.show(ui)).inner;
                swatches.push((node.key.clone(), shown.response.rect));
                actions.extend(shown.action);
            }
            (swatches, actions)
        });

        let (swatches, actions) = inner.inner;
        SwatchGroupResponse {
            response: inner.response,
            class,
            swatches,
            actions,
        }
    }
}
