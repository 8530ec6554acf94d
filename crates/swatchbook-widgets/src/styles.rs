//! Containers for the `hgroup` and `vgroup` classes.

use egui::{vec2, InnerResponse, Ui, Vec2};
use swatchbook_core::LayoutClass;

/// Lay out `add_contents` in a container of the given class.
///
/// The container hugs its contents: a row is as tall as its tallest swatch,
/// a column as wide as its widest.
pub fn container<R>(
    ui: &mut Ui,
    class: LayoutClass,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    match class {
        LayoutClass::HGroup => ui.horizontal(add_contents),
        LayoutClass::VGroup => ui.vertical(add_contents),
    }
}

/// Item spacing for a group container; `gap` is applied along the group axis.
pub fn item_spacing(class: LayoutClass, gap: f32) -> Vec2 {
    match class {
        LayoutClass::HGroup => vec2(gap, 0.0),
        LayoutClass::VGroup => vec2(0.0, gap),
    }
}
