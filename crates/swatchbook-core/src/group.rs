//! Swatch group projection.
//!
//! A [`SwatchGroup`] turns an ordered list of colors into a
//! [`SwatchGroupLayout`]: one container class plus one [`SwatchNode`] per
//! color, in input order. Each node carries the same `copy` flag,
//! add-to-palette callback and palette handle as its siblings.
//!
//! The callback and palette are opaque: they are borrowed, handed to every
//! node and never called or inspected here.

use std::fmt;

use crate::color::Color;
use crate::config::SwatchGroupConfig;
use crate::direction::{Direction, LayoutClass};

/// Identity of a swatch inside its group: the color joined with its position.
///
/// Two equal colors at different positions get different keys. Keys stay the
/// same across frames as long as the positions do not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwatchKey(String);

impl SwatchKey {
    /// Build the key for `color` at `index`.
    pub fn new(color: &Color, index: usize) -> Self {
        Self(format!("{}-{}", color, index))
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inputs for a single swatch.
pub struct SwatchNode<'a, F: ?Sized, P: ?Sized> {
    /// Composite identity, see [`SwatchKey`]
    pub key: SwatchKey,
    /// Position in the input list
    pub index: usize,
    /// The color, borrowed from the input list
    pub color: &'a Color,
    /// Whether the swatch offers copy-to-clipboard
    pub copy: bool,
    /// Callback the swatch may use to add its color to a palette
    pub add_to_palette: Option<&'a F>,
    /// Palette the swatch may consult
    pub palette: Option<&'a P>,
}

impl<F: ?Sized, P: ?Sized> fmt::Debug for SwatchNode<'_, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchNode")
            .field("key", &self.key)
            .field("index", &self.index)
            .field("color", &self.color)
            .field("copy", &self.copy)
            .field("add_to_palette", &self.add_to_palette.is_some())
            .field("palette", &self.palette.is_some())
            .finish()
    }
}

/// Output of [`SwatchGroup::layout`]: the container class and its children.
pub struct SwatchGroupLayout<'a, F: ?Sized, P: ?Sized> {
    pub class: LayoutClass,
    pub children: Vec<SwatchNode<'a, F, P>>,
}

impl<'a, F: ?Sized, P: ?Sized> SwatchGroupLayout<'a, F, P> {
    /// Number of child swatches.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &SwatchKey> {
        self.children.iter().map(|node| &node.key)
    }
}

impl<F: ?Sized, P: ?Sized> fmt::Debug for SwatchGroupLayout<'_, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchGroupLayout")
            .field("class", &self.class)
            .field("children", &self.children)
            .finish()
    }
}

/// A group of swatches, described by its inputs.
///
/// Holds only borrows; build one per frame.
pub struct SwatchGroup<'a, F: ?Sized = dyn Fn(&Color), P: ?Sized = [Color]> {
    colors: &'a [Color],
    direction: Direction,
    copy: bool,
    add_to_palette: Option<&'a F>,
    palette: Option<&'a P>,
}

impl<'a> SwatchGroup<'a> {
    /// Create a vertical, copy-disabled group with no callback and no palette.
    pub fn new(colors: &'a [Color]) -> Self {
        Self {
            colors,
            direction: Direction::default(),
            copy: false,
            add_to_palette: None,
            palette: None,
        }
    }

    /// Create a group with the direction and copy flag taken from `config`.
    pub fn from_config(colors: &'a [Color], config: &SwatchGroupConfig) -> Self {
        Self::new(colors)
            .direction(config.direction)
            .copy(config.copy)
    }
}

impl<'a, F: ?Sized, P: ?Sized> SwatchGroup<'a, F, P> {
    /// Set the layout direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the direction from a code; anything but `"h"` is vertical.
    pub fn direction_code(self, code: &str) -> Self {
        self.direction(Direction::from_code(code))
    }

    /// Enable or disable the copy affordance on every swatch.
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Set the add-to-palette callback handed to every swatch.
    pub fn add_to_palette<G: ?Sized>(self, callback: &'a G) -> SwatchGroup<'a, G, P> {
        self.with_add_to_palette(Some(callback))
    }

    /// Set or clear the add-to-palette callback.
    pub fn with_add_to_palette<G: ?Sized>(self, callback: Option<&'a G>) -> SwatchGroup<'a, G, P> {
        SwatchGroup {
            colors: self.colors,
            direction: self.direction,
            copy: self.copy,
            add_to_palette: callback,
            palette: self.palette,
        }
    }

    /// Set the palette handed to every swatch.
    pub fn palette<Q: ?Sized>(self, palette: &'a Q) -> SwatchGroup<'a, F, Q> {
        self.with_palette(Some(palette))
    }

    /// Set or clear the palette.
    pub fn with_palette<Q: ?Sized>(self, palette: Option<&'a Q>) -> SwatchGroup<'a, F, Q> {
        SwatchGroup {
            colors: self.colors,
            direction: self.direction,
            copy: self.copy,
            add_to_palette: self.add_to_palette,
            palette,
        }
    }

    /// Project the inputs into a container class and an ordered list of nodes.
    pub fn layout(&self) -> SwatchGroupLayout<'a, F, P> {
        let children = self
            .colors
            .iter()
            .enumerate()
            .map(|(index, color)| SwatchNode {
                key: SwatchKey::new(color, index),
                index,
                color,
                copy: self.copy,
                add_to_palette: self.add_to_palette,
                palette: self.palette,
            })
            .collect();

        SwatchGroupLayout {
            class: self.direction.layout_class(),
            children,
        }
    }
}

/// Project a swatch group from its five inputs in one call.
pub fn render<'a, F: ?Sized, P: ?Sized>(
    colors: &'a [Color],
    direction: Direction,
    copy: bool,
    add_to_palette: Option<&'a F>,
    palette: Option<&'a P>,
) -> SwatchGroupLayout<'a, F, P> {
    SwatchGroup::new(colors)
        .direction(direction)
        .copy(copy)
        .with_add_to_palette(add_to_palette)
        .with_palette(palette)
        .layout()
}
