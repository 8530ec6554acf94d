//! Swatchbook Core Library
//!
//! Platform-agnostic data structures for color swatch groups: opaque colors,
//! the layout direction, the group projection and its configuration.

pub mod color;
pub mod config;
pub mod direction;
pub mod group;

pub use color::{colors, Color};
pub use config::{ConfigError, ConfigResult, SwatchGroupConfig};
pub use direction::{Direction, DirectionError, LayoutClass};
pub use group::{render, SwatchGroup, SwatchGroupLayout, SwatchKey, SwatchNode};
