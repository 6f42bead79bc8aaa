//! Style configuration for the builder panel.
//!
//! - [`StyleConfigurator`]: fluent builder over text and layout settings
//! - [`StyleRender`]: the immutable result of `build()`, used to display messages
//! - [`Color`]: CSS hex colours mapped onto the terminal palette

pub mod colors;
pub mod configurator;
pub mod render;

pub use colors::Color;
pub use configurator::{StyleConfigurator, PROPERTY_ORDER};
pub use render::{StyleProperty, StyleRender};
