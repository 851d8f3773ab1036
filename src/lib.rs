//! zellij-theme - Zellij theme generator
//!
//! Converts a JSON theme description into a Zellij KDL `themes` block and
//! optionally splices it into an existing `config.kdl`.
//!
//! # Modules
//!
//! - [`color`] - Hex decoding and palette resolution
//! - [`theme`] - Theme description data model
//! - [`render`] - KDL rendering
//! - [`splice`] - Config file block replacement
//! - [`config`] - Settings and path resolution
//! - [`commands`] - Command implementations

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod debug;
pub mod render;
pub mod splice;
pub mod theme;

// Re-export commonly used types
pub use color::{ColorError, ColorRef, Palette, PaletteEntry, Rgb};
pub use config::{Paths, Settings};
pub use render::{Clock, KdlRenderer, SystemClock};
pub use splice::SpliceOutcome;
pub use theme::{Component, Metadata, ThemeDescription};
