//! Color references and palette resolution
//!
//! Every color that reaches the rendered output is an [`Rgb`] triplet.
//! Components refer to colors by literal hex string, by an already resolved
//! triplet, or by a palette name; [`Palette::resolve`] turns any of those into
//! a triplet or fails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A resolved color: red, green, blue in that order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Decode a `RRGGBB` hex string (leading `#` optional, case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels as an array, in output order
    pub fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.channels()
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

/// Color resolution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string without exactly six hex digits
    InvalidHex(String),
    /// Palette name missing, or palette entry of an unknown shape
    Unresolvable(String),
}

impl Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(hex) => write!(f, "invalid hex color: {hex}"),
            Self::Unresolvable(reference) => write!(f, "unable to parse color: {reference}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// A color slot value inside a component
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    /// Already resolved triplet, passed through unchanged
    Triplet(Rgb),
    /// `#RRGGBB` literal, or a palette name when there is no leading `#`
    Named(String),
}

/// One palette entry, in any of the accepted shapes
///
/// Variant order matters for deserialization: a record carrying both `rgb`
/// and `value` lands in [`PaletteEntry::Triplet`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// Plain hex string
    Hex(String),
    /// Record with a pre-resolved `rgb` triplet
    Triplet { rgb: Rgb },
    /// Record with a hex `value`
    Value { value: String },
    /// Anything else; only an error once something references it
    Unrecognized(serde_json::Value),
}

impl PaletteEntry {
    /// Resolve this entry to a triplet. `name` is used in error messages.
    pub fn resolve(&self, name: &str) -> Result<Rgb, ColorError> {
        match self {
            PaletteEntry::Triplet { rgb } => Ok(*rgb),
            PaletteEntry::Value { value } => Rgb::from_hex(value),
            PaletteEntry::Hex(hex) => Rgb::from_hex(hex),
            PaletteEntry::Unrecognized(_) => Err(ColorError::Unresolvable(name.to_string())),
        }
    }
}

/// Symbolic color names mapped to palette entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, PaletteEntry>);

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: PaletteEntry) {
        self.0.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a component color reference against this palette
    pub fn resolve(&self, reference: &ColorRef) -> Result<Rgb, ColorError> {
        match reference {
            ColorRef::Triplet(rgb) => Ok(*rgb),
            ColorRef::Named(hex) if hex.starts_with('#') => Rgb::from_hex(hex),
            ColorRef::Named(name) => self
                .get(name)
                .ok_or_else(|| ColorError::Unresolvable(name.clone()))?
                .resolve(name),
        }
    }
}

impl FromIterator<(String, PaletteEntry)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, PaletteEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
