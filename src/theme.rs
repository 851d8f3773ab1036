//! Theme description data model
//!
//! Mirrors the JSON layout of `theme.json`: metadata, a palette, a map of UI
//! components, and optional multiplayer user colors.

use crate::color::{ColorRef, Palette, PaletteEntry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Recognized components, in output order
pub const COMPONENT_NAMES: [&str; 14] = [
    "text_unselected",
    "text_selected",
    "ribbon_unselected",
    "ribbon_selected",
    "table_title",
    "table_cell_unselected",
    "table_cell_selected",
    "list_unselected",
    "list_selected",
    "frame_unselected",
    "frame_selected",
    "frame_highlight",
    "exit_code_success",
    "exit_code_error",
];

/// Recognized component slots, in output order
pub const SLOT_NAMES: [&str; 6] = [
    "base",
    "background",
    "emphasis_0",
    "emphasis_1",
    "emphasis_2",
    "emphasis_3",
];

/// Root of a theme description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDescription {
    pub metadata: Metadata,

    #[serde(default)]
    pub palette: Palette,

    /// Keyed by component name. Only [`COMPONENT_NAMES`] entries are ever
    /// decoded; anything else is kept as raw JSON and ignored.
    #[serde(default)]
    pub components: BTreeMap<String, Value>,

    #[serde(default)]
    pub multiplayer_user_colors: Option<MultiplayerColors>,
}

/// Descriptive fields copied into the header comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Theme name, used verbatim as the KDL node name
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub version: String,
}

/// Color slots of one UI component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_0: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_1: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_2: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_3: Option<ColorRef>,
}

impl Component {
    /// All slots paired with their names, in [`SLOT_NAMES`] order
    ///
    /// An empty color string counts as an absent slot.
    pub fn slots(&self) -> [(&'static str, Option<&ColorRef>); 6] {
        [
            (SLOT_NAMES[0], present(&self.base)),
            (SLOT_NAMES[1], present(&self.background)),
            (SLOT_NAMES[2], present(&self.emphasis_0)),
            (SLOT_NAMES[3], present(&self.emphasis_1)),
            (SLOT_NAMES[4], present(&self.emphasis_2)),
            (SLOT_NAMES[5], present(&self.emphasis_3)),
        ]
    }
}

fn present(slot: &Option<ColorRef>) -> Option<&ColorRef> {
    slot.as_ref()
        .filter(|color| !matches!(color, ColorRef::Named(name) if name.is_empty()))
}

/// `null`, `false`, `0` and `""` mean "no component"
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Per-user highlight colors for multiplayer sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiplayerColors {
    #[serde(default)]
    pub colors: Option<Vec<PaletteEntry>>,
}

impl ThemeDescription {
    /// Parse a theme description from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse theme JSON")
    }

    /// Load a theme description from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;

        Self::from_json(&content).with_context(|| format!("Invalid theme file: {}", path.display()))
    }

    /// Decode one recognized component; `None` when absent or blank
    pub fn component(&self, name: &str) -> Result<Option<Component>> {
        match self.components.get(name) {
            Some(value) if !is_blank(value) => Component::deserialize(value)
                .map(Some)
                .with_context(|| format!("Invalid component '{name}'")),
            _ => Ok(None),
        }
    }

    /// Components present in the description, in canonical order
    pub fn ordered_components(&self) -> Result<Vec<(&'static str, Component)>> {
        let mut components = Vec::new();
        for name in COMPONENT_NAMES {
            if let Some(component) = self.component(name)? {
                components.push((name, component));
            }
        }
        Ok(components)
    }

    /// Component keys that are not recognized and will not be rendered
    pub fn unknown_components(&self) -> Vec<&str> {
        self.components
            .keys()
            .map(String::as_str)
            .filter(|name| !COMPONENT_NAMES.iter().any(|known| known == name))
            .collect()
    }
}
