//! KDL rendering of a theme description
//!
//! Produces the `themes { <name> { ... } }` document Zellij expects, preceded
//! by a comment header carrying the theme metadata and generation date.

use crate::color::{Palette, PaletteEntry};
use crate::debug;
use crate::theme::{Component, ThemeDescription};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

#[cfg(test)]
use mockall::automock;

/// Indentation of component blocks inside `themes { <name> { ... } }`
const COMPONENT_INDENT: &str = "        ";

/// Indentation of slot lines inside a component block
const SLOT_INDENT: &str = "            ";

/// Source of the generation date written into the header (allows mocking)
#[cfg_attr(test, automock)]
pub trait Clock {
    /// Today's date on the local clock
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Renders theme descriptions to KDL text
pub struct KdlRenderer<C: Clock = SystemClock> {
    clock: C,
}

impl KdlRenderer<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for KdlRenderer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> KdlRenderer<C> {
    /// Create a renderer with a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Render the full KDL document for a theme
    pub fn render(&self, theme: &ThemeDescription) -> Result<String> {
        let metadata = &theme.metadata;
        let generated_on = self.clock.today().format("%Y-%m-%d");

        let mut kdl = String::new();
        kdl.push_str(&format!("// {}\n", metadata.description));
        kdl.push_str(&format!("// Author: {}\n", metadata.author));
        kdl.push_str(&format!("// Version: {}\n", metadata.version));
        kdl.push_str(&format!("// Generated from theme.json on {generated_on}\n\n"));

        kdl.push_str("themes {\n");
        kdl.push_str(&format!("    {} {{\n", metadata.name));

        for name in theme.unknown_components() {
            debug::log_category("render", &format!("ignoring unknown component '{name}'"));
        }

        for (name, component) in theme.ordered_components()? {
            kdl.push_str(&render_component(name, &component, &theme.palette)?);
            kdl.push('\n');
            debug::log_category("render", &format!("rendered '{name}'"));
        }

        if let Some(colors) = theme
            .multiplayer_user_colors
            .as_ref()
            .and_then(|multiplayer| multiplayer.colors.as_deref())
        {
            let values = flatten_user_colors(colors)?
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            kdl.push_str(&format!("{COMPONENT_INDENT}multiplayer_user_colors {values}\n"));
        }

        kdl.push_str("    }\n");
        kdl.push_str("}\n");

        Ok(kdl)
    }
}

/// Render one component block, slots in canonical order
///
/// Absent slots are skipped. Fails on the first slot whose color cannot be
/// resolved against `palette`.
pub fn render_component(name: &str, component: &Component, palette: &Palette) -> Result<String> {
    let mut lines = vec![format!("{COMPONENT_INDENT}{name} {{")];

    for (slot, reference) in component.slots() {
        let Some(reference) = reference else {
            continue;
        };
        let rgb = palette
            .resolve(reference)
            .with_context(|| format!("component '{name}' slot '{slot}'"))?;
        debug::log_resolve(name, slot, rgb);
        lines.push(format!("{SLOT_INDENT}{slot} {rgb}"));
    }

    lines.push(format!("{COMPONENT_INDENT}}}"));
    Ok(lines.join("\n"))
}

/// Flatten per-user colors into one R,G,B,R,G,B,... sequence
pub fn flatten_user_colors(colors: &[PaletteEntry]) -> Result<Vec<u8>> {
    let mut values = Vec::with_capacity(colors.len() * 3);

    for (index, entry) in colors.iter().enumerate() {
        let label = format!("multiplayer_user_colors[{index}]");
        let rgb = entry.resolve(&label).with_context(|| label.clone())?;
        values.extend(rgb.channels());
    }

    Ok(values)
}
