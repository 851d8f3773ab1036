//! Splicing a generated `themes` block into an existing Zellij config
//!
//! This is plain text substitution, not KDL parsing. The generated document's
//! outer `themes { ... }` body (first `themes {` to the last `}`) replaces the
//! config's first `themes {` block, which is taken to end at the first line
//! that starts with `}`.

use crate::debug;
use anyhow::{Context, Result, anyhow};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Outer `themes` block of a generated document, greedy to the last brace
static GENERATED_THEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)themes\s*\{(.*)\}").expect("generated themes pattern is valid")
});

/// First `themes` block of a config file, up to the next line-leading brace
static CONFIG_THEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)themes\s*\{.*?\n\}").expect("config themes pattern is valid")
});

/// Result of a splice attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The config's `themes` block was replaced and the file rewritten
    Updated,
    /// The config has no `themes` block; the file was left untouched
    NoThemesBlock,
}

/// Inner content of the first `themes { ... }` block in generated KDL
pub fn extract_themes_body(kdl: &str) -> Option<&str> {
    GENERATED_THEMES
        .captures(kdl)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
}

/// Replace the `themes` block of `config` with the one from `generated`
///
/// Returns the new config text, or `None` when `config` has no `themes`
/// block. Fails only when `generated` itself has no `themes` block.
pub fn splice_themes(config: &str, generated: &str) -> Result<Option<String>> {
    let body =
        extract_themes_body(generated).ok_or_else(|| anyhow!("Could not parse generated theme"))?;

    if !CONFIG_THEMES.is_match(config) {
        return Ok(None);
    }

    let replacement = format!("themes {{{body}}}");
    Ok(Some(CONFIG_THEMES.replace(config, NoExpand(&replacement)).into_owned()))
}

/// Splice `generated` into the config file at `config_path`, in place
pub fn update_config(config_path: &Path, generated: &str) -> Result<SpliceOutcome> {
    let config = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let Some(updated) = splice_themes(&config, generated)? else {
        debug::log_category("splice", "no themes block in config, left unchanged");
        return Ok(SpliceOutcome::NoThemesBlock);
    };

    fs::write(config_path, updated)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    debug::log_path("spliced", config_path);

    Ok(SpliceOutcome::Updated)
}
