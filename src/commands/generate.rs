//! Generate command implementation

use crate::config::{Paths, Settings};
use crate::debug;
use crate::render::{Clock, KdlRenderer};
use crate::splice::{SpliceOutcome, update_config};
use crate::theme::ThemeDescription;
use anyhow::{Context, Result};
use std::fs;

/// A successfully written theme
#[derive(Debug, Clone)]
pub struct Generated {
    /// Theme name, as referenced by `theme "<name>"` in config.kdl
    pub name: String,
    /// The rendered KDL document
    pub kdl: String,
}

/// What happened to config.kdl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceReport {
    /// Config file absent, or splicing disabled in settings
    Skipped,
    Updated,
    NoThemesBlock,
    /// Splice failed; the generated output file is still in place
    Failed(String),
}

/// Run the full conversion and, when enabled, update config.kdl
///
/// Only primary conversion failures are returned as errors. Splice problems
/// are reported on the console and never fail the run.
pub fn run_generate<C: Clock>(
    paths: &Paths,
    settings: &Settings,
    renderer: &KdlRenderer<C>,
) -> Result<SpliceReport> {
    let generated = generate_theme(paths, renderer)?;

    println!("✓ Theme generated successfully!");
    println!("  Input:  {}", paths.input.display());
    println!("  Output: {}", paths.output.display());
    println!("\nTo use this theme, add to your config.kdl:");
    println!("  theme \"{}\"", generated.name);

    if !settings.update_config {
        debug::log_category("splice", "disabled in settings");
        return Ok(SpliceReport::Skipped);
    }

    let report = splice_config(paths, &generated.kdl);
    match &report {
        SpliceReport::Skipped => {}
        SpliceReport::Updated => println!("✓ Config updated: {}", paths.config.display()),
        SpliceReport::NoThemesBlock => println!(
            "⚠ No themes block found in {}; config left unchanged",
            paths.config.display()
        ),
        SpliceReport::Failed(message) => {
            eprintln!("✗ Error updating config: {message}");
            println!("  You can manually copy theme.kdl content to config.kdl");
        }
    }

    Ok(report)
}

/// Load, render and write the theme
///
/// The output file is only touched after the theme rendered cleanly.
pub fn generate_theme<C: Clock>(paths: &Paths, renderer: &KdlRenderer<C>) -> Result<Generated> {
    debug::log_path("input", &paths.input);
    let theme = ThemeDescription::load_from(&paths.input)?;

    let kdl = renderer
        .render(&theme)
        .with_context(|| format!("Failed to render theme '{}'", theme.metadata.name))?;

    fs::write(&paths.output, &kdl)
        .with_context(|| format!("Failed to write output file: {}", paths.output.display()))?;
    debug::log_path("output", &paths.output);

    Ok(Generated {
        name: theme.metadata.name,
        kdl,
    })
}

/// Splice `kdl` into the config file if it exists
pub fn splice_config(paths: &Paths, kdl: &str) -> SpliceReport {
    if !paths.config.exists() {
        debug::log_category("splice", "no config file, skipping");
        return SpliceReport::Skipped;
    }

    match update_config(&paths.config, kdl) {
        Ok(SpliceOutcome::Updated) => SpliceReport::Updated,
        Ok(SpliceOutcome::NoThemesBlock) => SpliceReport::NoThemesBlock,
        Err(e) => SpliceReport::Failed(format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MockClock;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::TempDir;

    const THEME_JSON: &str = r##"{
        "metadata": {
            "name": "midnight",
            "description": "Late night colors",
            "author": "tester",
            "version": "2.0.0"
        },
        "palette": {
            "ink": { "value": "#000000" },
            "paper": { "rgb": [255, 255, 255] },
            "accent": "#FF8800"
        },
        "components": {
            "frame_selected": { "base": "accent" },
            "text_unselected": { "background": "paper", "base": "ink" }
        },
        "multiplayer_user_colors": {
            "colors": [{ "rgb": [1, 2, 3] }, { "rgb": [4, 5, 6] }]
        }
    }"##;

    const CONFIG_KDL: &str = "\
pane_frames false

themes {
    placeholder {
        fg 1 1 1
    }
}

theme \"placeholder\"
";

    fn renderer() -> KdlRenderer<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .returning(|| NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        KdlRenderer::with_clock(clock)
    }

    fn setup(theme_json: &str, config: Option<&str>) -> (TempDir, Paths) {
        let temp = TempDir::new().unwrap();
        let paths = Paths::in_dir(temp.path());
        fs::write(&paths.input, theme_json).unwrap();
        if let Some(config) = config {
            fs::write(&paths.config, config).unwrap();
        }
        (temp, paths)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_generate_writes_output() {
        let (_temp, paths) = setup(THEME_JSON, None);

        let generated = generate_theme(&paths, &renderer()).unwrap();

        assert_eq!(generated.name, "midnight");
        let output = read(&paths.output);
        assert_eq!(output, generated.kdl);
        assert!(output.starts_with("// Late night colors\n// Author: tester\n// Version: 2.0.0\n"));
        assert!(output.contains("// Generated from theme.json on 2025-01-31\n"));
        assert!(output.contains(
            "        text_unselected {\n            base 0 0 0\n            background 255 255 255\n        }\n"
        ));
        assert!(output.contains("        frame_selected {\n            base 255 136 0\n        }\n"));
        assert!(output.contains("        multiplayer_user_colors 1 2 3 4 5 6\n"));
        assert!(output.find("text_unselected").unwrap() < output.find("frame_selected").unwrap());
    }

    #[test]
    fn test_generate_overwrites_existing_output() {
        let (_temp, paths) = setup(THEME_JSON, None);
        fs::write(&paths.output, "stale content that is much longer than needed").unwrap();

        generate_theme(&paths, &renderer()).unwrap();

        assert!(!read(&paths.output).contains("stale"));
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::in_dir(temp.path());

        let err = generate_theme(&paths, &renderer()).unwrap_err();

        assert!(err.to_string().contains("Failed to read theme file"));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_malformed_input_fails() {
        let (_temp, paths) = setup("{ \"metadata\": ", None);

        assert!(generate_theme(&paths, &renderer()).is_err());
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_unresolvable_color_keeps_previous_output() {
        let (_temp, paths) = setup(
            r#"{ "metadata": { "name": "x" }, "components": { "table_title": { "base": "ghost" } } }"#,
            None,
        );
        fs::write(&paths.output, "previous").unwrap();

        let err = generate_theme(&paths, &renderer()).unwrap_err();

        assert!(format!("{err:#}").contains("unable to parse color: ghost"));
        assert_eq!(read(&paths.output), "previous");
    }

    #[test]
    fn test_run_without_config_file() {
        let (_temp, paths) = setup(THEME_JSON, None);

        let report = run_generate(&paths, &Settings::default(), &renderer()).unwrap();

        assert_eq!(report, SpliceReport::Skipped);
        assert!(paths.output.exists());
        assert!(!paths.config.exists());
    }

    #[test]
    fn test_run_updates_config() {
        let (_temp, paths) = setup(THEME_JSON, Some(CONFIG_KDL));

        let report = run_generate(&paths, &Settings::default(), &renderer()).unwrap();

        assert_eq!(report, SpliceReport::Updated);
        let config = read(&paths.config);
        assert!(config.starts_with("pane_frames false\n\nthemes {\n    midnight {\n"));
        assert!(!config.contains("placeholder {"));
        assert!(config.ends_with("    }\n}\n\ntheme \"placeholder\"\n"));
    }

    #[test]
    fn test_run_twice_is_idempotent() {
        let (_temp, paths) = setup(THEME_JSON, Some(CONFIG_KDL));

        run_generate(&paths, &Settings::default(), &renderer()).unwrap();
        let once = read(&paths.config);
        run_generate(&paths, &Settings::default(), &renderer()).unwrap();

        assert_eq!(read(&paths.config), once);
    }

    #[test]
    fn test_run_config_without_themes_block() {
        let config = "pane_frames false\ntheme \"default\"\n";
        let (_temp, paths) = setup(THEME_JSON, Some(config));

        let report = run_generate(&paths, &Settings::default(), &renderer()).unwrap();

        assert_eq!(report, SpliceReport::NoThemesBlock);
        assert_eq!(read(&paths.config), config);
    }

    #[test]
    fn test_run_with_splice_disabled() {
        let (_temp, paths) = setup(THEME_JSON, Some(CONFIG_KDL));
        let settings = Settings {
            update_config: false,
            ..Default::default()
        };

        let report = run_generate(&paths, &settings, &renderer()).unwrap();

        assert_eq!(report, SpliceReport::Skipped);
        assert_eq!(read(&paths.config), CONFIG_KDL);
    }

    #[test]
    fn test_splice_failure_is_not_fatal() {
        let (_temp, paths) = setup(THEME_JSON, Some(CONFIG_KDL));

        let report = splice_config(&paths, "// no themes block here\n");

        assert_eq!(
            report,
            SpliceReport::Failed("Could not parse generated theme".to_string())
        );
        assert_eq!(read(&paths.config), CONFIG_KDL);
    }
}
