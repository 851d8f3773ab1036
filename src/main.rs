use clap::Parser;
use std::process::ExitCode;
use zellij_theme::cli::Cli;
use zellij_theme::commands::run_generate;
use zellij_theme::config::{Paths, Settings, base_dir};
use zellij_theme::{KdlRenderer, debug, debug_log};

fn main() -> ExitCode {
    debug::init();

    let cli = Cli::parse();

    // Load settings
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("⚠ {e:#}; using default settings");
        Settings::default()
    });

    let paths = Paths::resolve(&cli, &base_dir(&settings));
    debug::log_category("paths", &format!("{paths:?}"));

    match run_generate(&paths, &settings, &KdlRenderer::new()) {
        Ok(report) => {
            debug_log!("finished, config: {:?}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Error generating theme: {e:#}");
            ExitCode::FAILURE
        }
    }
}
