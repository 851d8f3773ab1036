//! Command implementations

pub mod generate;

pub use generate::{Generated, SpliceReport, generate_theme, run_generate, splice_config};
