//! CLI subcommand implementations.

pub mod analyze;
pub mod generate;
pub mod process;
