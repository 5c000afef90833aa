//! Command-line interface definitions and handlers for the minimizers CLI.

pub mod args;
pub mod density;
pub mod helpers;

pub use args::{Cli, Commands};
pub use density::{run_config, run_density, run_formula, DensityOptions};
