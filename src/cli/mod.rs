// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod usage;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, ParseError, DEFAULT_ITERATIONS};
pub use config::Config;
pub use usage::{print_splash, print_usage, splash_text, usage_text};
pub use validation::validate_args;
