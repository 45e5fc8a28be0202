// lib.rs - seqrun library root

//! # seqrun - Command-line front end for an iterated sequence-processing utility
//!
//! This library provides the argument container and option parser for a
//! utility that runs a sequence-processing step a configurable number of
//! times over a list of input files. Parsing never aborts: every problem
//! is recorded on the returned container so the caller sees the full
//! picture before deciding how to exit.
//!
//! ## Basic Usage
//!
//! ```rust
//! use seqrun::prelude::*;
//!
//! let args = Args::parse(&["-i", "5", "a.fa", "b.fa"]);
//! assert_eq!(args.iterations, 5);
//! assert_eq!(args.file_count(), 2);
//! assert!(!args.has_error());
//! ```

pub mod cli;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{print_splash, print_usage, splash_text, usage_text};
    pub use crate::cli::{validate_args, Args, Config, ParseError, DEFAULT_ITERATIONS};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config, ParseError, DEFAULT_ITERATIONS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("seqrun v{} - iterated sequence-processing front end", VERSION)
}
