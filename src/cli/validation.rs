// validation.rs - Input validation utilities

use crate::cli::args::Args;
use std::path::Path;

/// Validate the resolved arguments. These are checks the parser itself
/// does not make: the parser records token-level problems, this rejects
/// values that are well-formed but unusable.
pub fn validate_args(args: &Args) -> Result<(), String> {
    if args.iterations == 0 {
        return Err("Iteration count must be at least 1".to_string());
    }

    for file in &args.input_files {
        // "-" means stdin, nothing to check
        if file == "-" {
            continue;
        }
        if !Path::new(file).is_file() {
            return Err(format!("Input file '{}' does not exist", file));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let args = Args::new();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let args = Args::parse(&["-i", "0"]);
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 1"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let args = Args::parse(&["/nonexistent/a.fa"]);
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_stdin_marker_accepted() {
        let args = Args::parse(&["-"]);
        assert!(validate_args(&args).is_ok());
    }
}
