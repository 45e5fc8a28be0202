// args.rs - Command line argument container and parser

use std::fmt;

/// Iteration count used when -i is absent
pub const DEFAULT_ITERATIONS: usize = 1;

/// Parsed representation of the command line invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// help message requested (-h)
    pub help: bool,

    /// version message requested (-v)
    pub version: bool,

    /// problems found during the scan, in encounter order
    pub errors: Vec<ParseError>,

    /// number of processing iterations (-i, default: 1)
    pub iterations: usize,

    /// input file paths in command line order
    pub input_files: Vec<String>,

    /// path to TOML configuration file (-c)
    pub config: Option<String>,

    /// generate sample configuration file and exit (-g)
    pub generate_config: bool,
}

/// Problems the parser can encounter. All are non-fatal: they are
/// recorded on the container and the scan runs to completion, so the
/// caller sees the full picture before deciding how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Option was given a value that does not parse (e.g. -i foo)
    InvalidOptionValue { option: &'static str, value: String },
    /// Option requiring a value was the last token
    MissingOptionValue { option: &'static str },
    /// Token looked like an option but is not one we know
    UnknownOption { option: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidOptionValue { option, value } => {
                write!(f, "invalid value '{}' for option {}", value, option)
            }
            ParseError::MissingOptionValue { option } => {
                write!(f, "option {} requires a value", option)
            }
            ParseError::UnknownOption { option } => {
                write!(f, "unknown option '{}'", option)
            }
        }
    }
}

impl Args {
    /// Create a container with all defaults: no flags set, empty file
    /// list, iterations = 1. Never fails.
    pub fn new() -> Self {
        Self {
            help: false,
            version: false,
            errors: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
            input_files: Vec::new(),
            config: None,
            generate_config: false,
        }
    }

    /// Parse the argument list (excluding the program name) with a single
    /// left-to-right scan. Always returns a populated container; errors
    /// are recorded via `errors`, never raised, so the caller decides
    /// whether to print usage and exit or proceed.
    ///
    /// A repeated value option keeps the last value given.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut args = Self::new();
        let mut iter = tokens.iter().map(|t| t.as_ref());

        while let Some(token) = iter.next() {
            match token {
                "-h" => args.help = true,
                "-v" => args.version = true,
                "-g" => args.generate_config = true,
                "-i" => match iter.next() {
                    Some(value) => match value.parse::<usize>() {
                        Ok(n) => args.iterations = n,
                        Err(_) => args.errors.push(ParseError::InvalidOptionValue {
                            option: "-i",
                            value: value.to_string(),
                        }),
                    },
                    None => args
                        .errors
                        .push(ParseError::MissingOptionValue { option: "-i" }),
                },
                "-c" => match iter.next() {
                    Some(value) => args.config = Some(value.to_string()),
                    None => args
                        .errors
                        .push(ParseError::MissingOptionValue { option: "-c" }),
                },
                other if other.len() > 1 && other.starts_with('-') => {
                    args.errors.push(ParseError::UnknownOption {
                        option: other.to_string(),
                    })
                }
                file => args.input_files.push(file.to_string()),
            }
        }

        args
    }

    /// True when the scan recorded at least one problem
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of input files; always equals `input_files.len()`
    pub fn file_count(&self) -> usize {
        self.input_files.len()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}
