// usage.rs - Usage and splash text

use crate::cli::args::{Args, DEFAULT_ITERATIONS};
use chrono::Local;

/// Build the fixed usage message
pub fn usage_text() -> String {
    format!(
        "Usage: seqrun [options] [file ...]\n\
         Iterate a sequence-processing run over the given input files\n\
         Options:\n\
         \x20 -i <count>  number of iterations (default: {})\n\
         \x20 -c <file>   read options from TOML configuration file\n\
         \x20 -g          print a sample configuration file and exit\n\
         \x20 -h          print this help message and exit\n\
         \x20 -v          print version information and exit",
        DEFAULT_ITERATIONS
    )
}

/// Write the usage message to stderr. Pure side effect; never touches
/// the argument container.
pub fn print_usage() {
    eprintln!("{}", usage_text());
}

/// Build the program banner for a resolved invocation
pub fn splash_text(args: &Args) -> String {
    format!(
        "seqrun v{} ({})\n🔁 Iterations: {}\n📁 Input files: {}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        args.iterations,
        args.file_count()
    )
}

/// Write the program banner to stdout. Pure side effect; never touches
/// the argument container.
pub fn print_splash(args: &Args) {
    println!("{}", splash_text(args));
}
