// main.rs - CLI entry point

use seqrun::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args::parse(&tokens);

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("💡 Save this content to a .toml file and use -c /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
        println!("📄 Loaded configuration from: {}", config_path);
    }

    if args.help {
        print_usage();
        return Ok(());
    }

    if args.version {
        println!("{}", seqrun::get_info());
        return Ok(());
    }

    // Parse problems are collected rather than raised; report them all,
    // then exit through the usage text
    if args.has_error() {
        for error in &args.errors {
            eprintln!("❌ ERROR: {}", error);
        }
        print_usage();
        std::process::exit(1);
    }

    validate_args(&args)?;

    print_splash(&args);

    // The parsed container is handed to the sequence-processing stage
    // from here; report the resolved invocation it will receive.
    for file in &args.input_files {
        println!("   • {}", file);
    }
    if args.input_files.is_empty() {
        println!("   • (reading from stdin)");
    }

    Ok(())
}
