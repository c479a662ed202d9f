//! Command-line interface entry point for `scholar`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use scholar_analytics::config::Config;
use scholar_analytics::info;
use scholar_analytics::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // --log-level beats config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Gpa {
            input_file,
            semester,
        } => commands::gpa::run(input_file.as_deref(), semester.as_deref(), &config),
        Command::Progress {
            input_file,
            required,
        } => commands::progress::run(input_file.as_deref(), required, &config),
        Command::Graph {
            input_file,
            tag,
            format,
            output,
        } => commands::graph::run(
            input_file.as_deref(),
            tag.as_deref(),
            format,
            output.as_deref(),
            &config,
        ),
        Command::Report {
            input_file,
            output,
            format,
        } => commands::report::run(input_file.as_deref(), output.as_deref(), &format, &config),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
