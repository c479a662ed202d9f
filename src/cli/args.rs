//! CLI argument definitions for `scholar`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use scholar_analytics::config::ConfigOverrides;
use scholar_analytics::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Output format of the `graph` command
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum GraphFormat {
    /// Human-readable connection list
    #[default]
    Text,
    /// `{nodes, links}` JSON for force-layout front ends
    Json,
    /// Mermaid flowchart
    Mermaid,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `required_credits`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show credit-weighted GPA, overall or for one semester.
    Gpa {
        /// Academic record file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Semester label to restrict to, or `all`
        #[arg(short, long, value_name = "LABEL")]
        semester: Option<String>,
    },
    /// Show credit progress toward graduation.
    Progress {
        /// Academic record file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Required credits for this run (overrides the record file)
        #[arg(long, value_name = "CREDITS")]
        required: Option<u32>,
    },
    /// Build the knowledge web of notes connected by shared tags.
    Graph {
        /// Academic record file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Only notes carrying this tag, or `all`
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = GraphFormat::Text)]
        format: GraphFormat,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate a full academic report.
    Report {
        /// Academic record file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Output file path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "scholar",
    about = "Academic record analytics: GPA, graduation progress and the note knowledge web",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config graduation credit target
    #[arg(long = "required-credits", value_name = "CREDITS")]
    pub required_credits: Option<u32>,

    /// Override config academic record file
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            required_credits: self.required_credits,
            data_file: self.data_file.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
        }
    }
}
