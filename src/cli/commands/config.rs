//! `scholar config` handler

use crate::args::ConfigSubcommand;
use scholar_analytics::config::Config;
use scholar_analytics::info;
use std::io::{self, BufRead, Write};

/// Keys accepted by `get`, `set` and `unset`
const KNOWN_KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "required_credits",
    "gpa_scale",
    "data_file",
    "reports_dir",
];

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message when a key is unknown, a value is invalid, or
/// the config file cannot be written or removed
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
            println!("\nFile: {}", Config::get_config_file_path().display());
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            println!("{value}");
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value).map_err(|e| format!("✗ {e}"))?;
            persist(config)?;
            info!("Config key '{key}' set to '{value}'");
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config
                .unset(&key, defaults)
                .map_err(|_| unknown_key(&key))?;
            persist(config)?;
            let restored = config.get(&key).unwrap_or_default();
            println!("✓ Reset {key} to default ({restored})");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "✗ Unknown config key: '{key}' (known keys: {})",
        KNOWN_KEYS.join(", ")
    )
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))
}

/// Delete the config file after a y/yes confirmation read from `input`
fn reset<R: BufRead>(input: &mut R) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer).ok();

    if confirmed(&answer) {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
