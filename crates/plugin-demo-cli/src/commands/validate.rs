use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use plugin_demo_config::Config;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a plugin-demo.yaml or plugin-demo.json file
    config: PathBuf,

    /// Show detailed validation output
    #[arg(short, long)]
    verbose: bool,
}

pub fn execute(args: ValidateArgs) -> Result<ExitCode> {
    println!("{}", "🔍 Validating configuration...".blue().bold());
    println!("  File: {}", args.config.display());

    let config_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config: {}", args.config.display()))?;

    let is_json = args
        .config
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: Config = if is_json {
        let _json: serde_json::Value =
            serde_json::from_str(&config_str).context("Invalid JSON syntax")?;
        println!("  {} JSON syntax", "✓".green());
        serde_json::from_str(&config_str).context("Invalid configuration structure")?
    } else {
        let _yaml: serde_yaml::Value =
            serde_yaml::from_str(&config_str).context("Invalid YAML syntax")?;
        println!("  {} YAML syntax", "✓".green());
        serde_yaml::from_str(&config_str).context("Invalid configuration structure")?
    };

    println!("  {} Configuration structure", "✓".green());

    config
        .validate()
        .context("Configuration validation failed")?;

    println!("  {} Validation passed", "✓".green());

    if args.verbose {
        println!("\n{}", "Configuration Details:".cyan().bold());
        println!("  Version: {}", config.version);
        println!("  Import name: {}", config.plugin.import_name);
        println!(
            "  Output: {}{}",
            config.output.format,
            if config.output.pretty { " (pretty)" } else { "" }
        );
        if let Some(level) = &config.log_level {
            println!("  Log level: {}", level);
        }
        if !config.host.is_empty() {
            println!("  Host configuration keys: {}", config.host.len());
            for key in config.host.keys() {
                println!("    • {}", key.green());
            }
        }
    }

    println!("\n{}", "✨ Configuration is valid!".green().bold());
    Ok(ExitCode::SUCCESS)
}
