use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugin_demo::Plugin;
use plugin_demo_config::{ConfigLoader, OutputFormat};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{Session, call, get, list, validate};

#[derive(Parser)]
#[command(name = "plugin-demo")]
#[command(version)]
#[command(about = "Call plugin-demo functions and read its properties", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, env = "PLUGIN_DEMO_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (json, yaml, text)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Pretty-print structured output
    #[arg(long, global = true)]
    pretty: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PLUGIN_DEMO_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Host configuration block as a JSON object, applied after the config file's `host`
    #[arg(long, value_name = "JSON", global = true)]
    host_config: Option<String>,

    /// Disable colored output (any non-empty NO_COLOR value other than false/0/no/off)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a plugin function
    Call(call::CallArgs),

    /// Read a plugin property
    Get(get::GetArgs),

    /// List supported functions and properties
    List,

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    colored::control::set_override(!cli.no_color);

    let command = match cli.command {
        Commands::Validate(args) => {
            init_tracing(cli.log_level.as_deref().unwrap_or("warn"));
            return validate::execute(args);
        }
        command => command,
    };

    let loader = ConfigLoader::new();
    let config = match &cli.config {
        Some(path) => loader
            .load_with_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => loader.load().context("Failed to load configuration")?,
    };

    let level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or("warn");
    init_tracing(level);

    let plugin = Plugin::builtin();
    plugin
        .configure(&config.host)
        .context("Plugin rejected host configuration")?;
    if let Some(json) = &cli.host_config {
        plugin
            .configure_json(json)
            .context("Invalid --host-config")?;
    }

    let mut output = config.output.clone();
    if let Some(format) = cli.format {
        output.format = format;
    }
    output.pretty |= cli.pretty;

    let session = Session {
        plugin,
        output,
        import_name: config.plugin.import_name,
    };

    match command {
        Commands::Call(args) => call::execute(args, &session),
        Commands::Get(args) => get::execute(args, &session),
        Commands::List => list::execute(&session),
        Commands::Validate(args) => validate::execute(args),
    }
}

/// Logs go to stderr; stdout carries lookup results only.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
