use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use plugin_demo::Namespace;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct GetArgs {
    /// Property key (envs, now, pwd)
    property: String,
}

pub fn execute(args: GetArgs, session: &Session) -> Result<ExitCode> {
    let value = session
        .plugin
        .root()
        .get(&args.property)
        .with_context(|| format!("Failed to read property {}", args.property))?;

    let Some(value) = value else {
        eprintln!("{} No such property: {}", "✗".red(), args.property);
        return Ok(ExitCode::from(2));
    };

    println!("{}", output::render(Some(&value), &session.output)?);
    Ok(ExitCode::SUCCESS)
}
