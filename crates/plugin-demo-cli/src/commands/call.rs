use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use plugin_demo::{Namespace, Value};

use super::Session;
use crate::output;

#[derive(Args)]
pub struct CallArgs {
    /// Function key (getallenvs, getenv, getfile, test)
    function: String,

    /// Function arguments, passed as strings
    args: Vec<String>,
}

pub fn execute(args: CallArgs, session: &Session) -> Result<ExitCode> {
    let Some(function) = session.plugin.root().func(&args.function) else {
        eprintln!("{} No such function: {}", "✗".red(), args.function);
        return Ok(ExitCode::from(2));
    };

    let values: Vec<Value> = args.args.into_iter().map(Value::from).collect();
    let result = function
        .call(&values)
        .with_context(|| format!("Failed to call {}", function.name()))?;

    tracing::debug!(
        function = %function.key(),
        absent = result.is_none(),
        "call finished"
    );

    println!("{}", output::render(result.as_ref(), &session.output)?);
    Ok(ExitCode::SUCCESS)
}
