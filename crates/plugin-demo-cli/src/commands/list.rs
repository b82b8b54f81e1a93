use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use plugin_demo::{FunctionKey, PropertyKey};
use plugin_demo_config::OutputFormat;
use serde::Serialize;

use super::Session;
use crate::output;

#[derive(Serialize)]
struct Listing<'a> {
    import: &'a str,
    functions: Vec<FunctionEntry>,
    properties: Vec<&'static str>,
}

#[derive(Serialize)]
struct FunctionEntry {
    name: &'static str,
    arity: usize,
}

pub fn execute(session: &Session) -> Result<ExitCode> {
    let listing = Listing {
        import: &session.import_name,
        functions: FunctionKey::ALL
            .iter()
            .map(|key| FunctionEntry {
                name: key.as_str(),
                arity: key.arity(),
            })
            .collect(),
        properties: PropertyKey::ALL.iter().map(|key| key.as_str()).collect(),
    };

    if session.output.format != OutputFormat::Text {
        println!("{}", output::render_structured(&listing, &session.output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} \"{}\"", "import".cyan().bold(), listing.import);
    println!("{}", "Functions:".cyan().bold());
    for entry in &listing.functions {
        println!("  • {} ({} arg)", entry.name.green(), entry.arity);
    }
    println!("{}", "Properties:".cyan().bold());
    for name in &listing.properties {
        println!("  • {}", name.green());
    }

    Ok(ExitCode::SUCCESS)
}
