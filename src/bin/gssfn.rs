//! gssfn - evaluate a stylesheet function from the command line

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use gss_functions::{default_registry, Arity};
#[cfg(feature = "cli")]
use serde::Serialize;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gssfn")]
#[command(version)]
#[command(about = "Preview GSS color and value functions", long_about = None)]
struct Cli {
    /// Function name, e.g. `darken`
    #[arg(required_unless_present = "list")]
    name: Option<String>,

    /// Function arguments, passed as plain text
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// List the registered functions and exit
    #[arg(short, long)]
    list: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct Report<'a> {
    function: &'a str,
    args: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct Listing {
    name: &'static str,
    arity: Arity,
}

#[cfg(feature = "cli")]
fn print_list(json: bool) -> Result<(), serde_json::Error> {
    let registry = default_registry();
    if json {
        let listing: Vec<Listing> = registry
            .iter()
            .map(|f| Listing {
                name: f.name(),
                arity: f.expected_args(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for function in registry.iter() {
            println!("{:<18} {}", function.name(), function.expected_args());
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        if let Err(e) = print_list(cli.json) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let name = cli.name.unwrap_or_default();
    let outcome = default_registry().call_text(&name, &cli.args);

    if cli.json {
        let report = Report {
            function: &name,
            args: &cli.args,
            result: outcome.as_ref().ok().cloned(),
            error: outcome.as_ref().err().map(ToString::to_string),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        if outcome.is_err() {
            std::process::exit(1);
        }
        return;
    }

    match outcome {
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  gssfn <NAME> [ARGS]...");
    eprintln!("  gssfn --list");
}
