//! Paradise Nursery CLI - Catalog and cart tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! pn-cli catalog
//!
//! # List one category as JSON
//! pn-cli catalog --category flowering-plants --json
//!
//! # Replay cart actions and print the result
//! pn-cli cart add:1 add:3 increase:3 decrease:1
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product catalog grouped by category
//! - `cart` - Run cart steps through the reducer and print totals

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use paradise_nursery_core::{Catalog, Category};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::cart::Step;

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(author, version, about = "Paradise Nursery CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog {
        /// Only show one category (e.g. `succulents`, `indoor-plants`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Replay cart steps such as `add:1 increase:1 remove:1`
    Cart {
        /// Steps to apply, in order
        #[arg(required = true, value_name = "VERB:ID")]
        steps: Vec<Step>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => emit(&output),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let catalog = Catalog::paradise_nursery();

    let output = match cli.command {
        Commands::Catalog { category, json } => {
            if json {
                commands::catalog::render_json(&catalog, category)?
            } else {
                commands::catalog::render_text(&catalog, category)
            }
        }
        Commands::Cart { steps, json } => {
            let cart = commands::cart::replay(&catalog, &steps)?;
            if json {
                commands::cart::render_json(&cart)?
            } else {
                commands::cart::render_text(&cart)
            }
        }
    };

    Ok(output)
}

#[allow(clippy::print_stdout)]
fn emit(output: &str) {
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_cart_steps() {
        let cli = Cli::try_parse_from(["pn-cli", "cart", "add:1", "inc:1", "--json"]);
        assert!(matches!(
            cli,
            Ok(Cli {
                command: Commands::Cart { ref steps, json: true }
            }) if steps.len() == 2
        ));
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(Cli::try_parse_from(["pn-cli", "cart", "add"]).is_err());
        assert!(Cli::try_parse_from(["pn-cli", "catalog", "--category", "cacti"]).is_err());
    }
}
