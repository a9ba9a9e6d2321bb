//! optchain command-line tool
//!
//! Resolves optional-chaining path expressions against JSON documents.
//!
//! Usage:
//!   optchain get 'weapon?.damage' --input hero.json --default 0
//!   optchain describe description --names run,negotiate,scare < skills.json
//!   optchain demo
//!
//! Logs go to stderr so stdout stays valid JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use optchain_access::Fallback;
use optchain_cli::{Query, demo, read_document};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "optchain")]
#[command(about = "Safe chained lookups over JSON documents")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a path expression and print the result as JSON
    Get {
        /// Path expression, e.g. `pet?.attack?.()` or `skills["run"].description`
        path: String,

        /// JSON document to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON value printed when nothing is found
        #[arg(short, long, default_value = "null")]
        default: String,

        /// Also replace false, 0 and "" with the default (like `||`)
        #[arg(long)]
        falsy: bool,
    },

    /// Resolve a path under each named child and print the hits as a JSON array
    Describe {
        /// Path expression applied under each name
        path: String,

        /// Comma-separated child names
        #[arg(short, long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// JSON document to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON value used for names that resolve to nothing
        #[arg(short, long, default_value = "null")]
        default: String,

        /// Also treat false, 0 and "" as misses
        #[arg(long)]
        falsy: bool,
    },

    /// Replay the adventurer walkthrough
    Demo {
        /// Print the steps as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn fallback(falsy: bool) -> Fallback {
    if falsy { Fallback::Falsy } else { Fallback::Nullish }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Get { path, input, default, falsy } => {
            let query = Query::parse(&path, &default, fallback(falsy))?;
            let document = read_document(input.as_deref())?;
            println!("{}", query.get(&document));
        }
        Command::Describe { path, names, input, default, falsy } => {
            let query = Query::parse(&path, &default, fallback(falsy))?;
            let document = read_document(input.as_deref())?;
            let found = query.describe(&document, &names);
            info!("{} of {} names resolved", found.len(), names.len());
            println!("{}", serde_json::to_string(&found)?);
        }
        Command::Demo { json } => {
            let steps = demo::walkthrough();
            if json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                for step in &steps {
                    println!("{:<48} => {}", step.expression, step.result);
                }
            }
        }
    }
    Ok(())
}
