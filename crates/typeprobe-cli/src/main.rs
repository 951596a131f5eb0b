mod commands;
mod error;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(name = "typeprobe")]
#[command(about = "Detect and resolve the types of class fields from a metadata schema", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the resolved types of a class's fields
    Fields {
        /// Schema file describing the classes
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        /// Fully-qualified class name
        #[arg(value_name = "CLASS")]
        class: String,
        /// Only this field
        #[arg(short, long, value_name = "NAME")]
        field: Option<String>,
        /// Configuration file (defaults to typeprobe.toml next to the schema)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Resolve a single type token as the type of a field
    Resolve {
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        #[arg(value_name = "CLASS")]
        class: String,
        #[arg(value_name = "FIELD")]
        field: String,
        /// Raw type token, e.g. `Foo[]`
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Resolve every field in the schema and report failures
    Check {
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Fields { schema, class, field, config } => {
            commands::handle_fields(&schema, &class, field.as_deref(), config.as_deref())?
        }
        Command::Resolve { schema, class, field, token } => {
            commands::handle_resolve(&schema, &class, &field, &token)?
        }
        Command::Check { schema, config } => commands::handle_check(&schema, config.as_deref())?,
    }
    Ok(())
}
