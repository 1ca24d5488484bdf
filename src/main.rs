//! mediactl CLI.
//!
//! Validates control documents from the command line, for poking at what
//! the server will and will not accept.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mediactl::{parse, JsonValue};

#[derive(Parser)]
#[command(name = "mediactl")]
#[command(about = "Control-plane document tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a control document and report its structure
    Check {
        /// Path to the document, or `-` for stdin
        path: PathBuf,
    },
}

fn read_input(path: &PathBuf) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Array(elements) => {
            format!("array of {} elements", elements.len())
        }
        JsonValue::Object(members) => {
            format!("object with {} members", members.len())
        }
        other => other.type_name().to_string(),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => {
            let input = match read_input(&path) {
                Ok(input) => input,
                Err(err) => {
                    eprintln!("error: cannot read {}: {}", path.display(), err);
                    return ExitCode::FAILURE;
                }
            };

            match parse(&input) {
                Ok(root) => {
                    println!("valid: {}", describe(&root));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("invalid: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
