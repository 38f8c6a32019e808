//! `gcl` CLI — parse, pretty-print, and convert GCL files.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print a file to stdout
//! gcl config.gcl
//!
//! # Read from stdin
//! cat config.gcl | gcl -
//!
//! # Convert to JSON (use '-' for stdout)
//! gcl config.gcl --json-out config.json
//! gcl config.gcl --json-out -
//! ```
//!
//! Parse failures are rendered as a source-annotated report on stderr.

use std::io::{self, Read};
use std::process;

use clap::Parser;
use gcl_format::format_value_default;
use gcl_tree::{GclError, Value};

const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_IO_ERROR: i32 = 2;

#[derive(Parser)]
#[command(
    name = "gcl",
    version,
    about = "Command-line tool for GCL configuration files"
)]
struct Cli {
    /// Input file path (or "-" for stdin)
    input: String,

    /// Output to file instead of stdout (GCL text)
    #[arg(short, long)]
    output: Option<String>,

    /// Output as JSON to a file (or "-" for stdout)
    #[arg(long)]
    json_out: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(error) => {
            match &error {
                CliError::Parse {
                    error,
                    source,
                    filename,
                } => {
                    gcl_tree::write_report(error, filename, source, io::stderr());
                }
                CliError::Io(e) => {
                    eprintln!("error: {e}");
                }
            }
            process::exit(error.exit_code());
        }
    }
}

enum CliError {
    Io(io::Error),
    Parse {
        error: GclError,
        source: String,
        filename: String,
    },
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IO_ERROR,
            CliError::Parse { .. } => EXIT_SYNTAX_ERROR,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = read_input(&cli.input)?;
    let filename = if cli.input == "-" {
        "<stdin>".to_string()
    } else {
        cli.input.clone()
    };

    let value = gcl_tree::parse(&source).map_err(|error| CliError::Parse {
        error,
        source: source.clone(),
        filename,
    })?;

    if let Some(json_path) = &cli.json_out {
        let json = value_to_json(&value);
        let output = serde_json::to_string_pretty(&json).map_err(io::Error::other)?;
        write_output(json_path, &output)?;
    } else {
        let output = format_value_default(&value);
        match &cli.output {
            Some(path) => write_output(path, &output)?,
            None => println!("{output}"),
        }
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String, io::Error> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn write_output(path: &str, content: &str) -> Result<(), io::Error> {
    if path == "-" {
        println!("{content}");
        Ok(())
    } else {
        std::fs::write(path, content)
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        // JSON has no undefined; the parser never produces one anyway.
        Value::Undefined | Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Dict(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), value_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_json_scalars() {
        assert_eq!(value_to_json(&Value::Null), serde_json::Value::Null);
        assert_eq!(value_to_json(&Value::Undefined), serde_json::Value::Null);
        assert_eq!(value_to_json(&Value::Bool(true)), serde_json::json!(true));
        assert_eq!(value_to_json(&Value::Int(-7)), serde_json::json!(-7));
        assert_eq!(
            value_to_json(&Value::from("text")),
            serde_json::json!("text")
        );
    }

    #[test]
    fn test_value_to_json_containers() {
        let value = gcl_tree::parse(r#"{b: [1, true], a: "x"}"#).unwrap();
        let json = value_to_json(&value);
        assert_eq!(json, serde_json::json!({"a": "x", "b": [1, true]}));
    }
}
