//! `ft` CLI — coerce JSON scalars and sanitize text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Coerce one token and print its canonical literal
//! ft scalar --to nint '"  "'          # null
//! ft scalar --to bool -1.23           # true
//! echo '123.456' | ft scalar --to string
//!
//! # Coerce selected fields of a JSON object (stdin -> stdout)
//! echo '{"id":7,"count":""}' | ft object --field id=string --field count=nint
//!
//! # Strip control characters from text
//! ft clean -i notes.txt
//! ```
//!
//! Set `RUST_LOG=ft_core=trace` to see how each token is probed.

mod object;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ft_core::Target;
use object::RawObject;
use serde_json::value::RawValue;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ft", version, about = "Lenient JSON scalar coercion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a single JSON scalar token and print its canonical literal
    Scalar {
        /// Target type: string, int, float, bool, nstring, nint, nfloat or nbool
        #[arg(long)]
        to: Target,
        /// JSON token (reads from stdin if omitted; empty input is a missing field)
        #[arg(allow_hyphen_values = true)]
        token: Option<String>,
    },
    /// Coerce named fields of a JSON object, leaving the rest untouched
    Object {
        /// Field to coerce, as NAME=TARGET (repeatable)
        #[arg(long = "field", value_parser = parse_field, required = true)]
        fields: Vec<(String, Target)>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Remove non-graphic characters, keeping newlines and tabs
    Clean {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scalar { to, token } => {
            let token = match token {
                Some(token) => token,
                None => read_input(None)?,
            };
            let raw = Some(token.trim()).filter(|t| !t.is_empty());
            let literal = ft_core::coerce(raw, to)
                .with_context(|| format!("Failed to coerce token to {}", to))?;
            println!("{}", literal);
        }
        Commands::Object {
            fields,
            input,
            output,
        } => {
            let json = read_input(input.as_deref())?;
            let coerced = coerce_object(&json, &fields)?;
            write_output(output.as_deref(), &coerced)?;
        }
        Commands::Clean { input } => {
            let text = read_input(input.as_deref())?;
            print!("{}", ft_core::clean(&text));
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Parse a `NAME=TARGET` field argument.
fn parse_field(arg: &str) -> std::result::Result<(String, Target), String> {
    let (name, target) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=TARGET, got '{}'", arg))?;
    if name.is_empty() {
        return Err(format!("missing field name in '{}'", arg));
    }
    let target = target.parse::<Target>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), target))
}

/// Coerce each named field of the object in `json`. Missing fields are
/// appended with their null/zero encoding.
fn coerce_object(json: &str, fields: &[(String, Target)]) -> Result<String> {
    let mut object: RawObject =
        serde_json::from_str(json).context("Input is not a JSON object")?;

    for (name, target) in fields {
        let raw = object.get(name).map(RawValue::get);
        let literal = ft_core::coerce(raw, *target)
            .with_context(|| format!("Failed to coerce field '{}' to {}", name, target))?;
        tracing::debug!(field = %name, %target, %literal, "coerced field");
        let value = RawValue::from_string(literal)?;
        object.set(name, value);
    }

    Ok(serde_json::to_string(&object)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
