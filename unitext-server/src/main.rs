//! unitext - natural-language unit converter
//!
//! One-shot mode:
//!   unitext two pints and a half cup in floz
//!
//! Server mode:
//!   unitext -ss [PORT]   (GET /?q=<expression>)

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use unitext::Converter;

mod cli;
mod server;

const NO_EXPRESSION: &str = "No expression provided. Use -h or --help for usage information.";

/// Evaluates a natural language expression of units and converts them.
#[derive(Parser, Debug)]
#[command(name = "unitext", version, about, long_about = None)]
struct Args {
    /// Start the web API server, optionally on PORT (default 8080)
    #[arg(
        short = 's',
        long = "start-server",
        visible_alias = "ss",
        value_name = "PORT",
        num_args = 0..=1,
        default_missing_value = "8080",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    start_server: Option<u16>,

    /// Address the server listens on
    #[arg(long, env = "UNITEXT_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Print a table of example expressions and their results
    #[arg(long)]
    examples: bool,

    /// Expression to convert, e.g. "1/2 gallon + 1/4 pint in cups"
    #[arg(value_name = "EXPRESSION", trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

/// Spell the single-dash `-ss` flag as `--start-server`, which clap would
/// otherwise read as `-s` with the value "s". Only options ahead of the
/// expression are rewritten.
fn legacy_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut in_options = true;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i > 0 && in_options && !arg.starts_with('-') {
                in_options = false;
            }
            if in_options && arg == "-ss" {
                "--start-server".to_string()
            } else {
                arg
            }
        })
        .collect()
}

/// Log to stderr, honouring RUST_LOG
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse_from(legacy_args(std::env::args()));
    let converter = Converter::new();

    if let Some(port) = args.start_server {
        init_tracing("info");
        return match server::run(converter, &args.bind, port).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(bind = %args.bind, port, "failed to start server: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    init_tracing("warn");

    if args.examples {
        print!("{}", cli::examples_table(&converter));
        return ExitCode::SUCCESS;
    }

    let expression = args.expression.join(" ");
    if expression.trim().is_empty() {
        println!("{}", NO_EXPRESSION);
        return ExitCode::FAILURE;
    }

    match converter.process(&expression) {
        Ok(measurement) => {
            println!("{}", cli::render(&measurement));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let argv = argv.iter().map(|a| a.to_string());
        Args::try_parse_from(legacy_args(argv)).unwrap()
    }

    #[test]
    fn test_start_server_spellings() {
        assert_eq!(parse(&["unitext", "-ss"]).start_server, Some(8080));
        assert_eq!(parse(&["unitext", "-ss", "7000"]).start_server, Some(7000));
        assert_eq!(parse(&["unitext", "--start-server", "7000"]).start_server, Some(7000));
        assert_eq!(parse(&["unitext", "--ss"]).start_server, Some(8080));
        assert_eq!(parse(&["unitext", "-s", "9000"]).start_server, Some(9000));
    }

    #[test]
    fn test_expression_words() {
        let args = parse(&["unitext", "500ml", "-", ".25L"]);
        assert_eq!(args.start_server, None);
        assert_eq!(args.expression, vec!["500ml", "-", ".25L"]);
    }

    #[test]
    fn test_ss_inside_expression_untouched() {
        let args = parse(&["unitext", "2", "-ss"]);
        assert_eq!(args.start_server, None);
        assert_eq!(args.expression, vec!["2", "-ss"]);
    }

    #[test]
    fn test_bad_port_rejected() {
        let argv = ["unitext", "-ss", "0"].map(String::from);
        assert!(Args::try_parse_from(legacy_args(argv)).is_err());
    }
}
