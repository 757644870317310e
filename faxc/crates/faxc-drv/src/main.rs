//! `schemec` CLI - reads a Scheme source file (or stdin) and prints its
//! tokens, datum tree, or AST.
//!
//! This is a smoke-test driver for the front-end crates, not the
//! fixture-comparison test harness described by the front-end's own
//! external-interfaces contract.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use schemec_drv::config::{Config, OutputFormat};
use schemec_drv::error::{DrvError, Result};
use schemec_drv::{dump_tokens, parse, prettyprint, tokenize};

/// Tokenizes, reads, or parses a Scheme source file and prints the result.
#[derive(Parser, Debug)]
#[command(name = "schemec")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scheme front-end driver", long_about = None)]
struct Cli {
    /// Source file to read; omit to read from stdin.
    input: Option<PathBuf>,

    /// Output representation: tokens, datum, or ast.
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Path to a configuration file.
    #[arg(short, long, env = "SCHEMEC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, env = "SCHEMEC_VERBOSE")]
    verbose: bool,

    /// Disable color output.
    #[arg(long, env = "SCHEMEC_NO_COLOR")]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum CliFormat {
    Tokens,
    Datum,
    Ast,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = match format {
            CliFormat::Tokens => OutputFormat::Tokens,
            CliFormat::Datum => OutputFormat::Datum,
            CliFormat::Ast => OutputFormat::Ast,
        };
    }

    let source = read_source(cli.input.as_deref())?;
    let rendered = render(&source, &config)?;
    println!("{rendered}");
    Ok(())
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    Config::load(config_path)
}

fn read_source(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(DrvError::Io)?;
            Ok(buf)
        }
    }
}

fn render(source: &str, config: &Config) -> Result<String> {
    let tokens = tokenize(source)?;
    match config.format {
        OutputFormat::Tokens => Ok(dump_tokens(&tokens)),
        OutputFormat::Datum => {
            let datum = schemec_drv::read_one_datum(&tokens)?;
            Ok(prettyprint(&datum))
        }
        OutputFormat::Ast => {
            let items = parse(&tokens)?;
            Ok(format!("{items:#?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_input_and_format() {
        let cli = Cli::parse_from(["schemec", "in.scm", "--format", "tokens"]);
        assert_eq!(cli.input, Some(PathBuf::from("in.scm")));
        assert!(matches!(cli.format, Some(CliFormat::Tokens)));
    }

    #[test]
    fn cli_parses_no_args_as_stdin() {
        let cli = Cli::parse_from(["schemec"]);
        assert!(cli.input.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn cli_parses_verbose_and_no_color() {
        let cli = Cli::parse_from(["schemec", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn render_tokens_format() {
        let config = Config {
            format: OutputFormat::Tokens,
            lowercase_identifiers: false,
        };
        let out = render("(+ 1 2)", &config).unwrap();
        assert!(out.contains("(punctuator \"(\")"));
    }

    #[test]
    fn render_datum_format() {
        let config = Config {
            format: OutputFormat::Datum,
            lowercase_identifiers: false,
        };
        let out = render("(+ 1 2)", &config).unwrap();
        assert_eq!(out, "(+ 1 2)");
    }

    #[test]
    fn render_ast_format_reports_parse_error() {
        let config = Config {
            format: OutputFormat::Ast,
            lowercase_identifiers: false,
        };
        assert!(render("(+ 1 2))", &config).is_err());
    }
}
