//! # errx CLI
//!
//! Builds a registry from a TOML configuration and resolves, exports or audits
//! error codes against it.

use clap::{Parser, Subcommand};
use errx::parsers::source_for_format;
use errx::{Error, Registry, RegistryConfig, RegistryError, RpcCode};
use std::error::Error as StdError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "errx", version, about = "Inspect errx message and status tables")]
struct Cli {
    /// Registry configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a code into HTTP/RPC status and a localized message
    Resolve {
        #[arg(long)]
        code: String,

        /// Message authored on the error itself
        #[arg(long, default_value = "")]
        message: String,

        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print every message registered for one language
    Export {
        #[arg(short, long)]
        lang: Option<String>,

        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// List codes missing a translation in any configured language
    Check,

    /// List the status table
    Codes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn StdError>> {
    let config = load_config(cli.config.as_deref())?;
    let registry = config.build()?;
    log::debug!("registry ready: {:?}", registry.statistics());

    match cli.command {
        Command::Resolve {
            code,
            message,
            lang,
        } => {
            let language = lang.unwrap_or_else(|| config.default_language.clone());
            println!("{}", render_resolution(&registry, &code, &message, &language));
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { lang, format } => {
            let language = lang.unwrap_or_else(|| config.default_language.clone());
            let source = source_for_format(&format).ok_or(RegistryError::UnknownFormat(format))?;
            let bytes = registry.export_messages(&language, source.as_ref())?;
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let (report, complete) = render_missing(&registry, &config);
            println!("{}", report);
            Ok(if complete {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Codes => {
            println!("{}", render_statuses(&registry));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<RegistryConfig, RegistryError> {
    match path {
        Some(path) => RegistryConfig::from_file(path),
        None => Ok(RegistryConfig::default()),
    }
}

fn render_resolution(registry: &Registry, code: &str, message: &str, language: &str) -> String {
    let err = Error::new(message).with_code(code);
    let err: &(dyn StdError + 'static) = &err;

    let (http_status, text) = registry.resolve_http(Some(err), language);
    let (rpc_status, _) = registry.resolve_rpc(Some(err), language);
    let rpc_name = RpcCode::from_u32(rpc_status)
        .map(|c| c.as_str())
        .unwrap_or("?");

    format!(
        "code:     {}\nlanguage: {}\nhttp:     {}\nrpc:      {} ({})\nmessage:  {}",
        code, language, http_status, rpc_status, rpc_name, text
    )
}

fn render_missing(registry: &Registry, config: &RegistryConfig) -> (String, bool) {
    let languages = config.languages();
    if languages.is_empty() {
        return ("No message files configured".to_string(), true);
    }

    let missing = registry.missing_translations(&languages);
    if missing.is_empty() {
        return (
            format!("All codes translated for: {}", languages.join(", ")),
            true,
        );
    }

    let lines: Vec<String> = missing
        .iter()
        .map(|(code, langs)| format!("{}: missing {}", code, langs.join(", ")))
        .collect();
    (lines.join("\n"), false)
}

fn render_statuses(registry: &Registry) -> String {
    registry
        .statuses()
        .iter()
        .map(|(code, status)| format!("{:<40} {}", code, status))
        .collect::<Vec<_>>()
        .join("\n")
}
