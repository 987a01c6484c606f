use anyhow::Result;
use authz::Authorizer;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;
mod utils;

use commands::{authorize, config, serve};
use utils::settings::Settings;

/// Fyora Authorizer CLI - Bearer token authorizer for the Fyora API gateway
#[derive(Parser)]
#[command(name = "fyora-authz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Authorizer configuration file (YAML)
    #[arg(short, long, global = true, env = "AUTHORIZER_CONFIG")]
    config: Option<PathBuf>,

    /// Also write daily rotated log files to this directory
    #[arg(long, global = true, env = "AUTHORIZER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize a single gateway event and print the policy response
    Authorize {
        /// Event JSON file, or "-" for stdin
        #[arg(short, long, default_value = authorize::STDIN_SOURCE)]
        event: String,

        /// Exit with status 1 when the decision is Deny
        #[arg(long)]
        fail_on_deny: bool,

        /// Print the response on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Serve the authorizer over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3030, env = "AUTHORIZER_PORT")]
        port: u16,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration (token redacted)
    Show {
        /// Output format (json, yaml, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Pick up AUTHORIZER_* values from a local .env before parsing env-backed args
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let _log_guard = logging::init_logging(cli.verbose, cli.log_dir.as_deref())?;

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Commands::Authorize {
            event,
            fail_on_deny,
            compact,
        } => {
            let authorizer = Authorizer::new(settings.config)?;
            let decision = authorize::execute(&authorizer, &event, compact)?;
            if fail_on_deny && !decision.is_allowed() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Serve { host, port } => {
            let authorizer = Authorizer::new(settings.config)?;
            serve::execute(authorizer, host, port).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                config::show(&settings, format)?;
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
