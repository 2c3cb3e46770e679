//! Telegram CLI - call the Bot API from the command line

mod commands;
mod error;
mod settings;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use serde_json::Value;
use telegram_lib::{BotClient, PayloadLogging, TelegramError};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::error::CliError;
use crate::settings::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "telegram", version)]
#[command(about = "Call the Telegram Bot API from the command line", long_about = None)]
struct Cli {
    /// Bot token [env: TELEGRAM_BOT_TOKEN]
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds [env: TIMEOUT] [default: 5]
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<f64>,

    /// Bot API host, e.g. a local Bot API server [env: TELEGRAM_API_URL]
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<Url>,

    /// Append logs to this file instead of stderr [env: LOG_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log only method names, not parameters or response bodies
    #[arg(long, global = true)]
    method_only_logs: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a text message
    Send {
        /// Target chat (negative for groups and channels)
        #[arg(value_name = "CHAT_ID", allow_negative_numbers = true)]
        chat_id: i64,

        /// Message text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Text formatting: HTML, Markdown or MarkdownV2
        #[arg(long, value_name = "MODE")]
        parse_mode: Option<String>,

        /// Extra API field (repeatable); the value is JSON or a plain string
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = commands::parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Fetch pending updates
    Updates {
        /// Identifier of the first update to return
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Maximum number of updates (1-100)
        #[arg(long)]
        limit: Option<u32>,

        /// Extra API field (repeatable); the value is JSON or a plain string
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = commands::parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Delete a message
    Delete {
        #[arg(value_name = "CHAT_ID", allow_negative_numbers = true)]
        chat_id: i64,

        #[arg(value_name = "MESSAGE_ID")]
        message_id: i64,
    },

    /// Register the bot's webhook URL
    Webhook {
        /// HTTPS URL that will receive updates
        #[arg(value_name = "URL")]
        url: String,

        /// Extra API field (repeatable); the value is JSON or a plain string
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = commands::parse_option)]
        options: Vec<(String, Value)>,
    },
}

/// Initialize tracing subscriber based on verbosity, output format and
/// destination.
///
/// Logging to a file defaults to INFO so every call is recorded; stderr
/// defaults to WARN.
fn init_tracing(verbose: u8, json: bool, log_file: Option<&Path>) -> Result<(), CliError> {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match (verbose, log_file.is_some()) {
            (0, false) => "warn".to_string(),
            (0, true) | (1, _) => "warn,telegram_lib=info".to_string(),
            (2, _) => "info,telegram_lib=debug".to_string(),
            _ => "debug,telegram_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let writer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let layer = if json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(log_file.is_none())
            .with_file(verbose >= 3)
            .with_line_number(verbose >= 3)
            .with_writer(writer)
            .compact()
            .boxed()
    };

    tracing_subscriber::registry().with(filter).with(layer).init();
    Ok(())
}

fn build_client(settings: Settings, payload_logging: PayloadLogging) -> Result<BotClient, CliError> {
    let mut builder = BotClient::builder(settings.token)
        .timeout(settings.timeout)
        .payload_logging(payload_logging);
    if let Some(url) = settings.api_url {
        builder = builder.base_url(url);
    }
    Ok(builder.build()?)
}

async fn run(command: Commands, client: &BotClient) -> Result<String, CliError> {
    match command {
        Commands::Send {
            chat_id,
            text,
            parse_mode,
            options,
        } => commands::send(client, chat_id, &text, parse_mode, options).await,
        Commands::Updates {
            offset,
            limit,
            options,
        } => commands::updates(client, offset, limit, options).await,
        Commands::Delete {
            chat_id,
            message_id,
        } => commands::delete(client, chat_id, message_id).await,
        Commands::Webhook { url, options } => commands::webhook(client, &url, options).await,
    }
}

fn report(err: &CliError) {
    match err {
        CliError::Telegram(TelegramError::Api { description, .. }) => {
            eprintln!("Telegram API error: {description}");
        }
        other => eprintln!("Error: {other}"),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();

    let overrides = Overrides {
        token: cli.token.take(),
        timeout: cli.timeout,
        api_url: cli.api_url.take(),
        log_file: cli.log_file.take(),
    };
    let settings = match Settings::resolve(overrides, |key| std::env::var(key).ok()) {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            std::process::exit(2);
        }
    };

    if let Err(e) = init_tracing(cli.log_verbosity, cli.json, settings.log_file.as_deref()) {
        report(&e);
        std::process::exit(2);
    }

    tracing::debug!("telegram CLI starting");

    let payload_logging = if cli.method_only_logs {
        PayloadLogging::MethodOnly
    } else {
        PayloadLogging::Full
    };
    // Stderr already carries the report; the log file needs its own record.
    let logs_to_file = settings.log_file.is_some();

    let client = match build_client(settings, payload_logging) {
        Ok(client) => client,
        Err(e) => {
            report(&e);
            std::process::exit(2);
        }
    };

    match run(cli.command, &client).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if logs_to_file {
                tracing::error!(error = %e, "command failed");
            }
            report(&e);
            std::process::exit(1);
        }
    }
}
