//! MailShield Core - Main Entry Point
//!
//! Command line bridge for the mail add-on host: takes the open message (and
//! the clicked action, if any), runs it through the add-on, and prints the
//! resulting card or notice as JSON on stdout.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use mailshield_core::api::{ActionRequest, AddonService};
use mailshield_core::constants;
use mailshield_core::logic::config::AddonConfig;
use mailshield_core::logic::scoring::{MailMessage, ScoringClient};

#[derive(Parser, Debug)]
#[command(name = "mailshield", version, about = "Phishing verdict card for the mail add-on host")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Scoring API base URL (overrides MAILSHIELD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a message and print its card
    Scan(MessageArgs),
    /// Handle a button click and print the card or notice
    Action {
        /// Action name carried by the button
        #[arg(long)]
        name: String,
        /// Action parameter, repeatable
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Check that the scoring service is reachable
    Health,
}

#[derive(Args, Debug, Default)]
struct MessageArgs {
    /// JSON file with {subject, body, sender}; "-" reads stdin
    #[arg(long, conflicts_with_all = ["subject", "body", "sender"])]
    message: Option<PathBuf>,
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    body: Option<String>,
    #[arg(long)]
    sender: Option<String>,
}

impl MessageArgs {
    /// None when no message data was given at all
    fn load(&self) -> Result<Option<MailMessage>> {
        if let Some(path) = &self.message {
            return read_message(path).map(Some);
        }
        if self.subject.is_none() && self.body.is_none() && self.sender.is_none() {
            return Ok(None);
        }
        Ok(Some(MailMessage {
            subject: self.subject.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
            sender: self.sender.clone().unwrap_or_default(),
        }))
    }
}

fn read_message(path: &Path) -> Result<MailMessage> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read message from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message file {}", path.display()))?
    };

    serde_json::from_str(&content).context("Message is not valid JSON {subject, body, sender}")
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", raw))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AddonConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }

    log::info!("Starting {} v{}", config.app_name, constants::APP_VERSION);
    log::info!("   Scoring API: {}", config.api_base_url);

    let client = ScoringClient::new(&config);
    let service = AddonService::new(config, client);

    match &cli.command {
        Command::Scan(args) => {
            let message = args.load()?.unwrap_or_default();
            print_json(&service.on_message_open(&message), cli.pretty)
        }
        Command::Action { name, params, message } => {
            let request = ActionRequest {
                action_name: name.clone(),
                parameters: params.iter().cloned().collect::<BTreeMap<_, _>>(),
            };
            let message = message.load()?;
            print_json(&service.on_action(&request, message.as_ref()), cli.pretty)
        }
        Command::Health => {
            let health = service
                .check_health()
                .with_context(|| format!("Scoring service at {} is unreachable", service.config().api_base_url))?;
            print_json(&health, cli.pretty)?;
            if !health.is_ok() {
                bail!("Scoring service reported status {:?}", health.status);
            }
            Ok(())
        }
    }
}
