// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AHEAD - reasoning generation service for a proactive health assistant.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;
mod shutdown;

use std::path::PathBuf;

use ahead_config::AheadConfig;
use ahead_reasoning::{ReasoningInput, build_prompt};
use ahead_security::REDACTED;
use clap::{Parser, Subcommand};

/// AHEAD - reasoning generation service for a proactive health assistant.
#[derive(Parser, Debug)]
#[command(name = "ahead", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP service (default).
    Serve,
    /// Validate configuration and print it with secrets redacted.
    Config,
    /// Print the prompt that would be sent for an action, without calling the upstream.
    Prompt {
        /// Action label, e.g. "order", "booking" or "reminder".
        #[arg(long)]
        action_type: String,
        /// Short description of the action.
        #[arg(long)]
        action_title: String,
        /// Sentence fragment describing the user.
        #[arg(long)]
        user_context: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            ahead_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("ahead: {e}");
                std::process::exit(1);
            }
        }
        Commands::Config => match render_config(&config) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("ahead: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        Commands::Prompt {
            action_type,
            action_title,
            user_context,
        } => {
            let input = ReasoningInput {
                action_type: Some(action_type),
                action_title: Some(action_title),
                user_context: Some(user_context),
            };
            match input.validate(config.limits.max_field_bytes) {
                Ok(request) => {
                    let prompt = build_prompt(&request);
                    println!("--- system ---\n{}\n\n--- user ---\n{}", prompt.system, prompt.user);
                }
                Err(e) => {
                    eprintln!("ahead: {e}");
                    std::process::exit(2);
                }
            }
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<AheadConfig, Vec<ahead_config::ConfigError>> {
    match path {
        Some(path) => ahead_config::load_and_validate_path(path),
        None => ahead_config::load_and_validate(),
    }
}

/// Serialize the effective configuration as TOML with the API key masked.
fn render_config(config: &AheadConfig) -> Result<String, toml::ser::Error> {
    let mut shown = config.clone();
    if shown.openai.api_key.is_some() {
        shown.openai.api_key = Some(REDACTED.to_string());
    }
    toml::to_string_pretty(&shown)
}
