//! # Hollow Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Hollow chatbot.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Handing control to the conversation loop
//!
//! ## Examples
//!
//! ```bash
//! # Start talking
//! hollow
//!
//! # Show what the bot is doing on stderr
//! hollow -vv
//! ```
//!
//! Process flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the chat session
//! 4. Format and display any start-up error
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // The chatbot itself (knowledge, topics, moods, session loop)
mod common; // Shared utilities (fs, process, ui)
mod core; // Core infrastructure (errors, config, templating)

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "hollow",
    about = "Hollow: a tiny chatbot that learns what to say from you",
    long_about = "Talk to Hollow on the console. When it does not know an answer it asks you\n\
                  to teach it, and it remembers what you taught in a JSON file.\n\
                  Type 'exit', 'quit', 'bye' or 'goodbye' to leave.",
    version
)]
struct Cli {
    #[command(flatten)]
    chat: chat::ChatArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = chat::handle_chat(cli.chat) {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
