//! # Hollow Chat
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The interactive chatbot: a knowledge base the user teaches, topic
//! extraction and follow-up question generation, a mood-dependent reply
//! suffix, and a loop that ties them to the console and optional speech.
//!
//! ## Architecture
//!
//! - `knowledge.rs`: learned records, substring lookup, JSON persistence
//! - `topics.rs`: ordered topic patterns
//! - `questions.rs`: follow-up question templates
//! - `mood.rs`: mood detection and reply suffixes
//! - `question_bank.rs`: random questions, avoiding recent repeats
//! - `transcript.rs`: in-memory session history
//! - `voice.rs`: optional text-to-speech backend
//! - `session.rs`: the turn-by-turn conversation loop
//!
//! `handle_chat` is the entry point: it resolves configuration, decides
//! once whether speech is available, and runs a session on stdin/stdout.
//!
//! ## Examples
//!
//! ```bash
//! # Talk using the default memoria.json in the current directory
//! hollow
//!
//! # Keep knowledge somewhere else, no speech, reproducible randomness
//! hollow --memory ~/notes/brain.json --mute --seed 7
//! ```
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::common::ui::prompts::Console;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

pub mod knowledge;
pub mod mood;
pub mod question_bank;
pub mod questions;
pub mod session;
pub mod topics;
pub mod transcript;
pub mod voice;

use knowledge::KnowledgeStore;
use question_bank::QuestionBank;
use session::Session;

/// # Chat Arguments (`ChatArgs`)
///
/// Optional overrides for a single run. With none of them the configuration
/// files and built-in defaults decide everything.
#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// Knowledge file to read and update.
    #[arg(long = "memory", env = "HOLLOW_MEMORY_FILE", value_name = "PATH")]
    pub memory: Option<PathBuf>,

    /// JSON array of questions used to change the subject.
    #[arg(long = "questions", env = "HOLLOW_QUESTIONS_FILE", value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Never speak, even if a speech program is available.
    #[arg(long)]
    pub mute: bool,

    /// Seed for the random generator, for reproducible sessions.
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, args: &ChatArgs) -> Config {
    if let Some(memory) = &args.memory {
        config.storage.knowledge_file = memory.to_string_lossy().into_owned();
    }
    if let Some(questions) = &args.questions {
        config.storage.questions_file = questions.to_string_lossy().into_owned();
    }
    if args.mute {
        config.voice.enabled = false;
    }
    config
}

/// # Handle Chat (`handle_chat`)
///
/// Loads configuration, resolves the voice backend once, and runs the
/// conversation on the process's stdin and stdout until the user leaves.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Starting chat with args: {:?}", args);
    let config = apply_overrides(config::load_config()?, &args);
    config::validate_config(&config)?;
    info!("Effective chat config: {:?}", config);

    let voice = voice::resolve_voice(&config.voice, args.mute);
    let store = KnowledgeStore::load(&config.storage.knowledge_file);
    let questions = QuestionBank::new(&config.storage.questions_file);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut session = Session::new(store, questions, console, voice, rng)
        .with_random_question_chance(config.conversation.random_question_chance);
    session.run()?;

    info!(
        "Session ended after {} transcript lines; {} records in {}",
        session.transcript().entries().len(),
        session.store().base().records().len(),
        session.store().path().display()
    );
    Ok(())
}
