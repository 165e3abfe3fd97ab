//! # Random Question Picker
//!
//! File: cli/src/chat/question_bank.rs
//!
//! ## Overview
//!
//! When the agent changes the subject it draws from a question bank: a JSON
//! array of strings on disk. The file is re-read on every draw so edits take
//! effect mid-session. A missing or invalid file falls back to two built-in
//! questions.
//!
//! Questions the agent said within the last five transcript entries are
//! avoided (substring check on the agent's lines). If that leaves nothing,
//! the whole bank is used.
//!
use crate::chat::transcript::Transcript;
use crate::common::fs::io;
use crate::core::error::{HollowError, Result};
use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Used when the bank file is missing or unreadable.
pub const DEFAULT_QUESTIONS: [&str; 2] = ["Do you like history?", "What is your favorite food?"];

/// How many trailing transcript entries count as "recently asked".
const RECENT_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct QuestionBank {
    path: PathBuf,
}

impl QuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the bank file, or returns the defaults.
    pub fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            debug!(
                "Question bank {} not found, using defaults.",
                self.path.display()
            );
            return default_questions();
        }
        match read_questions(&self.path) {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Using default questions: {:#}", e);
                default_questions()
            }
        }
    }

    /// Picks a question not asked recently, if possible.
    ///
    /// Returns `None` only when the bank file holds an empty array.
    pub fn pick<R: Rng + ?Sized>(&self, transcript: &Transcript, rng: &mut R) -> Option<String> {
        let questions = self.load();
        let recent = transcript.recent(RECENT_WINDOW);
        let unasked: Vec<&String> = questions
            .iter()
            .filter(|question| {
                !recent
                    .iter()
                    .any(|entry| entry.ai_said.contains(question.as_str()))
            })
            .collect();

        if let Some(question) = unasked.choose(rng) {
            return Some((*question).clone());
        }
        questions.choose(rng).cloned()
    }
}

fn default_questions() -> Vec<String> {
    DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

fn read_questions(path: &Path) -> Result<Vec<String>> {
    let text = io::read_file_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| {
        anyhow!(HollowError::QuestionBank {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })
}
