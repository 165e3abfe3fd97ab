//! # Session Transcript
//!
//! File: cli/src/chat/transcript.rs
//!
//! In-memory history of the current session. Nothing here is persisted.
//!

/// One exchanged line. Agent-initiated lines (follow-up and random
/// questions) carry no user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub user_said: Option<String>,
    pub ai_said: String,
}

#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a user line and the reply it got.
    pub fn push_exchange(&mut self, user_said: &str, ai_said: &str) {
        self.entries.push(TranscriptEntry {
            user_said: Some(user_said.to_string()),
            ai_said: ai_said.to_string(),
        });
    }

    /// Records a line the agent said on its own.
    pub fn push_agent(&mut self, ai_said: &str) {
        self.entries.push(TranscriptEntry {
            user_said: None,
            ai_said: ai_said.to_string(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[TranscriptEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Most recent line the user typed, skipping agent-only entries.
    pub fn last_user_line(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| entry.user_said.as_deref())
    }
}
