//! # Voice Output
//!
//! File: cli/src/chat/voice.rs
//!
//! ## Overview
//!
//! Speech is an optional capability. `resolve_voice` runs once at start-up
//! and either returns a backend or `None`; the conversation loop receives the
//! result and never probes for speech support again.
//!
//! The built-in backend hands each line to an external text-to-speech
//! program (`espeak-ng`, `espeak`, `spd-say` or `say`, or whatever the
//! configuration names) and waits for it to finish.
//!
use crate::common::process;
use crate::core::config::VoiceConfig;
use crate::core::error::{HollowError, Result};
use anyhow::anyhow;
use tracing::{debug, info};

/// Speech programs tried, in order, when none is configured.
const SPEECH_PROGRAMS: &[&str] = &["espeak-ng", "espeak", "spd-say", "say"];

/// Something that can say a line out loud.
pub trait Voice {
    /// Speaks `text`, blocking until playback ends.
    fn speak(&self, text: &str) -> Result<()>;
}

/// Speaks through an external program: `<program> <args...> <text>`.
#[derive(Debug, Clone)]
pub struct CommandVoice {
    program: String,
    args: Vec<String>,
}

impl CommandVoice {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Voice for CommandVoice {
    fn speak(&self, text: &str) -> Result<()> {
        let mut args = self.args.clone();
        args.push(text.to_string());
        process::run_command_blocking(&self.program, &args).map_err(|e| {
            anyhow!(HollowError::Voice {
                program: self.program.clone(),
                reason: format!("{:#}", e),
            })
        })
    }
}

/// Decides, once, whether this session can speak.
pub fn resolve_voice(config: &VoiceConfig, muted: bool) -> Option<Box<dyn Voice>> {
    if muted || !config.enabled {
        info!("Voice output disabled; running text-only.");
        return None;
    }
    let program = match &config.command {
        Some(command) if which::which(command).is_ok() => command.clone(),
        Some(command) => {
            info!(
                "Configured speech program '{}' not found; running text-only.",
                command
            );
            return None;
        }
        None => match SPEECH_PROGRAMS
            .iter()
            .find(|candidate| which::which(candidate).is_ok())
        {
            Some(found) => found.to_string(),
            None => {
                info!("No speech program found on PATH; running text-only.");
                return None;
            }
        },
    };
    debug!("Using speech program '{}' with args {:?}", program, config.args);
    Some(Box::new(CommandVoice::new(program, config.args.clone())))
}
