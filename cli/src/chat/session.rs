//! # Conversation Loop
//!
//! File: cli/src/chat/session.rs
//!
//! ## Overview
//!
//! One `Session` is one run of the chatbot. Each turn reads a line, decides
//! whether it is a correction, a known subject or something new, answers,
//! asks the stored follow-up question if there is one, and now and then
//! changes the subject with a random question.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitInput -> Dispatch -> { DirectMatch | CorrectionFlow | TeachFlow }
//!            -> Respond -> MaybeFollowUp -> MaybeRandomQuestion -> AwaitInput
//! ```
//!
//! An exit word (or end of input) ends the session. Nested prompts for
//! teaching and correcting happen inside the turn; nothing runs in the
//! background.
//!
//! Every agent line goes to the console first and to the voice second, so a
//! broken or missing voice never hides text.
//!
use crate::chat::knowledge::{KnowledgeRecord, KnowledgeStore};
use crate::chat::mood::{detect_mood, Mood};
use crate::chat::question_bank::QuestionBank;
use crate::chat::questions::generate_question;
use crate::chat::topics::extract_topic;
use crate::chat::transcript::Transcript;
use crate::chat::voice::Voice;
use crate::common::ui::prompts::Console;
use crate::core::error::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Typing this (any case) corrects the previous answer.
pub const CORRECTION_PHRASE: &str = "that's wrong";

/// Any of these (any case) ends the session.
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

const USER_PROMPT: &str = "You: ";
const AI_PREFIX: &str = "AI: ";
const FOLLOW_UP_PREFIX: &str = "AI (question): ";
const RANDOM_PREFIX: &str = "AI (changing the subject): ";

const BANNER: &str = "Hollow started! Type 'exit' to quit.";
const GREETING: &str = "Hello! I'm Hollow! Let's talk.";
const FAREWELL: &str = "See you later! It was nice talking to you.";

const ASK_FOR_CORRECTION: &str = "Oh, I see. Please correct me!";
const NOTHING_TO_CORRECT: &str = "I'm not sure what to correct.";
const CORRECTION_LEARNED: &str = "Ok! I learned the correction. Thanks!";
const ASK_TO_TEACH: &str = "I don't know how to answer that. What should I say?";
const NO_RESPONSE_TYPED: &str = "I think you didn't type a response. No problem.";
const ASK_FOR_FOLLOW_UP: &str =
    "Great! And to make the conversation more fun, what question can I ask back?";
const TEACHING_LEARNED: &str = "Got it! I learned about that.";

/// Outcome of dispatching one user line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A stored record answered the input.
    Direct(KnowledgeRecord),
    /// The agent built the text itself (teaching and correction outcomes).
    /// `text` already carries the mood suffix.
    Generated {
        text: String,
        follow_up: Option<String>,
    },
}

impl Reply {
    fn generated(text: String) -> Self {
        Reply::Generated {
            text,
            follow_up: None,
        }
    }

    /// The line to say and the follow-up question to ask after it, if any.
    fn into_lines(self, mood: Mood) -> (String, Option<String>) {
        match self {
            Reply::Direct(record) => (mood.apply(&record.response), record.follow_up),
            Reply::Generated { text, follow_up } => (text, follow_up),
        }
    }
}

pub fn is_exit_word(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_WORDS.contains(&lowered.as_str())
}

pub fn is_correction_phrase(input: &str) -> bool {
    input.trim().to_lowercase() == CORRECTION_PHRASE
}

/// `None` for blank text, the trimmed text otherwise.
fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct Session<R, W, G> {
    store: KnowledgeStore,
    questions: QuestionBank,
    transcript: Transcript,
    console: Console<R, W>,
    voice: Option<Box<dyn Voice>>,
    rng: G,
    random_question_chance: f64,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(
        store: KnowledgeStore,
        questions: QuestionBank,
        console: Console<R, W>,
        voice: Option<Box<dyn Voice>>,
        rng: G,
    ) -> Self {
        Self {
            store,
            questions,
            transcript: Transcript::new(),
            console,
            voice,
            rng,
            random_question_chance: 0.15,
        }
    }

    /// Probability of a random question after each turn.
    pub fn with_random_question_chance(mut self, chance: f64) -> Self {
        self.random_question_chance = chance;
        self
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs turns until an exit word or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.console.print_line(BANNER)?;
        self.speak(GREETING);

        loop {
            let Some(line) = self.console.prompt(USER_PROMPT)? else {
                debug!("End of input reached.");
                break;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if is_exit_word(input) {
                break;
            }
            self.take_turn(input)?;
        }

        self.emit(AI_PREFIX, FAREWELL)
    }

    /// Handles one non-empty, non-exit line.
    pub fn take_turn(&mut self, input: &str) -> Result<()> {
        let mood = detect_mood(input);
        debug!("Input '{}' read as {} mood", input, mood);

        let reply = self.dispatch(input, mood)?;
        let (answer, follow_up) = reply.into_lines(mood);

        self.emit(AI_PREFIX, &answer)?;
        self.transcript.push_exchange(input, &answer);

        if let Some(question) = follow_up.as_deref().and_then(non_blank) {
            self.emit(FOLLOW_UP_PREFIX, &question)?;
            self.transcript.push_agent(&question);
        }

        self.maybe_ask_random_question()
    }

    fn dispatch(&mut self, input: &str, mood: Mood) -> Result<Reply> {
        if is_correction_phrase(input) {
            return self.correction_flow(mood);
        }
        if let Some(record) = self.store.find_match(input) {
            return Ok(Reply::Direct(record.clone()));
        }
        self.teach_flow(input, mood)
    }

    fn correction_flow(&mut self, mood: Mood) -> Result<Reply> {
        self.emit(AI_PREFIX, ASK_FOR_CORRECTION)?;

        let target = self
            .transcript
            .last_user_line()
            .map(str::to_string);
        let Some(subject) = target else {
            return Ok(Reply::generated(mood.apply(NOTHING_TO_CORRECT)));
        };

        // Both prompts are always shown so the next main input stays in step.
        let correction = self
            .console
            .prompt_or_empty(&format!("You (correcting '{}'): ", subject))?;
        let new_follow_up = self
            .console
            .prompt_or_empty("You (new follow-up question, optional): ")?;

        self.store
            .correct(&subject, correction.trim(), non_blank(&new_follow_up));
        Ok(Reply::generated(mood.apply(CORRECTION_LEARNED)))
    }

    fn teach_flow(&mut self, input: &str, mood: Mood) -> Result<Reply> {
        self.emit(AI_PREFIX, ASK_TO_TEACH)?;
        let response = self.console.prompt_or_empty("You (teach me): ")?;
        let Some(response) = non_blank(&response) else {
            return Ok(Reply::generated(mood.apply(NO_RESPONSE_TYPED)));
        };

        let follow_up = match extract_topic(input).or_else(|| extract_topic(&response)) {
            Some(topic) => {
                let suggestion = generate_question(&topic, &mut self.rng);
                self.emit(
                    AI_PREFIX,
                    &format!("Great! To keep going, I could ask: \"{}\"", suggestion),
                )?;
                let typed = self
                    .console
                    .prompt_or_empty("You (press Enter to accept or type another question): ")?;
                non_blank(&typed).or(Some(suggestion))
            }
            None => {
                self.emit(AI_PREFIX, ASK_FOR_FOLLOW_UP)?;
                let typed = self.console.prompt_or_empty("You (follow-up question): ")?;
                non_blank(&typed)
            }
        };

        self.store.teach(input, &response, follow_up);
        Ok(Reply::generated(mood.apply(TEACHING_LEARNED)))
    }

    fn maybe_ask_random_question(&mut self) -> Result<()> {
        if self.rng.gen::<f64>() >= self.random_question_chance {
            return Ok(());
        }
        match self.questions.pick(&self.transcript, &mut self.rng) {
            Some(question) => {
                self.emit(RANDOM_PREFIX, &question)?;
                self.transcript.push_agent(&question);
            }
            None => debug!("Question bank is empty; skipping random question."),
        }
        Ok(())
    }

    /// Prints an agent line, then speaks it.
    fn emit(&mut self, prefix: &str, text: &str) -> Result<()> {
        self.console.print_line(&format!("{}{}", prefix, text))?;
        self.speak(text);
        Ok(())
    }

    fn speak(&self, text: &str) {
        if let Some(voice) = &self.voice {
            if let Err(e) = voice.speak(text) {
                warn!("Could not speak: {:#}", e);
            }
        }
    }
}
