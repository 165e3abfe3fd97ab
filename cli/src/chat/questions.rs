//! # Follow-up Question Generation
//!
//! File: cli/src/chat/questions.rs
//!
//! Turns an extracted topic into a follow-up question by rendering one of a
//! few templates, chosen uniformly at random. The topic always appears
//! verbatim in the result.
//!
use crate::core::templating;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::warn;

const QUESTION_TEMPLATES: &[&str] = &[
    "How cool! What else can you tell me about {{ topic }}?",
    "Interesting. Why are you interested in {{ topic }}?",
    "Hmm, {{ topic }}... Tell me a fun fact about it!",
    "What is your favorite part when it comes to {{ topic }}?",
    "I see. And since when have you liked {{ topic }}?",
    "Tell me more about {{ topic }}?",
];

/// Renders a random follow-up question about `topic`.
pub fn generate_question<R: Rng + ?Sized>(topic: &str, rng: &mut R) -> String {
    let template = QUESTION_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or("Tell me more about {{ topic }}?");

    let mut context = HashMap::new();
    context.insert("topic".to_string(), topic.to_string());
    match templating::render_template(template, &context) {
        Ok(question) => question,
        Err(e) => {
            warn!("Falling back to the plain follow-up question: {:#}", e);
            format!("Tell me more about {}?", topic)
        }
    }
}
