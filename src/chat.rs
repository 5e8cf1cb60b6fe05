//! Chat-surface helpers: welcome greeting, quick-reply suggestions,
//! and activity title truncation.

use crate::models::{Language, UserProfile};

/// Synthetic transcript seed id — inserted exactly once when the chat
/// screen is first entered on an empty transcript.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// Build the assistant greeting for a fresh transcript.
///
/// Hindi sessions lead with the Hindi salutation and advertise the
/// pregnancy-guidance capability; English sessions advertise
/// personalized recommendations instead.
pub fn welcome_message(profile: &UserProfile, language: Language) -> String {
    let name = &profile.name;
    if language.is_bilingual() {
        format!(
            "नमस्ते {name}! मैं आपकी स्वास्थ्य सहायक हूं।\n\n\
             Hello {name}! I am your health assistant. I can help you with:\n\n\
             • Health questions and symptoms\n\
             • Medicine information and safety\n\
             • Pregnancy-related health guidance\n\
             • General wellness advice\n\n\
             Please feel free to ask me anything about your health!"
        )
    } else {
        format!(
            "Hello {name}! I am your health assistant. I can help you with:\n\n\
             • Health questions and symptoms\n\
             • Medicine information and safety\n\
             • General wellness advice\n\
             • Personalized health recommendations\n\n\
             Please feel free to ask me anything about your health!"
        )
    }
}

/// Quick-reply suggestions for an empty chat, keyed to pregnancy status.
pub fn quick_replies(profile: &UserProfile) -> Vec<&'static str> {
    if profile.is_pregnant() {
        vec![
            "I have a headache. What should I do?",
            "Which medicines are safe during pregnancy?",
            "I have morning sickness. Any remedies?",
            "What foods should I avoid?",
        ]
    } else {
        vec![
            "I have a fever. What should I do?",
            "How can I improve my sleep?",
            "What are healthy eating tips?",
            "I have a stomach ache. Help?",
        ]
    }
}

/// Build an activity title from a chat utterance: the first 30
/// characters plus an ellipsis, handling UTF-8 correctly.
pub fn activity_title(utterance: &str) -> String {
    let boundary = utterance
        .char_indices()
        .nth(30)
        .map(|(i, _)| i)
        .unwrap_or(utterance.len());
    format!("{}...", &utterance[..boundary])
}
