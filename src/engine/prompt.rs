//! Context prompts sent to the remote agents.
//!
//! Each prompt embeds the full profile and the language preference so
//! the agent can answer without any server-side session.

use crate::models::{Language, ScanResult, UserProfile};

/// Fixed extraction prompt for the medicine scanner.
pub const SCAN_PROMPT: &str = "Please analyze this medicine image and extract the following \
     information: medicine name, generic name, category, uses, pregnancy warnings, side effects, \
     and contraindications. Provide detailed and accurate information.";

fn language_preference(language: Language) -> &'static str {
    if language.is_bilingual() {
        "Please respond in Hindi and English (bilingual)"
    } else {
        "Please respond in English"
    }
}

fn pregnancy_status(profile: &UserProfile) -> &'static str {
    if profile.is_pregnant() {
        "Yes, pregnant"
    } else {
        "Not pregnant"
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "None"
    } else {
        value
    }
}

/// Context for a typed chat question.
pub fn chat_context(profile: &UserProfile, language: Language, question: &str) -> String {
    format!(
        "User Profile: Name: {}, Age: {} years, Pregnancy Status: {}, Known Allergies: {}, \
         Medical Conditions: {}. {}. User Question: {}",
        profile.name,
        profile.age,
        pregnancy_status(profile),
        or_none(&profile.allergies),
        or_none(&profile.conditions),
        language_preference(language),
        question,
    )
}

/// Context for the health check that follows a successful scan. Embeds
/// the scanned medicine's identity and its pregnancy warning when one
/// was extracted.
pub fn scan_health_context(
    profile: &UserProfile,
    language: Language,
    scan: &ScanResult,
) -> String {
    let generic = if scan.generic_name.is_empty() {
        "generic name not available"
    } else {
        scan.generic_name.as_str()
    };
    let warning = if scan.pregnancy_warning.is_empty() {
        String::new()
    } else {
        format!("Pregnancy Warning: {}", scan.pregnancy_warning)
    };

    format!(
        "User Profile: Name: {}, Age: {} years, Pregnancy Status: {}, Allergies: {}, \
         Medical Conditions: {}. {}. I scanned this medicine: {} ({}). {} Is this medicine safe \
         for me to take? Please provide personalized guidance based on my profile.",
        profile.name,
        profile.age,
        pregnancy_status(profile),
        or_none(&profile.allergies),
        or_none(&profile.conditions),
        language_preference(language),
        scan.medicine_name,
        generic,
        warning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PregnancyStatus;

    fn asha() -> UserProfile {
        UserProfile {
            name: "Asha".into(),
            age: "28".into(),
            pregnancy: PregnancyStatus::Yes,
            allergies: "Penicillin".into(),
            conditions: String::new(),
        }
    }

    #[test]
    fn chat_context_embeds_full_profile() {
        let context = chat_context(&asha(), Language::Hindi, "I have a headache");
        assert!(context.starts_with("User Profile: Name: Asha, Age: 28 years"));
        assert!(context.contains("Pregnancy Status: Yes, pregnant"));
        assert!(context.contains("Known Allergies: Penicillin"));
        assert!(context.contains("Medical Conditions: None"));
        assert!(context.contains("Please respond in Hindi and English (bilingual)"));
        assert!(context.ends_with("User Question: I have a headache"));
    }

    #[test]
    fn chat_context_for_english_non_pregnant() {
        let profile = UserProfile {
            name: "Ravi".into(),
            age: "35".into(),
            pregnancy: PregnancyStatus::No,
            allergies: String::new(),
            conditions: "Diabetes".into(),
        };
        let context = chat_context(&profile, Language::English, "sleep tips?");
        assert!(context.contains("Pregnancy Status: Not pregnant"));
        assert!(context.contains("Known Allergies: None"));
        assert!(context.contains("Medical Conditions: Diabetes"));
        assert!(context.contains("Please respond in English."));
    }

    #[test]
    fn scan_context_embeds_medicine_identity() {
        let scan = ScanResult {
            medicine_name: "Crocin 650".into(),
            generic_name: "Paracetamol".into(),
            pregnancy_warning: "Consult your doctor before use during pregnancy".into(),
            ..Default::default()
        };
        let context = scan_health_context(&asha(), Language::Hindi, &scan);
        assert!(context.contains("I scanned this medicine: Crocin 650 (Paracetamol)."));
        assert!(context
            .contains("Pregnancy Warning: Consult your doctor before use during pregnancy"));
        assert!(context.contains("Is this medicine safe for me to take?"));
    }

    #[test]
    fn scan_context_placeholders_for_missing_fields() {
        let scan = ScanResult {
            medicine_name: "Crocin 650".into(),
            ..Default::default()
        };
        let context = scan_health_context(&asha(), Language::English, &scan);
        assert!(context.contains("(generic name not available)"));
        assert!(!context.contains("Pregnancy Warning:"));
    }

    #[test]
    fn scan_prompt_names_every_extraction_field() {
        for field in [
            "medicine name",
            "generic name",
            "category",
            "uses",
            "pregnancy warnings",
            "side effects",
            "contraindications",
        ] {
            assert!(SCAN_PROMPT.contains(field), "missing field: {field}");
        }
    }
}
