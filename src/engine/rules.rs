//! Local fallback rule table.
//!
//! When the health-assistant agent is unavailable, advice comes from an
//! ordered list of (keyword pattern, response template) rules evaluated
//! top to bottom, first match wins. Evaluation is a pure function of
//! (utterance, profile, language) — identical inputs always produce
//! identical output.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{AdvisoryResponse, Language, RiskLevel, UserProfile};

/// `language_used` tag for the Hindi + English block.
pub const LANGUAGE_BILINGUAL: &str = "BILINGUAL_HINDI_ENGLISH";
/// `language_used` tag for English-only output.
pub const LANGUAGE_ENGLISH: &str = "ENGLISH";

// Recommendation tags used by the fallback.
pub const MONITOR_SYMPTOMS: &str = "MONITOR_SYMPTOMS";
pub const MONITOR_AND_CONSULT_IF_SEVERE: &str = "MONITOR_AND_CONSULT_IF_SEVERE";
pub const CONSULT_DOCTOR_IF_PERSISTENT: &str = "CONSULT_DOCTOR_IF_PERSISTENT";
pub const ASK_SPECIFIC_QUESTION: &str = "ASK_SPECIFIC_QUESTION";

/// Everything a response template needs from the session.
struct RuleContext<'a> {
    name: &'a str,
    pregnant: bool,
    bilingual: bool,
}

/// One entry of the decision list: a keyword pattern plus the template
/// that builds the advisory when it matches.
struct SymptomRule {
    keywords: Regex,
    respond: fn(&RuleContext) -> AdvisoryResponse,
}

fn rule(pattern: &str, respond: fn(&RuleContext) -> AdvisoryResponse) -> SymptomRule {
    SymptomRule {
        keywords: Regex::new(pattern).expect("Invalid symptom keyword pattern"),
        respond,
    }
}

/// The ordered rule table. Substring semantics, case-insensitive,
/// English and Hindi terms per symptom.
static RULES: LazyLock<Vec<SymptomRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)headache|head|सिरदर्द", headache_response),
        rule(r"(?i)fever|temperature|बुखार", fever_response),
        rule(r"(?i)nausea|vomit|morning sickness|मतली", nausea_response),
    ]
});

/// Evaluate the rule table for one utterance. Pure: no clock, no
/// randomness, no external state.
pub fn generate_health_response(
    question: &str,
    profile: &UserProfile,
    language: Language,
) -> AdvisoryResponse {
    let ctx = RuleContext {
        name: &profile.name,
        pregnant: profile.is_pregnant(),
        bilingual: language.is_bilingual(),
    };

    let mut advisory = RULES
        .iter()
        .find(|rule| rule.keywords.is_match(question))
        .map(|rule| (rule.respond)(&ctx))
        .unwrap_or_else(|| general_response(&ctx));

    advisory.language_used = if ctx.bilingual {
        LANGUAGE_BILINGUAL
    } else {
        LANGUAGE_ENGLISH
    }
    .to_string();

    advisory
}

/// Hindi sessions get the Hindi salutation followed by the full English
/// paragraph; everyone else gets the English paragraph alone.
fn compose(hindi_lead: String, english: String, bilingual: bool) -> String {
    if bilingual {
        format!("{hindi_lead}\n\n{english}")
    } else {
        english
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Headache ─────────────────────────────────────────────────

fn headache_response(ctx: &RuleContext) -> AdvisoryResponse {
    let name = ctx.name;
    if ctx.pregnant {
        let english = format!(
            "Hello {name}! Headaches during pregnancy are common. Here's what you can do safely:\n\n\
             • Rest in a quiet, dark room\n\
             • Apply a cold compress to your forehead\n\
             • Stay well hydrated (drink 8-10 glasses of water daily)\n\
             • Practice gentle neck stretches\n\
             • Ensure regular meals to maintain blood sugar\n\n\
             Avoid taking any medication without consulting your doctor during pregnancy."
        );
        AdvisoryResponse {
            message: compose(
                format!("नमस्ते {name}! गर्भावस्था के दौरान सिरदर्द आम है।"),
                english,
                ctx.bilingual,
            ),
            risk_level: RiskLevel::Low,
            pregnancy_alert: true,
            recommendation: MONITOR_AND_CONSULT_IF_SEVERE.into(),
            language_used: String::new(),
            safe_home_remedies: owned(&[
                "Rest in dark room",
                "Cold compress on forehead",
                "Stay hydrated",
                "Gentle stretching",
            ]),
            warning_signs: owned(&[
                "Severe headache with vision changes",
                "Headache with high fever",
                "Sudden severe headache",
                "Headache with swelling in hands/face",
            ]),
        }
    } else {
        let english = format!(
            "Hello {name}! For your headache:\n\n\
             • Rest in a quiet, dark room\n\
             • Stay hydrated - drink plenty of water\n\
             • Apply cold compress to forehead\n\
             • Practice relaxation techniques\n\
             • Avoid screen time for a while\n\
             • Ensure you're getting adequate sleep\n\n\
             If headache persists for more than 2 days or becomes severe, please consult a doctor."
        );
        AdvisoryResponse {
            message: compose(
                format!("नमस्ते {name}! सिरदर्द के लिए सुझाव:"),
                english,
                ctx.bilingual,
            ),
            risk_level: RiskLevel::Low,
            pregnancy_alert: false,
            recommendation: MONITOR_SYMPTOMS.into(),
            language_used: String::new(),
            safe_home_remedies: owned(&[
                "Rest in dark room",
                "Drink water",
                "Cold compress",
                "Relaxation techniques",
            ]),
            warning_signs: owned(&[
                "Severe sudden headache",
                "Headache with fever",
                "Vision changes",
                "Confusion or difficulty speaking",
            ]),
        }
    }
}

// ── Fever ────────────────────────────────────────────────────

fn fever_response(ctx: &RuleContext) -> AdvisoryResponse {
    let name = ctx.name;
    let guidance = if ctx.pregnant {
        "IMPORTANT: Do not take any fever medication without consulting your doctor during pregnancy.\n\n\
         Consult your doctor if fever exceeds 100.4°F (38°C)."
    } else {
        "Consult a doctor if fever exceeds 102°F (39°C) or persists for more than 3 days."
    };
    let english = format!(
        "Hello {name}! For fever:\n\n\
         • Rest adequately\n\
         • Drink plenty of fluids (water, coconut water, soup)\n\
         • Wear light, breathable clothing\n\
         • Use lukewarm water sponging\n\
         • Monitor temperature every 4 hours\n\n\
         {guidance}"
    );
    let warning_signs = if ctx.pregnant {
        owned(&[
            "Fever above 100.4°F",
            "Severe abdominal pain",
            "Reduced fetal movement",
            "Severe headache",
        ])
    } else {
        owned(&[
            "Fever above 103°F",
            "Difficulty breathing",
            "Severe headache",
            "Rash",
            "Persistent vomiting",
        ])
    };

    AdvisoryResponse {
        message: compose(
            format!("नमस्ते {name}! बुखार के लिए सुझाव:"),
            english,
            ctx.bilingual,
        ),
        risk_level: if ctx.pregnant {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        },
        pregnancy_alert: ctx.pregnant,
        recommendation: CONSULT_DOCTOR_IF_PERSISTENT.into(),
        language_used: String::new(),
        safe_home_remedies: owned(&[
            "Rest",
            "Drink fluids",
            "Lukewarm sponging",
            "Light clothing",
            "Monitor temperature",
        ]),
        warning_signs,
    }
}

// ── Nausea / morning sickness ────────────────────────────────

fn nausea_response(ctx: &RuleContext) -> AdvisoryResponse {
    let name = ctx.name;
    if ctx.pregnant {
        let english = format!(
            "Hello {name}! Morning sickness is common in pregnancy:\n\n\
             • Eat small, frequent meals (every 2-3 hours)\n\
             • Keep crackers or dry toast by your bedside\n\
             • Eat them before getting out of bed\n\
             • Avoid spicy, fatty, or strong-smelling foods\n\
             • Ginger tea or ginger candies can help\n\
             • Stay hydrated with small sips of water\n\
             • Get fresh air and rest adequately\n\n\
             These symptoms usually improve after the first trimester."
        );
        AdvisoryResponse {
            message: compose(
                format!("नमस्ते {name}! मॉर्निंग सिकनेस गर्भावस्था में सामान्य है।"),
                english,
                ctx.bilingual,
            ),
            risk_level: RiskLevel::Low,
            pregnancy_alert: true,
            recommendation: MONITOR_AND_CONSULT_IF_SEVERE.into(),
            language_used: String::new(),
            safe_home_remedies: owned(&[
                "Small frequent meals",
                "Dry crackers/toast",
                "Ginger tea",
                "Fresh air",
                "Avoid triggers",
            ]),
            warning_signs: owned(&[
                "Unable to keep any food/water down",
                "Weight loss",
                "Dark urine",
                "Dizziness",
                "Severe dehydration",
            ]),
        }
    } else {
        let english = format!(
            "Hello {name}! For nausea:\n\n\
             • Eat bland foods (crackers, toast, rice)\n\
             • Avoid greasy or spicy foods\n\
             • Drink clear fluids\n\
             • Ginger or peppermint tea\n\
             • Rest and fresh air\n\n\
             Consult a doctor if nausea persists or is accompanied by severe symptoms."
        );
        AdvisoryResponse {
            message: compose(
                format!("नमस्ते {name}! मतली के लिए सुझाव:"),
                english,
                ctx.bilingual,
            ),
            risk_level: RiskLevel::Low,
            pregnancy_alert: false,
            recommendation: MONITOR_SYMPTOMS.into(),
            language_used: String::new(),
            safe_home_remedies: owned(&[
                "Bland foods",
                "Clear fluids",
                "Ginger tea",
                "Rest",
                "Fresh air",
            ]),
            warning_signs: owned(&[
                "Severe vomiting",
                "Blood in vomit",
                "Dehydration signs",
                "Severe abdominal pain",
            ]),
        }
    }
}

// ── Default branch ───────────────────────────────────────────

fn general_response(ctx: &RuleContext) -> AdvisoryResponse {
    let name = ctx.name;
    let situation = if ctx.pregnant {
        "As you are pregnant, I will provide pregnancy-safe recommendations."
    } else {
        "I will provide personalized health guidance based on your profile."
    };
    let topic = if ctx.pregnant {
        "Pregnancy-related concerns"
    } else {
        "General wellness"
    };
    let english = format!(
        "Hello {name}! I'm here to help you with your health questions.\n\n\
         For the best personalized advice, please:\n\
         • Describe your symptoms clearly\n\
         • Mention when they started\n\
         • Let me know if you have any other concerns\n\n\
         {situation}\n\n\
         Common topics I can help with:\n\
         • Headaches and pain management\n\
         • Fever and common cold\n\
         • {topic}\n\
         • Medicine safety information\n\
         • When to consult a doctor"
    );

    AdvisoryResponse {
        message: compose(
            format!("नमस्ते {name}! मैं आपकी मदद करने के लिए यहां हूं।"),
            english,
            ctx.bilingual,
        ),
        risk_level: RiskLevel::Low,
        pregnancy_alert: false,
        recommendation: ASK_SPECIFIC_QUESTION.into(),
        language_used: String::new(),
        safe_home_remedies: owned(&[
            "Describe symptoms clearly",
            "Ask specific questions",
            "Share relevant details",
        ]),
        warning_signs: owned(&[
            "Severe pain",
            "High fever",
            "Difficulty breathing",
            "Chest pain",
            "Severe bleeding",
        ]),
    }
}
