use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// UI language selection. `Unset` is the pre-selection state; generated
/// text is English-only until Hindi is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "hindi")]
    Hindi,
    #[serde(rename = "english")]
    English,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Language {
    pub fn is_set(&self) -> bool {
        !matches!(self, Language::Unset)
    }

    /// Whether generated text should carry the Hindi + English block.
    pub fn is_bilingual(&self) -> bool {
        matches!(self, Language::Hindi)
    }
}

// ---------------------------------------------------------------------------
// PregnancyStatus
// ---------------------------------------------------------------------------

/// Tri-state pregnancy answer from the profile form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PregnancyStatus {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl PregnancyStatus {
    pub fn is_set(&self) -> bool {
        !matches!(self, PregnancyStatus::Unset)
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// The five screens of the component tree. Navigation rules live in
/// `crate::session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Language,
    Dashboard,
    Chat,
    Scan,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Advisory risk classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "HIGH")]
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MODERATE" => Ok(Self::Moderate),
            "HIGH" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// ActivityKind
// ---------------------------------------------------------------------------

/// What produced a recent-activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Scan,
    Chat,
}
