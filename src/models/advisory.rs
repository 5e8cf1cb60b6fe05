use serde::{Deserialize, Deserializer, Serialize};

use super::enums::RiskLevel;

/// Structured health guidance attached to an assistant message.
///
/// Produced either by normalizing a remote agent reply or by the local
/// fallback rule table. Never mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_risk_level")]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub pregnancy_alert: bool,
    /// Free-form tag; the fallback uses a fixed set of uppercase tags.
    #[serde(default)]
    pub recommendation: String,
    /// `BILINGUAL_HINDI_ENGLISH` or `ENGLISH`.
    #[serde(default)]
    pub language_used: String,
    #[serde(default)]
    pub safe_home_remedies: Vec<String>,
    #[serde(default)]
    pub warning_signs: Vec<String>,
}

impl AdvisoryResponse {
    /// Decode from a loose remote payload object. Unknown fields are
    /// ignored and missing fields take defaults, so a partial object
    /// still yields a usable record.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Accept any casing for the risk level and fall back to LOW on values
/// outside the enumeration, instead of failing the whole record.
fn lenient_risk_level<'de, D>(deserializer: D) -> Result<RiskLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_default())
}
