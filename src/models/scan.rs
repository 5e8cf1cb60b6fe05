use serde::{Deserialize, Serialize};

/// Result card for one scanned medicine. At most one live instance;
/// overwritten by each new scan and cleared when a scan begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub medicine_name: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub pregnancy_warning: String,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub dosage_note: String,
}

impl ScanResult {
    /// Decode from a loose scanner payload object; missing fields take
    /// defaults so a partial extraction still yields a card.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Whether the scanner actually identified a medicine.
    pub fn has_medicine_name(&self) -> bool {
        !self.medicine_name.is_empty()
    }

    /// Card shown when extraction failed: the explanatory text rides in
    /// `uses` and the dosage note prompts a rescan.
    pub fn placeholder(explanation: impl Into<String>) -> Self {
        Self {
            medicine_name: "Unable to identify".into(),
            uses: vec![explanation.into()],
            dosage_note: "Please try scanning again with a clearer image.".into(),
            ..Self::default()
        }
    }
}
