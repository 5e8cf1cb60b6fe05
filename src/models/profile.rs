use serde::{Deserialize, Serialize};

use super::enums::PregnancyStatus;

/// The user profile collected on the login screen.
///
/// `age` stays string-encoded: it travels as form input and is embedded
/// verbatim into agent context prompts, never used arithmetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(rename = "isPregnant", default)]
    pub pregnancy: PregnancyStatus,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub conditions: String,
}

impl UserProfile {
    /// Whether the login screen may advance: name, age, and pregnancy
    /// status must all be answered. Allergies and conditions are optional.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.age.is_empty() && self.pregnancy.is_set()
    }

    pub fn is_pregnant(&self) -> bool {
        self.pregnancy == PregnancyStatus::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> UserProfile {
        UserProfile {
            name: "Asha".into(),
            age: "28".into(),
            pregnancy: PregnancyStatus::Yes,
            allergies: String::new(),
            conditions: String::new(),
        }
    }

    #[test]
    fn empty_profile_is_incomplete() {
        assert!(!UserProfile::default().is_complete());
    }

    #[test]
    fn complete_profile_requires_all_three_answers() {
        let mut profile = asha();
        assert!(profile.is_complete());

        profile.age.clear();
        assert!(!profile.is_complete());

        profile.age = "28".into();
        profile.pregnancy = PregnancyStatus::Unset;
        assert!(!profile.is_complete());
    }

    #[test]
    fn allergies_and_conditions_are_optional() {
        let profile = asha();
        assert!(profile.allergies.is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn round_trips_with_is_pregnant_field_name() {
        let json = serde_json::to_string(&asha()).unwrap();
        assert!(json.contains("\"isPregnant\":\"yes\""));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asha());
    }

    #[test]
    fn decodes_partial_record() {
        let back: UserProfile = serde_json::from_str(r#"{"name":"Ravi"}"#).unwrap();
        assert_eq!(back.name, "Ravi");
        assert_eq!(back.pregnancy, PregnancyStatus::Unset);
        assert!(!back.is_complete());
    }
}
