use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub feature_description: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl GenerateRequest {
    pub fn new(feature_description: impl Into<String>, language: Option<String>) -> Self {
        Self {
            feature_description: feature_description.into(),
            language,
        }
    }

    /// Language hint with blank values treated as absent.
    pub fn language_hint(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn validate_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("featureDescription is required."));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_description_fails_validation() {
        let request: GenerateRequest = serde_json::from_str(r#"{"language":"Rust"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn whitespace_description_fails_validation() {
        let request = GenerateRequest::new("   \n", None);
        assert!(request.validate().is_err());
    }

    #[test]
    fn description_with_text_passes() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"featureDescription":"A login screen with email and password","language":"Jest"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.language_hint(), Some("Jest"));
    }

    #[test]
    fn blank_language_is_no_hint() {
        let request = GenerateRequest::new("Checkout flow", Some("  ".to_string()));
        assert_eq!(request.language_hint(), None);
    }

    #[test]
    fn long_description_and_language_pass() {
        let request = GenerateRequest::new("Checkout step. ".repeat(1000), Some("x".repeat(300)));
        assert!(request.validate().is_ok());
    }
}
