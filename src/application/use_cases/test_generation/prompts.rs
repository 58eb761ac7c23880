const OUTPUT_EXAMPLE: &str = r#"{
  "unit": [
    { "id": "UNIT-01", "title": "Email validation accepts a well-formed address", "steps": "Call validateEmail with 'test@example.com'.", "expectedResult": "The function returns true." }
  ],
  "integration": [
    { "id": "INT-01", "title": "Login with valid credentials", "steps": "Send a POST request to /login with a correct email and password.", "expectedResult": "The API responds 200 OK with an authentication token." }
  ],
  "e2e": [
    { "id": "E2E-01", "title": "Full user login flow", "steps": "1. Open the page. 2. Fill in the fields. 3. Click 'Sign in'.", "expectedResult": "The user is redirected to the dashboard." }
  ]
}"#;

pub(crate) fn build_system_prompt(language: &str) -> String {
    format!(
        r#"Act as a senior QA engineer specialized in test automation. Your task is to write a comprehensive set of test cases for the feature described by the user.

OUTPUT REQUIREMENTS:
1. Generate test cases for three categories: 'unit', 'integration' and 'e2e'.
2. For every test case provide:
   - id: a unique identifier (e.g. "UNIT-01", "INT-01", "E2E-01").
   - title: a short, descriptive title.
   - steps: a single string describing the steps. For unit tests, when a language context is given, it may include a short code or pseudocode snippet.
   - expectedResult: a single string describing the expected result.
3. Cover the happy path and unhappy paths (edge cases, invalid input).
4. Write titles, steps and expected results in {}.
5. The output MUST be one valid JSON object. Do not add any text, explanation or markdown formatting such as ```json around it.

OUTPUT FORMAT EXAMPLE:
{}"#,
        language, OUTPUT_EXAMPLE
    )
}

pub(crate) fn build_user_prompt(feature_description: &str, language_hint: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("FEATURE DESCRIPTION:\n\"\"\"\n");
    body.push_str(feature_description.trim());
    body.push_str("\n\"\"\"\n");

    if let Some(hint) = language_hint {
        body.push_str("\nADDITIONAL CONTEXT:\n");
        body.push_str(&format!(
            "The codebase uses the following language/framework: \"{}\".\n",
            hint
        ));
        body.push_str(
            "Adapt the test examples, especially the unit tests, to the conventions, syntax and tooling common in this ecosystem.\n",
        );
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_suite::TestSuiteDocument;

    #[test]
    fn system_prompt_names_categories_and_language() {
        let prompt = build_system_prompt("Portuguese");
        for key in ["'unit'", "'integration'", "'e2e'", "expectedResult", "Portuguese"] {
            assert!(prompt.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn output_example_matches_document_shape() {
        let example: TestSuiteDocument = serde_json::from_str(OUTPUT_EXAMPLE).unwrap();
        assert_eq!(example.unit[0].id, "UNIT-01");
        assert_eq!(example.integration.len(), 1);
        assert_eq!(example.e2e.len(), 1);
    }

    #[test]
    fn user_prompt_without_hint_has_no_context_section() {
        let prompt = build_user_prompt("  A login screen  ", None);
        assert!(prompt.contains("\"\"\"\nA login screen\n\"\"\""));
        assert!(!prompt.contains("ADDITIONAL CONTEXT"));
    }

    #[test]
    fn user_prompt_with_hint_adds_context() {
        let prompt = build_user_prompt("A login screen", Some("Python, PyTest"));
        assert!(prompt.contains("ADDITIONAL CONTEXT"));
        assert!(prompt.contains("\"Python, PyTest\""));
    }
}
