use crate::domain::error::{AppError, Result};
use crate::domain::test_suite::TestSuiteDocument;
use crate::infrastructure::response::{preview_text, skip_reasoning_preamble};
use crate::shared::json_extract::extract_balanced_json;

const PREVIEW_LIMIT: usize = 600;

/// Turns raw model text into a document. Extraction and parsing either both
/// succeed or the caller gets an error; there is no partial result. The
/// parsed text is always a verbatim slice of `raw_output`.
pub(crate) fn parse_test_suite(raw_output: &str) -> Result<TestSuiteDocument> {
    let answer = skip_reasoning_preamble(raw_output);
    let json_text = extract_balanced_json(answer)
        .ok_or_else(|| AppError::NoJsonFound(preview_text(raw_output, PREVIEW_LIMIT)))?;

    serde_json::from_str::<TestSuiteDocument>(json_text)
        .map_err(|err| AppError::MalformedJson(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_response_with_commentary() {
        let raw = "Here is your result:\n```json\n{\"unit\":[{\"id\":\"UNIT-01\",\"title\":\"t\",\"steps\":\"s\",\"expectedResult\":\"r\"}],\"integration\":[],\"e2e\":[]}\n```\nLet me know if you need more.";
        let doc = parse_test_suite(raw).unwrap();
        assert_eq!(doc.unit.len(), 1);
        assert_eq!(doc.unit[0].id, "UNIT-01");
        assert_eq!(doc.unit[0].expected_result, "r");
        assert!(doc.integration.is_empty());
        assert!(doc.e2e.is_empty());
    }

    #[test]
    fn refusal_is_no_json_found() {
        let err = parse_test_suite("Sorry, I cannot help with that.").unwrap_err();
        match err {
            AppError::NoJsonFound(preview) => assert_eq!(preview, "Sorry, I cannot help with that."),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn truncated_response_is_no_json_found() {
        let err = parse_test_suite("{\"unit\":[{\"id\":\"UNIT-01\"").unwrap_err();
        assert!(matches!(err, AppError::NoJsonFound(_)));
    }

    #[test]
    fn balanced_but_invalid_json_is_malformed() {
        let err = parse_test_suite("{\"unit\": [], }").unwrap_err();
        assert!(matches!(err, AppError::MalformedJson(_)));

        let err = parse_test_suite("{unit: []}").unwrap_err();
        assert!(matches!(err, AppError::MalformedJson(_)));
    }

    #[test]
    fn wrong_group_type_is_malformed() {
        let err = parse_test_suite("{\"unit\": \"none\"}").unwrap_err();
        assert!(matches!(err, AppError::MalformedJson(_)));
    }

    #[test]
    fn reasoning_block_does_not_shadow_answer() {
        let raw = "<think>Should I output {\"unit\"? yes</think>\n{\"e2e\":[{\"id\":\"E2E-01\",\"title\":\"Checkout {happy path}\",\"steps\":\"s\",\"expectedResult\":\"r\"}]}";
        let doc = parse_test_suite(raw).unwrap();
        assert_eq!(doc.e2e[0].title, "Checkout {happy path}");
        assert!(doc.unit.is_empty());
    }

    #[test]
    fn template_placeholder_in_title_is_kept() {
        let raw = r#"{"unit":[{"id":"UNIT-01","title":"Renders {{result}} in template","steps":"s","expectedResult":"r"}]}"#;
        let doc = parse_test_suite(raw).unwrap();
        assert_eq!(doc.unit[0].title, "Renders {{result}} in template");
    }

    #[test]
    fn reasoning_tags_inside_cases_do_not_drop_cases() {
        let raw = r#"```json
{"unit":[{"id":"UNIT-01","title":"Strips <think> opening tag","steps":"s","expectedResult":"r"},{"id":"UNIT-02","title":"Strips </think> closing tag","steps":"s","expectedResult":"r"}]}
```"#;
        let doc = parse_test_suite(raw).unwrap();
        assert_eq!(doc.unit.len(), 2);
        assert_eq!(doc.unit[0].title, "Strips <think> opening tag");
        assert_eq!(doc.unit[1].title, "Strips </think> closing tag");
    }

    #[test]
    fn blank_lines_inside_strings_are_kept() {
        let raw = "{\"e2e\":[{\"id\":\"E2E-01\",\"title\":\"t\",\"steps\":\"1. Open\\n\\n\\n\\n2. Pay\",\"expectedResult\":\"r\"}]}";
        let doc = parse_test_suite(raw).unwrap();
        assert_eq!(doc.e2e[0].steps, "1. Open\n\n\n\n2. Pay");
    }
}
