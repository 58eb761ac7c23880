use once_cell::sync::Lazy;
use regex::Regex;

// Reasoning blocks some Gemini/OpenAI-compatible models prepend to the answer.
// They may contain braces of their own.
static REASONING_BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<(think|reasoning|internal)>.*?</(think|reasoning|internal)>|<think\s*/>")
        .expect("reasoning block pattern is valid")
});

/// Skips reasoning blocks that open before the first `{` of the answer.
///
/// Only the preamble is touched: once the next `{` comes before any
/// reasoning tag, the rest of the text is returned as-is, so tags quoted
/// inside JSON strings survive. The result is always a suffix of `response`.
pub fn skip_reasoning_preamble(response: &str) -> &str {
    let mut rest = response;
    while let Some(block) = REASONING_BLOCK_PATTERN.find(rest) {
        match rest.find('{') {
            Some(brace) if brace < block.start() => break,
            _ => rest = &rest[block.end()..],
        }
    }
    rest
}

/// Shortened single-value preview of model output for log lines.
pub fn preview_text(value: &str, limit: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    let snippet: String = trimmed.chars().take(limit).collect();
    if trimmed.chars().count() > limit {
        format!("{}…", snippet)
    } else {
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_think_block_with_braces_is_skipped() {
        let input = "<think>Maybe {\"unit\": []} first?</think>{\"unit\":[]}";
        assert_eq!(skip_reasoning_preamble(input), "{\"unit\":[]}");
    }

    #[test]
    fn test_multiline_reasoning_block_is_skipped() {
        let input = "<reasoning>\nstep one\nstep two\n</reasoning>\n{\"e2e\":[]}";
        assert_eq!(skip_reasoning_preamble(input), "\n{\"e2e\":[]}");
    }

    #[test]
    fn test_self_closing_think() {
        assert_eq!(skip_reasoning_preamble("<think />{}"), "{}");
        assert_eq!(skip_reasoning_preamble("<think/>{}"), "{}");
    }

    #[test]
    fn test_consecutive_blocks_are_skipped() {
        let input = "<internal>debug</internal> <think>{draft}</think>Answer: {\"a\":1}";
        assert_eq!(skip_reasoning_preamble(input), "Answer: {\"a\":1}");
    }

    #[test]
    fn test_tags_inside_json_strings_are_kept() {
        let input = r#"{"unit":[{"title":"Strips <think> opening tag"},{"title":"Strips </think> closing tag"}]}"#;
        assert_eq!(skip_reasoning_preamble(input), input);
    }

    #[test]
    fn test_unclosed_block_is_left_alone() {
        let input = "<think>still going {\"a\":1}";
        assert_eq!(skip_reasoning_preamble(input), input);
    }

    #[test]
    fn test_plain_fenced_answer_is_unchanged() {
        let input = "```json\n{\"unit\":[{\"id\":\"UNIT-01\"}]}\n```\n\n\n\nDone";
        assert_eq!(skip_reasoning_preamble(input), input);
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview_text("   ", 10), "<empty>");
        assert_eq!(preview_text("ação ação", 4), "ação…");
        assert_eq!(preview_text("short", 10), "short");
    }
}
