//! Balanced JSON object extraction from free-form model output.
//!
//! Models wrap the requested JSON in prose or ```json fences even when told
//! not to. Taking the span from the first `{` to the last `}` breaks as soon
//! as trailing commentary contains a brace, so the scan tracks nesting depth
//! instead and stops at the brace that closes the first object.
//!
//! Braces inside string literals are not counted. An unescaped `"` toggles
//! the string state and a backslash inside a string escapes the next byte.

/// Returns the first balanced `{...}` object in `text`, or `None` when there
/// is no `{` or the object never closes.
///
/// The result is a sub-slice of the input: it starts at the first `{` and
/// ends at its matching `}`.
pub fn extract_balanced_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = find_object_end(&text.as_bytes()[start..])?;
    Some(&text[start..=start + end])
}

// All delimiters are ASCII, so byte offsets always fall on char boundaries
// of the UTF-8 input.
fn find_object_end(bytes: &[u8]) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (index, byte) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }

    None
}
