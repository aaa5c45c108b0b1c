//! Best-effort cleanup of raw model output before parsing.
//!
//! Models wrap JSON in markdown fences, quote strings with single quotes and
//! occasionally emit control characters; each of those breaks a strict
//! parser. Sanitizing is normalization only, it does not guarantee the
//! result parses.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(?:json)?\s*").expect("leading fence regex"));
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```$").expect("trailing fence regex"));

/// Trim, strip a ```json fence, normalize stray single quotes to double
/// quotes and drop control characters, in that order.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let lead_stripped = LEADING_FENCE.replace(trimmed, "");
    let unfenced = TRAILING_FENCE.replace(&lead_stripped, "");
    let requoted = normalize_quotes(&unfenced);
    let cleaned: String = requoted.chars().filter(|c| *c as u32 >= 32).collect();
    // Dropping a control character can leave fresh edge whitespace behind.
    cleaned.trim().to_string()
}

/// Replace single quotes with double quotes unless the quote sits between
/// two word characters, which keeps apostrophes like "Jupiter's" intact.
/// (The regex crate has no lookaround, so this is a char scan.)
fn normalize_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '\'' {
            out.push(c);
            continue;
        }
        let prev_is_word = i > 0 && is_word_char(chars[i - 1]);
        let next_is_word = i + 1 < chars.len() && is_word_char(chars[i + 1]);
        if prev_is_word && next_is_word {
            out.push('\'');
        } else {
            out.push('"');
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::VALID_RECORD_JSON;

    #[test]
    fn strips_a_json_fence() {
        let fenced = format!("```json\n{}\n```", VALID_RECORD_JSON);
        assert_eq!(sanitize(&fenced), sanitize(VALID_RECORD_JSON));
    }

    #[test]
    fn strips_a_bare_fence() {
        let fenced = "```\n{\"question\": \"q\"}\n```";
        assert_eq!(sanitize(fenced), "{\"question\": \"q\"}");
    }

    #[test]
    fn normalizes_boundary_single_quotes_but_keeps_apostrophes() {
        let cleaned = sanitize("{'question': 'What is Jupiter's spot?'}");
        assert_eq!(cleaned, "{\"question\": \"What is Jupiter's spot?\"}");
    }

    #[test]
    fn drops_control_characters() {
        let cleaned = sanitize("{\"a\":\u{0007} \"b\"\u{0000}}");
        assert_eq!(cleaned, "{\"a\": \"b\"}");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            format!("```json\n{}\n```", VALID_RECORD_JSON),
            "{'key': 'rocket's value'}\u{0001}".to_string(),
            "  plain text, no json at all  ".to_string(),
            "```\n{broken\n```".to_string(),
        ];

        for input in inputs {
            let once = sanitize(&input);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
