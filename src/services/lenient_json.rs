//! Tolerant decoding of model output into a JSON object.
//!
//! The model is asked for strict JSON but does not reliably produce it. The
//! permissive pass here rewrites the common deviations (unquoted keys,
//! trailing commas, single-quoted strings, Python-style literals) into
//! strict JSON and then delegates to serde_json. Repair is kept separate
//! from validation: this module decides whether the text is a structured
//! record at all, not whether the record makes a usable question.

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Parse `text` into a JSON object, repairing minor syntax deviations.
pub fn parse_lenient(text: &str) -> AppResult<Value> {
    if text.trim().is_empty() {
        return Err(parse_error("response is empty", text));
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) => require_object(value, text),
        Err(strict_err) => {
            let repaired = repair(text);
            match serde_json::from_str::<Value>(&repaired) {
                Ok(value) => require_object(value, text),
                // Report the strict error; the repaired text is an
                // implementation detail.
                Err(_) => Err(parse_error(&strict_err.to_string(), text)),
            }
        }
    }
}

fn require_object(value: Value, raw: &str) -> AppResult<Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(parse_error("expected a JSON object", raw))
    }
}

fn parse_error(reason: &str, raw: &str) -> AppError {
    AppError::Parse {
        reason: reason.to_string(),
        raw: raw.to_string(),
    }
}

/// Single pass over the text rewriting tolerated deviations. Content inside
/// double-quoted strings is copied verbatim.
fn repair(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    out.push(d);
                    i += 1;
                    if d == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if d == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                // Single-quoted string: re-emit double-quoted, escaping any
                // inner double quotes.
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    if d == '\\' && i + 1 < chars.len() {
                        let e = chars[i + 1];
                        if e == '\'' {
                            out.push('\'');
                        } else {
                            out.push('\\');
                            out.push(e);
                        }
                        i += 2;
                    } else if d == '\'' {
                        i += 1;
                        break;
                    } else if d == '"' {
                        out.push_str("\\\"");
                        i += 1;
                    } else {
                        out.push(d);
                        i += 1;
                    }
                }
                out.push('"');
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let trailing = j < chars.len() && (chars[j] == '}' || chars[j] == ']');
                if !trailing {
                    out.push(',');
                }
                i += 1;
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_')
                {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();

                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let is_key = j < chars.len() && chars[j] == ':';

                if is_key {
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                } else {
                    match word.as_str() {
                        "True" => out.push_str("true"),
                        "False" => out.push_str("false"),
                        "None" | "Null" | "NULL" => out.push_str("null"),
                        _ => out.push_str(&word),
                    }
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}
