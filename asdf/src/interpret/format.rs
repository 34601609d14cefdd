//! Substitution of `{name}` placeholders in format strings.

use std::iter::Peekable;
use std::str::Chars;

use super::{Fail, Value};

/// Is `key` a valid identifier?
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .map_or(false, |c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Reads a placeholder name up to its closing brace, which is consumed.
///
/// Returns `None` if the brace is never closed.
fn placeholder(chars: &mut Peekable<Chars>) -> Option<String> {
    let mut key = String::new();
    for c in chars.by_ref() {
        match c {
            '}' => return Some(key),
            '{' => return None,
            c => key.push(c),
        }
    }
    None
}

/// Replaces every `{name}` placeholder of `content` with the display form of
/// the value `lookup` gives for `name`.
///
/// `{{` and `}}` stand for literal braces. `literal` is the string as written
/// in the source code, for failure messages.
pub fn substitute(
    content: &str,
    literal: &str,
    lookup: impl Fn(&str) -> Option<Value>,
) -> Result<String, Fail> {
    let mut res = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                res.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                res.push('}');
            }
            '}' => return Err(Fail::format_syntax("single '}'", literal)),
            '{' => {
                let key = placeholder(&mut chars)
                    .ok_or_else(|| Fail::format_syntax("unclosed '{'", literal))?;
                if key.is_empty() {
                    return Err(Fail::format_syntax("empty placeholder", literal));
                }
                if !is_identifier(&key) {
                    return Err(Fail::format_syntax(
                        &format!("invalid placeholder '{{{key}}}'"),
                        literal,
                    ));
                }
                let value = lookup(&key).ok_or_else(|| Fail::format_key(&key, literal))?;
                res.push_str(&value.to_string());
            }
            c => res.push(c),
        }
    }
    Ok(res)
}
