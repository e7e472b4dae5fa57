//! Loosely typed value helpers.
//!
//! These operate on [`serde_json::Value`] and follow the usual semantics of JavaScript utility
//! libraries, so state produced by a web frontend can be read back without a schema.

use alloc::string::String;
use alloc::vec::Vec;

use serde_json::Value;

/// Splits a property path into keys.
///
/// Dots separate keys, brackets hold indexes or quoted keys (`a[0]`, `a["b.c"]`). Empty keys are
/// preserved (`"a..b"` has three keys) and an empty path is the single key `""`.
pub fn parse_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return alloc::vec![String::new()];
    }

    let mut keys = Vec::new();
    let mut current = String::new();
    let mut chars = path.char_indices().peekable();
    let mut after_bracket = false;

    while let Some((i, c)) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    keys.push(core::mem::take(&mut current));
                } else if !after_bracket {
                    keys.push(String::new());
                }
                after_bracket = false;
                if chars.peek().is_none() {
                    keys.push(String::new());
                }
            }
            '[' => match parse_bracket(&path[i + 1..]) {
                Some((key, consumed)) => {
                    if !current.is_empty() {
                        keys.push(core::mem::take(&mut current));
                    }
                    keys.push(key);
                    after_bracket = true;
                    for _ in 0..consumed {
                        chars.next();
                    }
                }
                None => {
                    current.push(c);
                    after_bracket = false;
                }
            },
            _ => {
                current.push(c);
                after_bracket = false;
            }
        }
    }

    if !current.is_empty() {
        keys.push(current);
    }
    keys
}

/// Parses the inside of a bracket up to and including `]`.
///
/// Returns the key and the number of chars consumed after `[`.
fn parse_bracket(rest: &str) -> Option<(String, usize)> {
    let mut chars = rest.chars();
    let first = chars.next()?;

    if first == '"' || first == '\'' {
        let mut key = String::new();
        let mut consumed = 1;
        let mut escaped = false;
        while let Some(c) = chars.next() {
            consumed += 1;
            if escaped {
                key.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == first {
                return match chars.next() {
                    Some(']') => Some((key, consumed + 1)),
                    _ => None,
                };
            } else {
                key.push(c);
            }
        }
        return None;
    }

    let end = rest.find(']')?;
    let key = &rest[..end];
    if key.contains('[') {
        return None;
    }
    Some((String::from(key), key.chars().count() + 1))
}

/// Reads the value at `path`, or `None` when any step along the way is missing.
///
/// An object that holds `path` verbatim as a key (e.g. `"a.b"`) resolves that key directly.
/// Arrays are indexed by canonical decimal keys only (`"0"`, `"12"`, never `"01"` or `"+1"`).
pub fn get<'a>(value: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    let value = value?;
    if let Value::Object(map) = value {
        if let Some(found) = map.get(path) {
            return Some(found);
        }
    }

    parse_path(path)
        .iter()
        .try_fold(value, |current, key| step(current, key))
}

fn step<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical { key.parse().ok() } else { None }
}

/// [`get`] with a fallback used only when the path does not resolve.
///
/// An explicit `null` at `path` is returned as is.
pub fn get_or(value: Option<&Value>, path: &str, default: Value) -> Value {
    get(value, path).cloned().unwrap_or(default)
}

/// Recursively fills keys missing from `target` with the ones in `defaults`.
///
/// Objects are merged key by key and arrays index by index. Values already present in `target`,
/// `null` included, are never replaced. Mismatched shapes leave `target` untouched.
pub fn defaults_deep(target: &mut Value, defaults: &Value) {
    match (target, defaults) {
        (Value::Object(target), Value::Object(defaults)) => {
            for (key, default) in defaults {
                match target.get_mut(key) {
                    Some(existing) => defaults_deep(existing, default),
                    None => {
                        target.insert(key.clone(), default.clone());
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(defaults)) => {
            for (i, default) in defaults.iter().enumerate() {
                match target.get_mut(i) {
                    Some(existing) => defaults_deep(existing, default),
                    None => target.push(default.clone()),
                }
            }
        }
        _ => {}
    }
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Whether `value` has no content.
///
/// Scalars other than non-empty strings count as empty, the same as a collection without
/// entries.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
