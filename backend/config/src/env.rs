//! `${VAR}` substitution over a parsed config value.
//!
//! Only upper-case names are recognized. `$${VAR}` escapes to a literal
//! `${VAR}`. A reference to an unset variable is an error.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use thiserror::Error;

static VAR_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\$?)\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Environment variable '{name}' referenced at '{path}' is not set")]
pub struct MissingEnvVarError {
    pub name: String,
    pub path: String,
}

/// Substitute from the process environment.
pub fn resolve_env_vars(value: &Value) -> Result<Value, MissingEnvVarError> {
    resolve_env_vars_with(value, &|name| std::env::var(name).ok())
}

/// Substitute using `lookup`. Walks objects and arrays; only strings change.
pub fn resolve_env_vars_with(
    value: &Value,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<Value, MissingEnvVarError> {
    substitute_value(value, lookup, "")
}

fn substitute_value(
    value: &Value,
    lookup: &dyn Fn(&str) -> Option<String>,
    path: &str,
) -> Result<Value, MissingEnvVarError> {
    Ok(match value {
        Value::String(s) => Value::String(substitute_string(s, lookup, path)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| substitute_value(v, lookup, &format!("{path}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, v) in map {
                let child = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
                out.insert(key.clone(), substitute_value(v, lookup, &child)?);
            }
            Value::Object(out)
        }
        other => other.clone(),
    })
}

fn substitute_string(
    s: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
    path: &str,
) -> Result<String, MissingEnvVarError> {
    let mut missing = None;
    let replaced = VAR_REF.replace_all(s, |caps: &Captures<'_>| {
        let name = &caps[2];
        if !caps[1].is_empty() {
            return format!("${{{name}}}");
        }
        match lookup(name) {
            Some(v) => v,
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });
    match missing {
        Some(name) => Err(MissingEnvVarError { name, path: path.to_string() }),
        None => Ok(replaced.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "CONTACT" => Some("me@example.org".into()),
            "SPEED" => Some("12".into()),
            _ => None,
        }
    }

    #[test]
    fn test_substitutes_nested_strings() {
        let input = json!({
            "contact": { "address": "${CONTACT}" },
            "playback": { "lines": ["> mail ${CONTACT}", "plain"] },
            "assistant": { "replyDelayMs": 400 }
        });
        let out = resolve_env_vars_with(&input, &lookup).unwrap();
        assert_eq!(out["contact"]["address"], "me@example.org");
        assert_eq!(out["playback"]["lines"][0], "> mail me@example.org");
        assert_eq!(out["assistant"]["replyDelayMs"], 400);
    }

    #[test]
    fn test_missing_var_reports_path() {
        let input = json!({ "playback": { "lines": ["ok", "${NOPE}"] } });
        let err = resolve_env_vars_with(&input, &lookup).unwrap_err();
        assert_eq!(err.name, "NOPE");
        assert_eq!(err.path, "playback.lines[1]");
    }

    #[test]
    fn test_escaped_reference_is_literal() {
        let input = json!("cost $${SPEED} vs ${SPEED}");
        let out = resolve_env_vars_with(&input, &lookup).unwrap();
        assert_eq!(out, "cost ${SPEED} vs 12");
    }

    #[test]
    fn test_lowercase_names_untouched() {
        let input = json!("${lower}");
        assert_eq!(resolve_env_vars_with(&input, &lookup).unwrap(), "${lower}");
    }
}
