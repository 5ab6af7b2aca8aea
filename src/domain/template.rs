//! Prompt-template rendering with `{name}` placeholders.
//!
//! `{{` and `}}` produce literal braces. A placeholder with no matching
//! variable is an error rather than silently left in the prompt.

use crate::domain::DomainError;
use std::collections::BTreeMap;

pub type TemplateVars = BTreeMap<String, String>;

/// One parsed piece of a template.
enum Piece<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Split a template into text and placeholder pieces.
fn pieces(template: &str) -> Result<Vec<Piece<'_>>, DomainError> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find(['{', '}']) {
        if pos > 0 {
            out.push(Piece::Text(&rest[..pos]));
        }
        let tail = &rest[pos..];
        if tail.starts_with("{{") {
            out.push(Piece::Text("{"));
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push(Piece::Text("}"));
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            out.push(Piece::Text("}"));
            rest = &tail[1..];
        } else {
            let close = tail.find('}').ok_or_else(|| {
                DomainError::MissingPlaceholder(tail[1..].chars().take(40).collect())
            })?;
            out.push(Piece::Placeholder(tail[1..close].trim()));
            rest = &tail[close + 1..];
        }
    }
    if !rest.is_empty() {
        out.push(Piece::Text(rest));
    }
    Ok(out)
}

/// Substitute every `{name}` in `template` from `vars`.
pub fn render(template: &str, vars: &TemplateVars) -> Result<String, DomainError> {
    let mut out = String::with_capacity(template.len());
    for piece in pieces(template)? {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Placeholder(name) => {
                let value = vars
                    .get(name)
                    .ok_or_else(|| DomainError::MissingPlaceholder(name.to_string()))?;
                out.push_str(value);
            }
        }
    }
    Ok(out)
}

/// Distinct placeholder names in first-seen order.
pub fn placeholders(template: &str) -> Result<Vec<String>, DomainError> {
    let mut names: Vec<String> = Vec::new();
    for piece in pieces(template)? {
        if let Piece::Placeholder(name) = piece {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Build template variables from `(name, value)` pairs.
pub fn vars<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> TemplateVars
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
