//! Hook name recognition from free-form call-site text.
//!
//! Call sites are not parsed with a real grammar. Collapsing the snippet
//! into a dense token stream and terminating every argument list with a
//! comma is enough to read the literal first argument of the two call
//! shapes in scope. Dynamic names built with PHP string concatenation keep
//! the `.` operator after quote stripping, which is what the brace
//! formatting renders: `'tb_' . $tag . '_logo'` comes out as
//! `tb_{$tag}_logo`.

use crate::model::HookKind;
use std::fmt;

/// Why a candidate name was not resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum NameError {
    /// The call marker or its comma-terminated first argument is missing.
    Malformed,
    /// The candidate does not carry the required namespace prefix.
    ForeignNamespace(String),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Malformed => write!(f, "no hook name in call site"),
            NameError::ForeignNamespace(name) => {
                write!(f, "hook name outside namespace: {}", name)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Resolve the canonical hook name from a call-site snippet.
pub fn resolve(kind: HookKind, code: &str, namespace: &str) -> Result<String, NameError> {
    let marker = match kind {
        HookKind::Action => "do_action(",
        HookKind::Filter => "apply_filters(",
    };

    let dense: String = code
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\'' && *c != '"')
        .collect();
    let dense = dense.replace(')', ",)");

    let start = dense.find(marker).ok_or(NameError::Malformed)? + marker.len();
    let end = dense[start..].find(',').ok_or(NameError::Malformed)? + start;

    let name = format_segments(&dense[start..end]);

    if name.starts_with(namespace) {
        Ok(name)
    } else {
        Err(NameError::ForeignNamespace(name))
    }
}

/// Render concatenated name segments with brace notation.
///
/// Two segments `a.b` become `a{b}` and three segments `a.b.c` become
/// `a{b}c`. Any other segment count passes through untouched.
fn format_segments(candidate: &str) -> String {
    if !candidate.contains('.') {
        return candidate.to_string();
    }

    let parts: Vec<&str> = candidate.split('.').collect();
    match parts.len() {
        2 => format!("{}{{{}}}", parts[0], parts[1]),
        3 => format!("{}{{{}}}{}", parts[0], parts[1], parts[2]),
        _ => candidate.to_string(),
    }
}
