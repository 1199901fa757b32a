//! Call-site classification — action, filter, or neither.

use crate::model::HookKind;

/// Classify a code snippet by its opening line.
///
/// The call signature must appear on the first line: a leading
/// `do_action(` token marks an action, `apply_filters` anywhere on the
/// line marks a filter (filter calls usually sit behind an assignment).
pub fn classify(code: &str) -> Option<HookKind> {
    let line = code.lines().next().unwrap_or("");

    if line.starts_with("do_action(") {
        Some(HookKind::Action)
    } else if line.contains("apply_filters") {
        Some(HookKind::Filter)
    } else {
        None
    }
}
