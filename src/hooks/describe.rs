//! Summary/description extraction from raw comment text.

/// Prose split out of a doc comment, structured tag lines dropped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Description {
    pub summary: String,
    pub desc: String,
}

/// Split a raw comment block into a one-line summary and the remaining
/// paragraphs.
///
/// Line breaks are stripped up front; the structure afterwards hangs
/// entirely off the ` * ` line markers. Soft-wrapped lines collapse into
/// continuous prose, blank comment lines survive as paragraph separators,
/// and everything from the first `@` tag segment on is dropped — tags are
/// read from the tag map, not from this prose stream.
///
/// A block with no prose before its tags yields two empty strings, which
/// is what makes the assembler's validity gate reject the unit.
pub fn extract(raw: &str) -> Description {
    let flat: String = raw
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let flat = flat.replacen("/** * ", "", 1);
    let flat = flat.replace(" * ", " ");

    let mut segments: Vec<&str> = Vec::new();
    for segment in flat.split(" * ") {
        if segment.starts_with('@') {
            break;
        }
        segments.push(segment);
    }

    match segments.split_first() {
        Some((summary, rest)) => Description {
            summary: summary.to_string(),
            desc: rest.join("\n\n"),
        },
        None => Description::default(),
    }
}
