//! PHP docblock tokenizer.
//!
//! Finds `/** ... */` comment blocks and captures, per block: the raw
//! comment text, the code chunk that follows it (up to the next block), and
//! a tag map tokenized from the `@since` / `@param` lines. Prose handling
//! is left to the extraction pipeline — this module never interprets the
//! comment body.

use crate::model::{ParamTag, SourceUnit, TagMap};
use regex::Regex;
use std::sync::LazyLock;

static RE_SINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*?\s*@since\s+(.+?)\s*$").unwrap());

// First token after @param is the type; the rest of the line rides along
// verbatim (trailing whitespace dropped).
static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*?\s*@param\s+(\S+)(?:\s+(.*\S))?\s*$").unwrap());

/// Tokenize PHP source into one SourceUnit per doc comment.
///
/// An unclosed block at end of file is dropped: no code can follow it, so
/// no record could ever be assembled from it.
pub fn parse(content: &str, file_path: &str) -> Vec<SourceUnit> {
    let mut units = Vec::new();
    let mut cursor = 0;

    while let Some(open) = content[cursor..].find("/**") {
        let start = cursor + open;
        let body = start + "/**".len();
        let close = match content[body..].find("*/") {
            Some(i) => body + i + "*/".len(),
            None => break,
        };

        let next = content[close..]
            .find("/**")
            .map(|i| close + i)
            .unwrap_or(content.len());

        let raw = &content[start..close];

        units.push(SourceUnit {
            raw: raw.to_string(),
            code: content[close..next].trim_start().to_string(),
            tags: parse_tags(raw),
            file_path: file_path.to_string(),
        });

        cursor = next;
    }

    units
}

/// Tokenize the structured tag lines of one comment block.
fn parse_tags(raw: &str) -> TagMap {
    let mut tags = TagMap::default();

    for line in raw.lines() {
        if let Some(caps) = RE_SINCE.captures(line) {
            if tags.since.is_none() {
                tags.since = Some(caps[1].to_string());
            }
        } else if let Some(caps) = RE_PARAM.captures(line) {
            tags.params.push(ParamTag {
                captured_type: caps[1].to_string(),
                raw_description: caps
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            });
        }
    }

    tags
}
