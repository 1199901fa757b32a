//! Data model for harvested hook documentation — input and output shapes.

use serde::Serialize;

/// Kind of extensibility point a call site represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Fire-and-forget call point with no return value (`do_action`).
    Action,
    /// Value-transforming call point (`apply_filters`).
    Filter,
}

/// One documented hook, ready for serialization.
///
/// Field declaration order is the field order downstream tooling reads in
/// the JSON output.
#[derive(Debug, Serialize)]
pub struct HookRecord {
    pub name: String,
    pub summary: String,
    pub desc: String,
    pub since: String,
    pub params: Vec<ParamRecord>,
    pub file: String,
}

/// A normalized `@param` entry.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ParamRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

/// One doc comment and the code following it, as produced by the tokenizer.
#[derive(Debug)]
pub struct SourceUnit {
    /// Complete comment block, including the `/**` and `*/` delimiters.
    pub raw: String,
    /// Source text between this comment and the next one (or end of file),
    /// leading whitespace trimmed.
    pub code: String,
    pub tags: TagMap,
    pub file_path: String,
}

/// Structured tags tokenized out of a doc comment.
#[derive(Debug, Default)]
pub struct TagMap {
    /// First `@since` value, verbatim.
    pub since: Option<String>,
    /// `@param` entries in source order.
    pub params: Vec<ParamTag>,
}

/// Raw `@param` capture.
///
/// The first token after the tag is the PHP type, landing in the slot a
/// general-purpose tag parser reserves for the parameter name; recovering
/// the `$name` from the free text is left to the formatting step.
#[derive(Debug)]
pub struct ParamTag {
    pub captured_type: String,
    pub raw_description: String,
}

/// The two ordered result collections.
#[derive(Debug, Default, Serialize)]
pub struct HookSet {
    pub actions: Vec<HookRecord>,
    pub filters: Vec<HookRecord>,
}
