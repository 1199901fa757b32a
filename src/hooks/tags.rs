//! `@since` and `@param` tag normalization.

use crate::model::{ParamRecord, ParamTag, TagMap};

/// Codename spellings substituted into `@since` values.
const CODENAME_SPELLINGS: [(&str, &str); 2] = [
    ("Theme_Blvd", "Theme Blvd Framework"),
    ("Jump_Start", "Jump Start"),
];

/// Rewrite a raw `@since` value into its human-readable form.
///
/// Absent tag → empty string; values without a codename pass through
/// unchanged.
pub fn normalize_since(tags: &TagMap) -> String {
    let mut since = match tags.since.as_deref() {
        Some(raw) => raw.to_string(),
        None => return String::new(),
    };

    for (codename, spelling) in CODENAME_SPELLINGS {
        since = since.replacen(codename, spelling, 1);
    }

    since
}

/// Normalize the raw `@param` captures into `{name, type, description}`
/// records, in input order.
///
/// The tokenizer's first-token capture holds the PHP type, so the variable
/// name has to be recovered from the description text. Malformed entries
/// keep an empty name rather than being dropped.
pub fn format_params(tags: &TagMap) -> Vec<ParamRecord> {
    tags.params.iter().map(format_param).collect()
}

fn format_param(tag: &ParamTag) -> ParamRecord {
    let raw = tag.raw_description.as_str();

    let name = if raw.starts_with('$') {
        match raw.find(' ') {
            Some(space) => &raw[..space],
            None => "",
        }
    } else {
        ""
    };

    let mut description = if name.is_empty() {
        raw.to_string()
    } else {
        raw.replacen(name, "", 1)
    };

    // ` {` opens a nested argument block; its body is never parsed.
    if let Some(brace) = description.find(" {") {
        description.truncate(brace);
    }

    ParamRecord {
        name: name.to_string(),
        ty: tag.captured_type.clone(),
        description: description.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(captured_type: &str, raw_description: &str) -> TagMap {
        TagMap {
            since: None,
            params: vec![ParamTag {
                captured_type: captured_type.to_string(),
                raw_description: raw_description.to_string(),
            }],
        }
    }

    fn since(value: &str) -> TagMap {
        TagMap {
            since: Some(value.to_string()),
            params: Vec::new(),
        }
    }

    #[test]
    fn missing_since_is_empty() {
        assert_eq!(normalize_since(&TagMap::default()), "");
    }

    #[test]
    fn since_codenames_rewritten() {
        assert_eq!(
            normalize_since(&since("Theme_Blvd 2.0.0")),
            "Theme Blvd Framework 2.0.0"
        );
        assert_eq!(normalize_since(&since("Jump_Start 1.0.0")), "Jump Start 1.0.0");
    }

    #[test]
    fn plain_since_unchanged() {
        assert_eq!(normalize_since(&since("2.5.1")), "2.5.1");
    }

    #[test]
    fn param_name_recovered_from_description() {
        let records = format_params(&param(
            "string",
            "$location The location being rendered. {default}",
        ));
        assert_eq!(
            records[0],
            ParamRecord {
                name: "$location".to_string(),
                ty: "string".to_string(),
                description: "The location being rendered.".to_string(),
            }
        );
    }

    #[test]
    fn param_without_sigil_keeps_empty_name() {
        let records = format_params(&param("bool", "Whether to display."));
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].ty, "bool");
        assert_eq!(records[0].description, "Whether to display.");
    }

    #[test]
    fn nested_block_opener_truncated() {
        let records = format_params(&param("array", "$args {"));
        assert_eq!(records[0].name, "$args");
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn sigil_only_description_keeps_empty_name() {
        let records = format_params(&param("string", "$var"));
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].description, "$var");
    }

    #[test]
    fn order_preserved_and_nothing_dropped() {
        let tags = TagMap {
            since: None,
            params: vec![
                ParamTag {
                    captured_type: "string".to_string(),
                    raw_description: "$b Second letter.".to_string(),
                },
                ParamTag {
                    captured_type: "string".to_string(),
                    raw_description: "$a First letter.".to_string(),
                },
                ParamTag {
                    captured_type: "int".to_string(),
                    raw_description: String::new(),
                },
            ],
        };
        let records = format_params(&tags);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "$b");
        assert_eq!(records[1].name, "$a");
        assert_eq!(records[2].name, "");
    }
}
