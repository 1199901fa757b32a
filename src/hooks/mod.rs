//! Hook extraction pipeline — one SourceUnit in, at most one HookRecord out.
//!
//! `assemble` runs the cheap classification first and only then the name,
//! description, and tag steps; `harvest` folds the per-unit results into
//! the two ordered collections. Every failure mode along the way is a
//! typed reject that silently skips the unit — a unit either produces a
//! complete record or nothing.

pub mod classify;
pub mod describe;
pub mod name;
pub mod tags;

use crate::model::{HookKind, HookRecord, HookSet, SourceUnit};

/// Configuration for a harvest run.
pub struct HarvestConfig {
    /// Required prefix on every emitted hook name.
    pub namespace: String,
    /// Path prefix stripped from each record's file field.
    pub source_root: String,
}

/// Assemble at most one record from a unit.
///
/// A hook must have at least a name and a summary; anything less is
/// skipped.
pub fn assemble(unit: &SourceUnit, config: &HarvestConfig) -> Option<(HookKind, HookRecord)> {
    let kind = classify::classify(&unit.code)?;
    let name = name::resolve(kind, &unit.code, &config.namespace).ok()?;
    let info = describe::extract(&unit.raw);

    if name.is_empty() || info.summary.is_empty() {
        return None;
    }

    let record = HookRecord {
        name,
        summary: info.summary,
        desc: info.desc,
        since: tags::normalize_since(&unit.tags),
        params: tags::format_params(&unit.tags),
        file: strip_source_root(&unit.file_path, &config.source_root),
    };

    Some((kind, record))
}

/// Fold a sequence of units into the two ordered collections.
///
/// Output order within each collection matches unit input order; nothing
/// is reordered or deduplicated.
pub fn harvest(units: impl IntoIterator<Item = SourceUnit>, config: &HarvestConfig) -> HookSet {
    let mut set = HookSet::default();

    for unit in units {
        if let Some((kind, record)) = assemble(&unit, config) {
            match kind {
                HookKind::Action => set.actions.push(record),
                HookKind::Filter => set.filters.push(record),
            }
        }
    }

    set
}

fn strip_source_root(path: &str, root: &str) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagMap;

    fn config(namespace: &str) -> HarvestConfig {
        HarvestConfig {
            namespace: namespace.to_string(),
            source_root: "src/".to_string(),
        }
    }

    fn unit(raw: &str, code: &str) -> SourceUnit {
        SourceUnit {
            raw: raw.to_string(),
            code: code.to_string(),
            tags: TagMap::default(),
            file_path: "src/framework/header.php".to_string(),
        }
    }

    const DOCUMENTED: &str = "/**\n * Fires before the header.\n *\n * @since 1.0.0\n */";
    const TAGS_ONLY: &str = "/**\n * @since 1.0.0\n */";

    #[test]
    fn assembles_action_record() {
        let unit = unit(DOCUMENTED, "do_action( 'tb_header_before' );");
        let (kind, record) = assemble(&unit, &config("tb")).unwrap();
        assert_eq!(kind, HookKind::Action);
        assert_eq!(record.name, "tb_header_before");
        assert_eq!(record.summary, "Fires before the header.");
        assert_eq!(record.file, "framework/header.php");
    }

    #[test]
    fn unclassified_code_is_skipped() {
        let unit = unit(DOCUMENTED, "echo esc_html( $text );");
        assert!(assemble(&unit, &config("tb")).is_none());
    }

    #[test]
    fn foreign_namespace_is_skipped() {
        let unit = unit(DOCUMENTED, "do_action( 'xx_header_before' );");
        assert!(assemble(&unit, &config("tb")).is_none());
    }

    #[test]
    fn valid_name_without_summary_is_skipped() {
        let unit = unit(TAGS_ONLY, "do_action( 'tb_header_before' );");
        assert!(assemble(&unit, &config("tb")).is_none());
    }

    #[test]
    fn valid_summary_without_name_is_skipped() {
        // An empty name can only resolve under an empty namespace prefix;
        // the gate still rejects it.
        let unit = unit(DOCUMENTED, "do_action( '' );");
        assert!(assemble(&unit, &config("")).is_none());
    }

    #[test]
    fn harvest_partitions_in_input_order() {
        let units = vec![
            unit(DOCUMENTED, "do_action( 'tb_one' );"),
            unit(DOCUMENTED, "$v = apply_filters( 'tb_two', $v );"),
            unit(DOCUMENTED, "do_action( 'xx_foreign' );"),
            unit(DOCUMENTED, "do_action( 'tb_three' );"),
        ];
        let set = harvest(units, &config("tb"));

        let actions: Vec<&str> = set.actions.iter().map(|r| r.name.as_str()).collect();
        let filters: Vec<&str> = set.filters.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(actions, ["tb_one", "tb_three"]);
        assert_eq!(filters, ["tb_two"]);
    }

    #[test]
    fn file_outside_source_root_kept_verbatim() {
        let mut u = unit(DOCUMENTED, "do_action( 'tb_one' );");
        u.file_path = "includes/header.php".to_string();
        let (_, record) = assemble(&u, &config("tb")).unwrap();
        assert_eq!(record.file, "includes/header.php");
    }
}
