//! Line-level diff between the submitted code and the improved code.
//!
//! Lines are compared with `similar` and consecutive lines sharing a tag are
//! coalesced into one [`DiffPart`], so a renderer can emit one styled run per
//! change block.

use similar::{ChangeTag, TextDiff};

/// Classification of a diff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

/// A run of one or more whole lines with the same classification.
///
/// `value` keeps the original line terminators, so concatenating the
/// non-`Added` parts reproduces the original text and the non-`Removed` parts
/// reproduce the improved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPart {
    pub kind: DiffKind,
    pub value: String,
}

/// Added/removed line counts, shown in the Changes tab title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

/// Computes the coalesced line diff from `original` to `improved`.
///
/// Two empty inputs produce no parts; identical inputs produce a single
/// `Unchanged` part.
pub fn line_diff(original: &str, improved: &str) -> Vec<DiffPart> {
    let diff = TextDiff::from_lines(original, improved);
    let mut parts: Vec<DiffPart> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Insert => DiffKind::Added,
            ChangeTag::Delete => DiffKind::Removed,
            ChangeTag::Equal => DiffKind::Unchanged,
        };
        match parts.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(change.value()),
            _ => parts.push(DiffPart { kind, value: change.value().to_owned() }),
        }
    }

    parts
}

/// Counts added and removed lines across `parts`.
pub fn diff_stats(parts: &[DiffPart]) -> DiffStats {
    parts.iter().fold(DiffStats::default(), |mut stats, part| {
        let lines = part.value.lines().count();
        match part.kind {
            DiffKind::Added => stats.added += lines,
            DiffKind::Removed => stats.removed += lines,
            DiffKind::Unchanged => {}
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_text_is_a_single_unchanged_run() {
        let code = "let a = 1;\nlet b = 2;\n";
        let parts = line_diff(code, code);
        assert_eq!(
            parts,
            vec![DiffPart { kind: DiffKind::Unchanged, value: code.to_owned() }]
        );
        assert_eq!(diff_stats(&parts), DiffStats::default());
    }

    #[test]
    fn empty_inputs_yield_no_parts() {
        assert!(line_diff("", "").is_empty());
    }

    #[test]
    fn replaced_line_becomes_removed_then_added() {
        let parts = line_diff("a\nb\nc\n", "a\nB\nc\n");
        assert_eq!(
            parts,
            vec![
                DiffPart { kind: DiffKind::Unchanged, value: "a\n".into() },
                DiffPart { kind: DiffKind::Removed, value: "b\n".into() },
                DiffPart { kind: DiffKind::Added, value: "B\n".into() },
                DiffPart { kind: DiffKind::Unchanged, value: "c\n".into() },
            ]
        );
        assert_eq!(diff_stats(&parts), DiffStats { added: 1, removed: 1 });
    }

    #[test]
    fn consecutive_insertions_are_coalesced() {
        let parts = line_diff("a\n", "a\nb\nc\n");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], DiffPart { kind: DiffKind::Added, value: "b\nc\n".into() });
    }

    #[test]
    fn missing_improved_code_removes_everything() {
        let parts = line_diff("x\ny\n", "");
        assert_eq!(parts, vec![DiffPart { kind: DiffKind::Removed, value: "x\ny\n".into() }]);
    }

    #[test]
    fn parts_reconstruct_both_sides() {
        let original = "one\ntwo\nthree";
        let improved = "one\n2\nthree\nfour\n";
        let parts = line_diff(original, improved);
        let old: String = parts
            .iter()
            .filter(|p| p.kind != DiffKind::Added)
            .map(|p| p.value.as_str())
            .collect();
        let new: String = parts
            .iter()
            .filter(|p| p.kind != DiffKind::Removed)
            .map(|p| p.value.as_str())
            .collect();
        assert_eq!(old, original);
        assert_eq!(new, improved);
    }
}
