//! Human-readable summary renderer for semantic diffs.

use crate::diff::model::SemanticDiff;
use crate::model::ProfilePair;

/// Render a Markdown summary of a [`SemanticDiff`].
///
/// Informational only; the structured diff is the source of truth.
pub fn render_human_summary(diff: &SemanticDiff) -> String {
    let mut out = String::new();

    out.push_str("## Semantic Diff\n\n");
    if !diff.from.is_empty() || !diff.to.is_empty() {
        out.push_str(&format!("`{}` -> `{}`\n\n", diff.from, diff.to));
    }
    out.push_str(&format!("**Summary**: {}\n\n", diff.summary()));

    if diff.is_empty() {
        out.push_str("_No semantic changes detected._\n");
        return out;
    }

    if !diff.entities_added.is_empty() {
        out.push_str(&format!(
            "### Entities Added ({})\n\n",
            diff.entities_added.len()
        ));
        for id in &diff.entities_added {
            out.push_str(&format!("- `{id}`\n"));
        }
        out.push('\n');
    }

    if !diff.entities_removed.is_empty() {
        out.push_str(&format!(
            "### Entities Removed ({})\n\n",
            diff.entities_removed.len()
        ));
        for id in &diff.entities_removed {
            out.push_str(&format!("- `{id}`\n"));
        }
        out.push('\n');
    }

    if !diff.properties_modified.is_empty() {
        out.push_str(&format!(
            "### Modified Entities ({})\n\n",
            diff.properties_modified.len()
        ));
        for (id, change) in &diff.properties_modified {
            out.push_str(&format!("- `{id}`\n"));
            for pair in &change.added {
                out.push_str(&format!("  - + {}\n", pair_text(pair)));
            }
            for pair in &change.removed {
                out.push_str(&format!("  - - {}\n", pair_text(pair)));
            }
        }
        out.push('\n');
    }

    if !diff.relationships_added.is_empty() || !diff.relationships_removed.is_empty() {
        out.push_str("### Relationships\n\n");
        for edge in &diff.relationships_added {
            out.push_str(&format!("- + {edge}\n"));
        }
        for edge in &diff.relationships_removed {
            out.push_str(&format!("- - {edge}\n"));
        }
        out.push('\n');
    }

    out
}

fn pair_text((predicate, object): &ProfilePair) -> String {
    format!("{predicate} {object}")
}
