//! Normalizes analyzer comment text into plain strings.

/// Strip comment syntax from `raw` and re-indent multi-line bodies.
///
/// Line comments lose their `//` marker; block comments lose the `/*`/`*/`
/// pair and one leading `*` continuation per line, with blank lines
/// dropped. Text carrying no comment marker is returned trimmed.
/// Normalizing already-normalized text is a no-op.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = raw.trim();
    if let Some(rest) = text.strip_prefix("//") {
        return rest.trim().to_string();
    }
    if let Some(rest) = text.strip_prefix("/*") {
        let body = rest.strip_suffix("*/").unwrap_or(rest);
        return body
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix('*').map_or(line, str::trim)
            })
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_line_comment_marker_stripped() {
        assert_eq!(normalize("// note"), "note");
        assert_eq!(normalize("  //note  "), "note");
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(normalize("  already plain  "), "already plain");
    }

    #[test]
    fn test_block_comment_single_line() {
        assert_eq!(normalize("/* counts retries */"), "counts retries");
    }

    #[test]
    fn test_block_comment_with_continuation_markers() {
        let raw = "/*\n * Tracks the cursor.\n * Reset on load.\n */";
        assert_eq!(normalize(raw), "Tracks the cursor.\nReset on load.");
    }

    #[test]
    fn test_block_comment_drops_blank_lines() {
        let raw = "/*\n * first\n *\n * second\n */";
        assert_eq!(normalize(raw), "first\nsecond");
    }

    #[test]
    fn test_block_comment_without_close_marker() {
        assert_eq!(normalize("/* unterminated"), "unterminated");
    }

    #[test]
    fn test_doc_comment_double_star() {
        assert_eq!(normalize("/** doc text */"), "doc text");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "// note",
            "/*\n * Tracks the cursor.\n * Reset on load.\n */",
            "  plain words  ",
            "",
            "/* one liner */",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
