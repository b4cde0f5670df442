use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ContentBlock, InlineSpan};

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Render cleaned section prose into an ordered block sequence.
///
/// Lines are classified top to bottom. Contiguous pipe-prefixed lines are
/// buffered and collapse into one `Table` block positioned where the first
/// of them appeared; a buffer shorter than three lines (header, separator,
/// body) is discarded without emitting anything. Every other line maps to
/// exactly one block, with Paragraph as the total fallback, so this never
/// fails on arbitrary input.
pub fn render_blocks(text: &str) -> Vec<ContentBlock> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut blocks = Vec::with_capacity(lines.len());
    let mut table_buffer: Vec<&str> = Vec::new();

    for (i, &line) in lines.iter().enumerate() {
        if line.starts_with('|') {
            table_buffer.push(line);
            if i == lines.len() - 1 {
                if let Some(table) = parse_table(&table_buffer) {
                    blocks.push(table);
                }
            }
            continue;
        }

        if !table_buffer.is_empty() {
            if let Some(table) = parse_table(&table_buffer) {
                blocks.push(table);
            }
            table_buffer.clear();
        }

        blocks.push(classify_line(line));
    }

    blocks
}

fn classify_line(line: &str) -> ContentBlock {
    if line.is_empty() {
        return ContentBlock::Spacer;
    }

    if let Some(text) = line.strip_prefix("### ") {
        return ContentBlock::Heading {
            level: 3,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return ContentBlock::Heading {
            level: 2,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return ContentBlock::Heading {
            level: 1,
            text: text.to_string(),
        };
    }

    if let Some(content) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return ContentBlock::ListItem {
            ordered: false,
            index_label: None,
            spans: parse_spans(content),
        };
    }

    if let Some(found) = ORDERED_RE.find(line) {
        let label = &line[..found.end()];
        let content = line[found.end()..].trim();
        return ContentBlock::ListItem {
            ordered: true,
            index_label: Some(label.to_string()),
            spans: parse_spans(content),
        };
    }

    ContentBlock::Paragraph {
        spans: parse_spans(line),
    }
}

/// Parse a buffered run of pipe lines as a table: header row, `---`
/// separator row, body rows. Shorter buffers are malformed and yield
/// nothing.
fn parse_table(buffer: &[&str]) -> Option<ContentBlock> {
    if buffer.len() < 3 {
        return None;
    }

    let mut rows: Vec<Vec<String>> = buffer
        .iter()
        .map(|row| {
            let content = row.trim();
            let content = content.strip_prefix('|').unwrap_or(content);
            let content = content.strip_suffix('|').unwrap_or(content);
            content
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    let header = rows.remove(0);
    // rows[0] is now the |---|---| separator line
    let body = rows.split_off(1);

    Some(ContentBlock::Table { header, rows: body })
}

/// Split content on `**...**` markers into emphasis-flagged spans.
/// Segments between markers stay plain; marker interiors are emphasized
/// with the markers stripped. Order is preserved; empty segments are
/// dropped.
fn parse_spans(content: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in BOLD_RE.captures_iter(content) {
        let full = caps.get(0).expect("capture 0 is the whole match");
        let before = &content[last..full.start()];
        if !before.is_empty() {
            spans.push(InlineSpan::plain(before));
        }
        let inner = caps.get(1).map_or("", |m| m.as_str());
        if !inner.is_empty() {
            spans.push(InlineSpan::emphasized(inner));
        }
        last = full.end();
    }

    let tail = &content[last..];
    if !tail.is_empty() {
        spans.push(InlineSpan::plain(tail));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let blocks = render_blocks("# Top\n## Middle\n### Inner\n#### Deep");
        assert_eq!(
            blocks[0],
            ContentBlock::Heading {
                level: 1,
                text: "Top".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            ContentBlock::Heading {
                level: 2,
                text: "Middle".to_string()
            }
        );
        assert_eq!(
            blocks[2],
            ContentBlock::Heading {
                level: 3,
                text: "Inner".to_string()
            }
        );
        // #### has no rule and falls through to a paragraph.
        assert!(matches!(blocks[3], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_simple_table() {
        let blocks = render_blocks("| A | B |\n|---|---|\n| 1 | 2 |");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            ContentBlock::Table {
                header: vec!["A".to_string(), "B".to_string()],
                rows: vec![vec!["1".to_string(), "2".to_string()]],
            }
        );
    }

    #[test]
    fn test_table_flushes_before_following_line() {
        let blocks = render_blocks("| A | B |\n|---|---|\n| 1 | 2 |\nAfter the table.");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], ContentBlock::Table { .. }));
        assert!(matches!(blocks[1], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_short_table_buffer_is_dropped() {
        let blocks = render_blocks("| A | B |\n|---|---|\nNot a table row.");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_short_table_buffer_at_end_of_input() {
        let blocks = render_blocks("Intro.\n| A | B |\n|---|---|");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_bold_paragraph_spans() {
        let blocks = render_blocks("**bold** and plain");
        assert_eq!(
            blocks[0],
            ContentBlock::Paragraph {
                spans: vec![
                    InlineSpan::emphasized("bold"),
                    InlineSpan::plain(" and plain"),
                ]
            }
        );
    }

    #[test]
    fn test_unordered_list_with_emphasis() {
        let blocks = render_blocks("- **Safety**: stay alert");
        assert_eq!(
            blocks[0],
            ContentBlock::ListItem {
                ordered: false,
                index_label: None,
                spans: vec![
                    InlineSpan::emphasized("Safety"),
                    InlineSpan::plain(": stay alert"),
                ]
            }
        );
    }

    #[test]
    fn test_star_marker_list_item() {
        let blocks = render_blocks("* second style");
        assert_eq!(
            blocks[0],
            ContentBlock::ListItem {
                ordered: false,
                index_label: None,
                spans: vec![InlineSpan::plain("second style")],
            }
        );
    }

    #[test]
    fn test_ordered_list_label() {
        let blocks = render_blocks("12. Visit the museum");
        assert_eq!(
            blocks[0],
            ContentBlock::ListItem {
                ordered: true,
                index_label: Some("12.".to_string()),
                spans: vec![InlineSpan::plain("Visit the museum")],
            }
        );
    }

    #[test]
    fn test_blank_lines_become_spacers() {
        let blocks = render_blocks("One.\n\nTwo.");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], ContentBlock::Spacer);
    }

    #[test]
    fn test_block_order_matches_line_order() {
        let text = "## Costs\n| Item | USD |\n|---|---|\n| Coffee | 3 |\n- cheap\nDone.";
        let blocks = render_blocks(text);
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], ContentBlock::Heading { level: 2, .. }));
        assert!(matches!(blocks[1], ContentBlock::Table { .. }));
        assert!(matches!(blocks[2], ContentBlock::ListItem { .. }));
        assert!(matches!(blocks[3], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_table_cells_with_boundary_pipes() {
        let blocks = render_blocks("|Item|Cost (USD)|\n|---|---|\n|Coffee|3.50|\n|Meal|12.00|");
        let ContentBlock::Table { header, rows } = &blocks[0] else {
            panic!("expected a table");
        };
        assert_eq!(header, &["Item", "Cost (USD)"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Meal", "12.00"]);
    }
}
