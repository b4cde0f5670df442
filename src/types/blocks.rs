use serde::{Deserialize, Serialize};

/// A run of text with an emphasis flag, produced by splitting on `**...**`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub text: String,
    pub emphasized: bool,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        InlineSpan {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// One rendered block of report prose.
///
/// The renderer emits these in input-line order; a pipe table collapses its
/// contiguous lines into a single `Table` block positioned where the first
/// pipe line appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Markdown heading, levels 1-3. Heading text carries no inline spans.
    Heading { level: u8, text: String },
    /// A single list item. `index_label` holds the `1.` style marker for
    /// ordered items and is `None` for bulleted ones.
    ListItem {
        ordered: bool,
        #[serde(default)]
        #[serde(skip_serializing_if = "Option::is_none")]
        index_label: Option<String>,
        spans: Vec<InlineSpan>,
    },
    /// Pipe table: header cells plus body rows. The `---` separator row is
    /// consumed during parsing and never appears here.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Blank line in the source text
    Spacer,
    /// Any line matching no structural rule
    Paragraph { spans: Vec<InlineSpan> },
}

impl ContentBlock {
    /// Get a human-readable description of the block
    pub fn describe(&self) -> String {
        match self {
            ContentBlock::Heading { level, text } => format!("H{}: {}", level, text),
            ContentBlock::ListItem {
                ordered,
                index_label,
                spans,
            } => {
                let marker = if *ordered {
                    index_label.as_deref().unwrap_or("1.")
                } else {
                    "•"
                };
                format!("{} {}", marker, join_spans(spans))
            }
            ContentBlock::Table { header, rows } => {
                format!("Table: {} columns, {} rows", header.len(), rows.len())
            }
            ContentBlock::Spacer => String::new(),
            ContentBlock::Paragraph { spans } => join_spans(spans),
        }
    }
}

fn join_spans(spans: &[InlineSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
