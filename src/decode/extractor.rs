use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{PayloadSet, PayloadTag, SectionKind};

static CHART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<chart_data>(.*?)</chart_data>").unwrap());
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<currency_data>(.*?)</currency_data>").unwrap());
static TIPPING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tipping_data>(.*?)</tipping_data>").unwrap());
static ITINERARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<itinerary_data>(.*?)</itinerary_data>").unwrap());
static SAFETY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<safety_data>(.*?)</safety_data>").unwrap());

fn pattern(tag: PayloadTag) -> &'static Regex {
    match tag {
        PayloadTag::Chart => &CHART_RE,
        PayloadTag::Currency => &CURRENCY_RE,
        PayloadTag::Tipping => &TIPPING_RE,
        PayloadTag::ItineraryMap => &ITINERARY_RE,
        PayloadTag::SafetyMap => &SAFETY_RE,
    }
}

/// Result of payload extraction over one section text.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Section prose with every recognized tag block (tags included)
    /// excised and the result trimmed
    pub clean_text: String,
    /// Parsed payloads, one slot per tag that matched with valid JSON
    pub payloads: PayloadSet,
}

/// Extract the tagged payloads a section's vocabulary allows.
pub fn extract_payloads(text: &str, kind: SectionKind) -> Extraction {
    extract_tags(text, kind.tags())
}

/// Scan `text` for the first `<tag>...</tag>` block of each given tag.
///
/// A matched block is excised from the working text whether or not its
/// interior parses as JSON; a parse failure only costs that one payload.
/// This keeps a corrupt block from leaking raw JSON into rendered prose
/// and from blocking extraction of sibling tags. Only the first occurrence
/// of each tag is consumed; repeats are left in place.
pub fn extract_tags(text: &str, tags: &[PayloadTag]) -> Extraction {
    let mut working = text.to_string();
    let mut payloads = PayloadSet::new();

    for &tag in tags {
        let Some(found) = pattern(tag).find(&working) else {
            continue;
        };

        let open_len = tag.as_str().len() + 2;
        let close_len = tag.as_str().len() + 3;
        let interior = &working[found.start() + open_len..found.end() - close_len];

        match serde_json::from_str::<Value>(interior) {
            Ok(value) => {
                debug!(
                    target: "travel_report::extract",
                    tag = tag.as_str(),
                    bytes = interior.len(),
                    "extracted tagged payload"
                );
                payloads.insert(tag, value);
            }
            Err(err) => {
                warn!(
                    target: "travel_report::extract",
                    tag = tag.as_str(),
                    error = %err,
                    "malformed payload JSON; dropping payload but stripping its block"
                );
            }
        }

        let range = found.range();
        working.replace_range(range, "");
    }

    Extraction {
        clean_text: working.trim().to_string(),
        payloads,
    }
}
