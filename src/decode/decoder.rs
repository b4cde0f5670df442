use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::debug;

use crate::decode::extractor::extract_payloads;
use crate::decode::renderer::render_blocks;
use crate::decode::splitter::split_sections;
use crate::types::{DecodedReport, DecodedSection, SectionKind};

/// Decode one section's raw text: extract its tagged payloads, then render
/// the remaining prose into blocks. Pure function.
pub fn decode_section(text: &str, kind: SectionKind) -> DecodedSection {
    let extraction = extract_payloads(text, kind);
    let blocks = render_blocks(&extraction.clean_text);
    DecodedSection {
        clean_text: extraction.clean_text,
        payloads: extraction.payloads,
        blocks,
    }
}

/// Decode a whole raw report: split on the section sentinel, then decode
/// each section. Pure convenience entry point; see [`ReportDecoder`] for
/// the memoizing variant.
pub fn decode_report(raw: &str) -> DecodedReport {
    let sections = split_sections(raw);
    DecodedReport {
        visa: decode_section(&sections.visa, SectionKind::Visa),
        safety: decode_section(&sections.safety, SectionKind::Safety),
        culture: decode_section(&sections.culture, SectionKind::Culture),
        itinerary: decode_section(&sections.itinerary, SectionKind::Itinerary),
    }
}

/// Memoizing front-end over [`decode_section`].
///
/// Decoding is referentially transparent, so results are cached per
/// section text. Re-rendering the same report (tab switches, unrelated UI
/// updates) costs a cache lookup instead of a re-parse; a new report text
/// simply misses and evicts the oldest entries.
pub struct ReportDecoder {
    cache: LruCache<(SectionKind, String), Arc<DecodedSection>>,
}

const DEFAULT_CACHE_CAPACITY: usize = 16;

impl ReportDecoder {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        ReportDecoder {
            cache: LruCache::new(capacity),
        }
    }

    /// Decode one section, reusing a cached result when the same text was
    /// decoded before.
    pub fn decode_section(&mut self, text: &str, kind: SectionKind) -> Arc<DecodedSection> {
        let key = (kind, text.to_string());
        if let Some(cached) = self.cache.get(&key) {
            debug!(
                target: "travel_report::decode",
                section = kind.as_str(),
                "section cache hit"
            );
            return Arc::clone(cached);
        }

        debug!(
            target: "travel_report::decode",
            section = kind.as_str(),
            bytes = text.len(),
            "decoding section"
        );
        let decoded = Arc::new(decode_section(text, kind));
        self.cache.put(key, Arc::clone(&decoded));
        decoded
    }

    /// Decode a whole raw report through the section cache.
    pub fn decode_report(&mut self, raw: &str) -> DecodedReport {
        let sections = split_sections(raw);
        DecodedReport {
            visa: (*self.decode_section(&sections.visa, SectionKind::Visa)).clone(),
            safety: (*self.decode_section(&sections.safety, SectionKind::Safety)).clone(),
            culture: (*self.decode_section(&sections.culture, SectionKind::Culture)).clone(),
            itinerary: (*self.decode_section(&sections.itinerary, SectionKind::Itinerary)).clone(),
        }
    }
}

impl Default for ReportDecoder {
    fn default() -> Self {
        ReportDecoder::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::splitter::SECTION_BREAK;
    use crate::types::ContentBlock;

    #[test]
    fn test_decode_section_end_to_end() {
        let text = "## Getting Around\n- **Metro**: cheap and fast\n<itinerary_data>{\"center\":{\"lat\":1.0,\"lng\":2.0},\"points\":[]}</itinerary_data>";
        let decoded = decode_section(text, SectionKind::Itinerary);

        assert!(decoded.payloads.itinerary_map().is_some());
        assert!(!decoded.clean_text.contains("itinerary_data"));
        assert!(matches!(
            decoded.blocks[0],
            ContentBlock::Heading { level: 2, .. }
        ));
        assert!(matches!(decoded.blocks[1], ContentBlock::ListItem { .. }));
    }

    #[test]
    fn test_decode_report_fills_missing_sections() {
        let raw = format!("Visa notes.{}Safety notes.", SECTION_BREAK);
        let report = decode_report(&raw);

        assert_eq!(report.visa.clean_text, "Visa notes.");
        assert_eq!(report.culture.clean_text, "Information unavailable.");
        assert_eq!(report.itinerary.clean_text, "Itinerary unavailable.");
        assert!(report.culture.payloads.is_empty());
    }

    #[test]
    fn test_decoder_memoizes_per_section_text() {
        let mut decoder = ReportDecoder::default();
        let first = decoder.decode_section("Same text.", SectionKind::Visa);
        let second = decoder.decode_section("Same text.", SectionKind::Visa);

        assert!(Arc::ptr_eq(&first, &second));

        let other = decoder.decode_section("Different text.", SectionKind::Visa);
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_decoder_keys_on_section_kind_too() {
        let text = "<safety_data>{\"center\":{\"lat\":0.0,\"lng\":0.0},\"hotspots\":[]}</safety_data>";
        let mut decoder = ReportDecoder::default();

        let as_safety = decoder.decode_section(text, SectionKind::Safety);
        let as_visa = decoder.decode_section(text, SectionKind::Visa);

        assert!(as_safety.payloads.safety_map().is_some());
        // The visa vocabulary is empty, so the same text keeps its tags.
        assert!(as_visa.payloads.is_empty());
    }
}
