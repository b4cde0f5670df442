use crate::types::{ReportSections, SectionKind};

/// Sentinel the model is instructed to place between report sections.
pub const SECTION_BREAK: &str = "|||SECTION_BREAK|||";

/// Split a raw report into its four named sections.
///
/// Segments map positionally onto visa, safety, culture, itinerary. A
/// missing or blank segment is replaced by that section's placeholder
/// text, so the result always carries all four sections. Total function;
/// no validation of segment content beyond trimming.
pub fn split_sections(raw: &str) -> ReportSections {
    let mut parts = raw.split(SECTION_BREAK);
    let mut next = |kind: SectionKind| -> String {
        match parts.next().map(str::trim) {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => kind.placeholder().to_string(),
        }
    };

    ReportSections {
        visa: next(SectionKind::Visa),
        safety: next(SectionKind::Safety),
        culture: next(SectionKind::Culture),
        itinerary: next(SectionKind::Itinerary),
    }
}
