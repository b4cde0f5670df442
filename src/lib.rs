//! travel-report-rs: a typed decoder for AI-generated travel reports
//!
//! This library takes the single text blob a generative model returns for a
//! travel query — markdown prose interleaved with delimiter-separated
//! sections and tag-wrapped inline JSON — and deterministically decodes it
//! into a typed document: four named sections, their structured payloads
//! (cost chart, currency rate, tipping guide, two map datasets), and an
//! ordered sequence of content blocks ready for rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use travel_report_rs::{decode_report, SectionKind, SECTION_BREAK};
//!
//! let raw = format!(
//!     "## Visa\n- **eVisa**: available online{brk}Stay alert.{brk}Tip 10%.{brk}Day 1: arrive.",
//!     brk = SECTION_BREAK
//! );
//!
//! let report = decode_report(&raw);
//! assert_eq!(report.get(SectionKind::Safety).clean_text, "Stay alert.");
//! assert!(report.visa.payloads.is_empty());
//! ```
//!
//! Decoding is synchronous, pure, and never fails on arbitrary text:
//! missing sections fall back to placeholders, malformed payload JSON is
//! logged and dropped without leaking into the prose, and any line the
//! renderer does not recognize becomes a plain paragraph.

pub mod decode;
pub mod error;
pub mod surface;
pub mod types;

pub use decode::{
    decode_report, decode_section, extract_payloads, extract_tags, render_blocks, split_sections,
    Extraction, ReportDecoder, SECTION_BREAK,
};
pub use error::{ReportError, Result};
pub use surface::{speakable_text, RiskColor, TippingIcon};
pub use types::{
    deserialize_payload, ChartPayload, ContentBlock, CostComparison, CurrencyPayload,
    DecodedReport, DecodedSection, GeoPoint, InlineSpan, ItineraryMapPayload, ItineraryPoint,
    PayloadSet, PayloadTag, ReportSections, SafetyHotspot, SafetyMapPayload, SectionKind,
    TippingEntry,
};

#[cfg(feature = "cli")]
pub mod cli;
