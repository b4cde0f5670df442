pub mod blocks;
pub mod payloads;
pub mod report;

pub use blocks::{ContentBlock, InlineSpan};
pub use payloads::{
    ChartPayload, CostComparison, CurrencyPayload, GeoPoint, ItineraryMapPayload, ItineraryPoint,
    SafetyHotspot, SafetyMapPayload, TippingEntry,
};
pub use report::{
    deserialize_payload, DecodedReport, DecodedSection, PayloadSet, PayloadTag, ReportSections,
    SectionKind,
};
