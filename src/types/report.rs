use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ReportError, Result};
use crate::types::blocks::ContentBlock;
use crate::types::payloads::{
    ChartPayload, CurrencyPayload, ItineraryMapPayload, SafetyMapPayload, TippingEntry,
};

/// The four report sections, in the fixed order the raw report delivers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Visa,
    Safety,
    Culture,
    Itinerary,
}

impl SectionKind {
    /// All sections in wire order
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Visa,
        SectionKind::Safety,
        SectionKind::Culture,
        SectionKind::Itinerary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Visa => "visa",
            SectionKind::Safety => "safety",
            SectionKind::Culture => "culture",
            SectionKind::Itinerary => "itinerary",
        }
    }

    /// Text substituted when the section is missing from the raw report
    pub fn placeholder(&self) -> &'static str {
        match self {
            SectionKind::Itinerary => "Itinerary unavailable.",
            _ => "Information unavailable.",
        }
    }

    /// The ordered tag vocabulary extracted from this section
    pub fn tags(&self) -> &'static [PayloadTag] {
        match self {
            SectionKind::Visa => &[],
            SectionKind::Safety => &[PayloadTag::SafetyMap],
            SectionKind::Culture => &[
                PayloadTag::Tipping,
                PayloadTag::Chart,
                PayloadTag::Currency,
            ],
            SectionKind::Itinerary => &[PayloadTag::ItineraryMap],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "visa" => Ok(SectionKind::Visa),
            "safety" => Ok(SectionKind::Safety),
            "culture" => Ok(SectionKind::Culture),
            "itinerary" => Ok(SectionKind::Itinerary),
            other => Err(format!("unknown section `{}`", other)),
        }
    }
}

/// The exact tag names that delimit inline JSON payloads in section prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadTag {
    Chart,
    Currency,
    Tipping,
    ItineraryMap,
    SafetyMap,
}

impl PayloadTag {
    pub const ALL: [PayloadTag; 5] = [
        PayloadTag::Chart,
        PayloadTag::Currency,
        PayloadTag::Tipping,
        PayloadTag::ItineraryMap,
        PayloadTag::SafetyMap,
    ];

    /// Wire tag name, matched case-sensitively
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadTag::Chart => "chart_data",
            PayloadTag::Currency => "currency_data",
            PayloadTag::Tipping => "tipping_data",
            PayloadTag::ItineraryMap => "itinerary_data",
            PayloadTag::SafetyMap => "safety_data",
        }
    }
}

impl fmt::Display for PayloadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four raw section texts produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    pub visa: String,
    pub safety: String,
    pub culture: String,
    pub itinerary: String,
}

impl ReportSections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Visa => &self.visa,
            SectionKind::Safety => &self.safety,
            SectionKind::Culture => &self.culture,
            SectionKind::Itinerary => &self.itinerary,
        }
    }
}

/// Raw payloads extracted from one section, keyed by tag.
///
/// Values are stored as parsed JSON; typed views are produced on demand so
/// a payload whose JSON parsed but whose shape is off never blocks the rest
/// of the section. The lenient accessors (`chart()`, ...) log and return
/// `None` on a shape mismatch; the strict `try_*` variants surface the
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayloadSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chart: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tipping: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    itinerary_map: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    safety_map: Option<Value>,
}

impl PayloadSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: PayloadTag, value: Value) {
        *self.slot_mut(tag) = Some(value);
    }

    pub fn get(&self, tag: PayloadTag) -> Option<&Value> {
        self.slot(tag).as_ref()
    }

    pub fn contains(&self, tag: PayloadTag) -> bool {
        self.slot(tag).is_some()
    }

    pub fn is_empty(&self) -> bool {
        PayloadTag::ALL.iter().all(|tag| self.slot(*tag).is_none())
    }

    pub fn len(&self) -> usize {
        PayloadTag::ALL
            .iter()
            .filter(|tag| self.slot(**tag).is_some())
            .count()
    }

    /// Strict typed view of the chart payload
    pub fn try_chart(&self) -> Result<ChartPayload> {
        self.try_typed(PayloadTag::Chart)
    }

    /// Strict typed view of the currency payload
    pub fn try_currency(&self) -> Result<CurrencyPayload> {
        self.try_typed(PayloadTag::Currency)
    }

    /// Strict typed view of the tipping payload
    pub fn try_tipping(&self) -> Result<Vec<TippingEntry>> {
        self.try_typed(PayloadTag::Tipping)
    }

    /// Strict typed view of the itinerary map payload
    pub fn try_itinerary_map(&self) -> Result<ItineraryMapPayload> {
        self.try_typed(PayloadTag::ItineraryMap)
    }

    /// Strict typed view of the safety map payload
    pub fn try_safety_map(&self) -> Result<SafetyMapPayload> {
        self.try_typed(PayloadTag::SafetyMap)
    }

    pub fn chart(&self) -> Option<ChartPayload> {
        self.lenient(PayloadTag::Chart)
    }

    pub fn currency(&self) -> Option<CurrencyPayload> {
        self.lenient(PayloadTag::Currency)
    }

    pub fn tipping(&self) -> Option<Vec<TippingEntry>> {
        self.lenient(PayloadTag::Tipping)
    }

    pub fn itinerary_map(&self) -> Option<ItineraryMapPayload> {
        self.lenient(PayloadTag::ItineraryMap)
    }

    pub fn safety_map(&self) -> Option<SafetyMapPayload> {
        self.lenient(PayloadTag::SafetyMap)
    }

    fn try_typed<T: DeserializeOwned>(&self, tag: PayloadTag) -> Result<T> {
        let value = self
            .get(tag)
            .ok_or(ReportError::MissingPayload(tag))?;
        deserialize_payload(tag, value)
    }

    fn lenient<T: DeserializeOwned>(&self, tag: PayloadTag) -> Option<T> {
        let value = self.get(tag)?;
        match deserialize_payload(tag, value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                warn!(
                    target: "travel_report::payload",
                    tag = tag.as_str(),
                    error = %err,
                    "payload JSON parsed but does not match its expected shape"
                );
                None
            }
        }
    }

    fn slot(&self, tag: PayloadTag) -> &Option<Value> {
        match tag {
            PayloadTag::Chart => &self.chart,
            PayloadTag::Currency => &self.currency,
            PayloadTag::Tipping => &self.tipping,
            PayloadTag::ItineraryMap => &self.itinerary_map,
            PayloadTag::SafetyMap => &self.safety_map,
        }
    }

    fn slot_mut(&mut self, tag: PayloadTag) -> &mut Option<Value> {
        match tag {
            PayloadTag::Chart => &mut self.chart,
            PayloadTag::Currency => &mut self.currency,
            PayloadTag::Tipping => &mut self.tipping,
            PayloadTag::ItineraryMap => &mut self.itinerary_map,
            PayloadTag::SafetyMap => &mut self.safety_map,
        }
    }
}

/// Deserialize a stored payload value, reporting the JSON path on failure.
pub fn deserialize_payload<T>(tag: PayloadTag, payload: &Value) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        ReportError::PayloadShape {
            tag,
            message: format!("at {}: {}", location, err),
        }
    })
}

/// One fully decoded section: prose with all tag blocks excised, the
/// payloads those blocks carried, and the rendered block sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedSection {
    pub clean_text: String,
    pub payloads: PayloadSet,
    pub blocks: Vec<ContentBlock>,
}

/// A whole decoded report, one [`DecodedSection`] per tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedReport {
    pub visa: DecodedSection,
    pub safety: DecodedSection,
    pub culture: DecodedSection,
    pub itinerary: DecodedSection,
}

impl DecodedReport {
    pub fn get(&self, kind: SectionKind) -> &DecodedSection {
        match kind {
            SectionKind::Visa => &self.visa,
            SectionKind::Safety => &self.safety,
            SectionKind::Culture => &self.culture,
            SectionKind::Itinerary => &self.itinerary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_vocabularies() {
        assert!(SectionKind::Visa.tags().is_empty());
        assert_eq!(SectionKind::Safety.tags(), &[PayloadTag::SafetyMap]);
        assert_eq!(SectionKind::Culture.tags().len(), 3);
        assert_eq!(SectionKind::Itinerary.tags(), &[PayloadTag::ItineraryMap]);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(SectionKind::Visa.placeholder(), "Information unavailable.");
        assert_eq!(
            SectionKind::Itinerary.placeholder(),
            "Itinerary unavailable."
        );
    }

    #[test]
    fn test_payload_set_typed_access() {
        let mut set = PayloadSet::new();
        assert!(set.is_empty());

        set.insert(
            PayloadTag::Currency,
            json!({"code": "JPY", "name": "Japanese Yen", "rate": 145.5}),
        );
        assert_eq!(set.len(), 1);
        assert!(set.contains(PayloadTag::Currency));

        let currency = set.try_currency().unwrap();
        assert_eq!(currency.rate, 145.5);
        assert!(matches!(
            set.try_chart(),
            Err(ReportError::MissingPayload(PayloadTag::Chart))
        ));
    }

    #[test]
    fn test_lenient_access_swallows_shape_mismatch() {
        let mut set = PayloadSet::new();
        // Valid JSON, wrong shape: rate is a string.
        set.insert(
            PayloadTag::Currency,
            json!({"code": "JPY", "name": "Yen", "rate": "many"}),
        );

        assert!(set.currency().is_none());
        let err = set.try_currency().unwrap_err();
        assert_eq!(err.error_code(), "PAYLOAD_SHAPE_ERROR");
        assert!(err.to_string().contains("rate"));
    }
}
