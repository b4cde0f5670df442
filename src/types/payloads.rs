use serde::{Deserialize, Serialize};

/// Cost-comparison chart embedded in the culture section.
///
/// The wire format keys the series as `data` and uses camelCase price
/// fields, matching the prompt contract the model is asked to follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Origin country or city the traveler departs from
    #[serde(default)]
    pub origin: String,
    /// Destination country or city
    #[serde(default)]
    pub destination: String,
    /// Per-item price comparisons, in the order the model produced them
    #[serde(rename = "data", default)]
    pub series: Vec<CostComparison>,
}

/// One labeled pair of prices, in USD, for origin and destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostComparison {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "originPrice", default)]
    pub origin_price: f64,
    #[serde(rename = "destPrice", default)]
    pub dest_price: f64,
}

impl ChartPayload {
    /// Maximum price across both columns of every series entry, used to
    /// scale bar widths. Floors at 1.0 so an all-zero series cannot
    /// produce a divide-by-zero.
    pub fn max_value(&self) -> f64 {
        let max = self
            .series
            .iter()
            .map(|item| item.origin_price.max(item.dest_price))
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }
}

impl CostComparison {
    /// Origin bar width as a 0..=1 fraction of the given maximum
    pub fn origin_fraction(&self, max_value: f64) -> f64 {
        (self.origin_price / max_value).clamp(0.0, 1.0)
    }

    /// Destination bar width as a 0..=1 fraction of the given maximum
    pub fn dest_fraction(&self, max_value: f64) -> f64 {
        (self.dest_price / max_value).clamp(0.0, 1.0)
    }
}

/// Local currency descriptor for the quick converter (1 USD = `rate` units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPayload {
    /// ISO-ish currency code (e.g., "JPY")
    #[serde(default)]
    pub code: String,
    /// Human-readable currency name (e.g., "Japanese Yen")
    #[serde(default)]
    pub name: String,
    /// Units of local currency per 1 USD
    #[serde(default)]
    pub rate: f64,
}

impl CurrencyPayload {
    /// Convert a USD amount into the local currency
    pub fn convert(&self, usd_amount: f64) -> f64 {
        usd_amount * self.rate
    }
}

/// One row of the tipping etiquette grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TippingEntry {
    /// Service category (e.g., "Restaurants", "Taxis")
    #[serde(default)]
    pub category: String,
    /// Short advice line (e.g., "10-15%", "Round up")
    #[serde(default)]
    pub advice: String,
    /// Why, or when the advice applies
    #[serde(default)]
    pub explanation: String,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// Itinerary map data: a center plus one marker per planned stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryMapPayload {
    #[serde(default = "GeoPoint::origin")]
    pub center: GeoPoint,
    #[serde(default)]
    pub points: Vec<ItineraryPoint>,
}

/// A single day-numbered stop on the itinerary map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPoint {
    #[serde(default)]
    pub name: String,
    /// 1-based day the stop belongs to
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub desc: String,
}

/// Safety map data: a center plus risk-annotated hotspots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyMapPayload {
    #[serde(default = "GeoPoint::origin")]
    pub center: GeoPoint,
    #[serde(default)]
    pub hotspots: Vec<SafetyHotspot>,
}

/// A named area with a free-form risk label such as "Medium Risk" or
/// "Safe Zone". The label vocabulary is open; marker colors are chosen by
/// substring match (see [`crate::surface::RiskColor`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyHotspot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: String,
    #[serde(default)]
    pub description: String,
}

impl GeoPoint {
    fn origin() -> Self {
        GeoPoint { lat: 0.0, lng: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_wire_format() {
        let value = json!({
            "origin": "USA",
            "destination": "Japan",
            "data": [
                {"label": "Coffee", "originPrice": 5.0, "destPrice": 2.5},
                {"label": "Meal", "originPrice": 15.0, "destPrice": 8.0}
            ]
        });

        let chart: ChartPayload = serde_json::from_value(value).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "Coffee");
        assert_eq!(chart.series[1].origin_price, 15.0);
        assert_eq!(chart.max_value(), 15.0);
    }

    #[test]
    fn test_chart_scaling_floors_at_one() {
        let chart: ChartPayload = serde_json::from_value(json!({
            "origin": "A", "destination": "B", "data": []
        }))
        .unwrap();
        assert_eq!(chart.max_value(), 1.0);

        let item = CostComparison {
            label: "Taxi".to_string(),
            origin_price: 2.0,
            dest_price: 0.8,
        };
        assert!((item.dest_fraction(2.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_currency_convert() {
        let currency: CurrencyPayload = serde_json::from_value(json!({
            "code": "JPY", "name": "Japanese Yen", "rate": 145.5
        }))
        .unwrap();
        assert_eq!(currency.rate, 145.5);
        assert!((currency.convert(10.0) - 1455.0).abs() < 1e-9);
    }

    #[test]
    fn test_sparse_payloads_still_type() {
        // Extra and missing fields both pass; consumers guard on content.
        let safety: SafetyMapPayload = serde_json::from_value(json!({
            "center": {"lat": 35.6762, "lng": 139.6503},
            "hotspots": [{"name": "Kabukicho", "riskLevel": "Medium Risk", "extra": true}]
        }))
        .unwrap();
        assert_eq!(safety.hotspots[0].risk_level, "Medium Risk");
        assert_eq!(safety.hotspots[0].lat, 0.0);

        let itinerary: ItineraryMapPayload = serde_json::from_value(json!({})).unwrap();
        assert!(itinerary.points.is_empty());
        assert_eq!(itinerary.center, GeoPoint { lat: 0.0, lng: 0.0 });
    }
}
