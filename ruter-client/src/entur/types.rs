//! Raw response DTOs for the Entur APIs.
//!
//! These map one-to-one onto the JSON the endpoints return. Fields the API
//! may legitimately omit are `Option` (or default to empty); everything
//! else is required, so a missing key fails the serde decode and surfaces
//! as a parse error.

use serde::Deserialize;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlData {
    /// `null` when the requested stop place id is unknown.
    pub stop_place: Option<StopPlaceDto>,
}

/// A stop place with its upcoming estimated calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPlaceDto {
    pub id: String,
    pub name: String,
    /// Server-ordered (by increasing departure time). Absent means no
    /// departures in the window, which is a valid empty result.
    #[serde(default)]
    pub estimated_calls: Vec<EstimatedCallDto>,
}

/// One predicted vehicle call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCallDto {
    /// RFC 3339 timestamp, usually with a literal `Z` UTC marker.
    pub expected_arrival_time: String,
    pub expected_departure_time: String,
    pub destination_display: DestinationDisplayDto,
    pub service_journey: ServiceJourneyDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDisplayDto {
    pub front_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJourneyDto {
    pub journey_pattern: JourneyPatternDto,
}

#[derive(Debug, Deserialize)]
pub struct JourneyPatternDto {
    pub line: LineDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: String,
    pub name: String,
    pub transport_mode: String,
}

/// GeoJSON-like feature collection from the geocoder.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
}

/// Geocoder feature properties.
///
/// `id` and `label` are optional here so a single malformed feature can
/// be skipped with a warning instead of failing the whole batch.
#[derive(Debug, Deserialize)]
pub struct FeatureProperties {
    pub id: Option<String>,
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_estimated_call() {
        let json = r#"{
            "expectedArrivalTime": "2024-03-15T12:00:00Z",
            "expectedDepartureTime": "2024-03-15T12:01:00Z",
            "destinationDisplay": { "frontText": "Sognsvann" },
            "serviceJourney": {
                "journeyPattern": {
                    "line": { "id": "RUT:Line:5", "name": "Sognsvann", "transportMode": "metro" }
                }
            }
        }"#;
        let call: EstimatedCallDto = serde_json::from_str(json).unwrap();
        assert_eq!(call.destination_display.front_text, "Sognsvann");
        assert_eq!(call.service_journey.journey_pattern.line.id, "RUT:Line:5");
    }

    #[test]
    fn missing_key_fails_the_decode() {
        // No destinationDisplay.
        let json = r#"{
            "expectedArrivalTime": "2024-03-15T12:00:00Z",
            "expectedDepartureTime": "2024-03-15T12:01:00Z",
            "serviceJourney": {
                "journeyPattern": {
                    "line": { "id": "RUT:Line:5", "name": "Sognsvann", "transportMode": "metro" }
                }
            }
        }"#;
        assert!(serde_json::from_str::<EstimatedCallDto>(json).is_err());
    }

    #[test]
    fn stop_place_without_calls_defaults_to_empty() {
        let json = r#"{ "id": "NSR:StopPlace:59706", "name": "Kringsjå" }"#;
        let stop: StopPlaceDto = serde_json::from_str(json).unwrap();
        assert!(stop.estimated_calls.is_empty());
    }

    #[test]
    fn feature_properties_tolerate_missing_keys() {
        let json = r#"{ "properties": {} }"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert!(feature.properties.id.is_none());
        assert!(feature.properties.label.is_none());
    }
}
