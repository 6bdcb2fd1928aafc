//! Stop place types.

use std::fmt;

use super::departure::Departure;

/// Namespace prefix that marks an id as a stop place.
///
/// The geocoder returns features for streets, addresses and venues too;
/// only ids carrying this prefix identify a physical transit stop.
pub const STOP_PLACE_PREFIX: &str = "NSR:StopPlace";

/// Error returned when parsing an invalid stop-place id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a stop place id {id:?}: {reason}")]
pub struct InvalidStopPlaceId {
    id: String,
    reason: &'static str,
}

/// A namespaced stop-place identifier, e.g. `"NSR:StopPlace:59706"`.
///
/// Guaranteed by construction to carry the [`STOP_PLACE_PREFIX`] and to
/// contain only colons and ASCII alphanumerics after it, so an id can be
/// embedded in a quoted GraphQL string without escaping.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopPlaceId(String);

impl StopPlaceId {
    /// Parse a stop-place id.
    ///
    /// Rejects anything without the namespace prefix (streets, addresses,
    /// free text), and any suffix byte outside `':'` and ASCII
    /// alphanumerics — real ids are colon-separated alphanumerics, and
    /// quotes, whitespace or braces here would leak into query text.
    pub fn parse(s: &str) -> Result<Self, InvalidStopPlaceId> {
        let Some(suffix) = s.strip_prefix(STOP_PLACE_PREFIX) else {
            return Err(InvalidStopPlaceId {
                id: s.to_string(),
                reason: "missing \"NSR:StopPlace\" prefix",
            });
        };
        if !suffix
            .chars()
            .all(|c| c == ':' || c.is_ascii_alphanumeric())
        {
            return Err(InvalidStopPlaceId {
                id: s.to_string(),
                reason: "id may contain only ':' and alphanumerics after the prefix",
            });
        }
        Ok(StopPlaceId(s.to_string()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopPlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopPlaceId({})", self.0)
    }
}

impl fmt::Display for StopPlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit stop.
///
/// Geocoder results carry no departures (`departures: None`); a stop
/// parsed from a journey-planner response carries the decoded estimated
/// calls in server order.
#[derive(Debug, Clone)]
pub struct Station {
    id: StopPlaceId,
    name: String,
    departures: Option<Vec<Departure>>,
}

impl Station {
    /// Create a station, optionally with its departures.
    pub fn new(
        id: StopPlaceId,
        name: impl Into<String>,
        departures: Option<Vec<Departure>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            departures,
        }
    }

    /// The namespaced stop-place id.
    pub fn id(&self) -> &StopPlaceId {
        &self.id
    }

    /// Human-readable stop name (the geocoder's label).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Departures for this stop, if any were fetched.
    pub fn departures(&self) -> Option<&[Departure]> {
        self.departures.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_ids() {
        let id = StopPlaceId::parse("NSR:StopPlace:59706").unwrap();
        assert_eq!(id.as_str(), "NSR:StopPlace:59706");
        assert_eq!(id.to_string(), "NSR:StopPlace:59706");
    }

    #[test]
    fn rejects_other_namespaces() {
        assert!(StopPlaceId::parse("OSM:Street:1234").is_err());
        assert!(StopPlaceId::parse("Kringsjå").is_err());
        assert!(StopPlaceId::parse("").is_err());
    }

    #[test]
    fn rejects_suffixes_that_could_escape_a_quoted_string() {
        // A crafted id must not survive into embedded GraphQL query text.
        assert!(StopPlaceId::parse("NSR:StopPlace:1\") { name }").is_err());
        assert!(StopPlaceId::parse("NSR:StopPlace:1 2").is_err());
        assert!(StopPlaceId::parse("NSR:StopPlace:1{").is_err());
        assert!(StopPlaceId::parse("NSR:StopPlace:59706\n").is_err());
    }

    #[test]
    fn error_names_the_offending_id() {
        let err = StopPlaceId::parse("somewhere").unwrap_err();
        assert!(err.to_string().contains("somewhere"));
        assert!(err.to_string().contains(STOP_PLACE_PREFIX));
    }
}
