//! Free-text stop lookup through the geocoder.

use tracing::warn;

use crate::domain::{Station, StopPlaceId};
use crate::error::Error;

use super::client::EnturClient;
use super::convert::ParseError;
use super::types::FeatureCollection;

/// Default language for geocoder labels.
const DEFAULT_LANG: &str = "en";

/// Default geocoder layer filter. "venue" covers transit stops.
const DEFAULT_LAYERS: &str = "venue";

/// A lazy geocoder query.
///
/// Fetches and resolves at most once; [`resolve`](Self::resolve) returns
/// the memoized station list on every subsequent call, so iteration is
/// restartable without re-fetching.
#[derive(Debug)]
pub struct GeocodeQuery<'a> {
    client: &'a EnturClient,
    text: String,
    lang: String,
    layers: String,
    resolved: Option<Vec<Station>>,
}

impl<'a> GeocodeQuery<'a> {
    pub(crate) fn new(client: &'a EnturClient, text: impl Into<String>) -> Self {
        Self {
            client,
            text: text.into(),
            lang: DEFAULT_LANG.to_string(),
            layers: DEFAULT_LAYERS.to_string(),
            resolved: None,
        }
    }

    /// The free text being resolved.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Request labels in a different language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Query different geocoder layers.
    pub fn with_layers(mut self, layers: impl Into<String>) -> Self {
        self.layers = layers.into();
        self
    }

    /// Fetch (once) and return the matching stop places, in geocoder
    /// ranking order.
    ///
    /// Features missing an id or label are skipped with a warning;
    /// features outside the stop-place namespace (streets, addresses) are
    /// silently excluded. An empty result is not an error here — see
    /// [`first`](Self::first) for the resolving path that needs one.
    pub fn resolve(&mut self) -> Result<&[Station], Error> {
        self.ensure_resolved()?;
        Ok(self.resolved.as_deref().unwrap_or(&[]))
    }

    /// The first matching stop place, or [`Error::StopNotFound`] if the
    /// geocoder produced no stop-place candidates.
    pub fn first(&mut self) -> Result<&Station, Error> {
        self.ensure_resolved()?;
        match self.resolved.as_deref().and_then(|stations| stations.first()) {
            Some(station) => Ok(station),
            None => Err(Error::StopNotFound {
                query: self.text.clone(),
            }),
        }
    }

    /// Fetch and filter exactly once; later calls see the memoized list.
    fn ensure_resolved(&mut self) -> Result<(), Error> {
        if self.resolved.is_none() {
            let body = self.client.get_geocoder(&[
                ("text", self.text.as_str()),
                ("lang", self.lang.as_str()),
                ("layers", self.layers.as_str()),
            ])?;
            let collection: FeatureCollection =
                serde_json::from_str(&body).map_err(ParseError::json)?;
            self.resolved = Some(stations_from_features(&collection));
        }
        Ok(())
    }
}

/// Filter geocoder features down to stop places.
fn stations_from_features(collection: &FeatureCollection) -> Vec<Station> {
    let mut stations = Vec::new();
    for feature in &collection.features {
        let (Some(id), Some(label)) = (&feature.properties.id, &feature.properties.label) else {
            warn!(
                id = feature.properties.id.as_deref(),
                label = feature.properties.label.as_deref(),
                "skipping geocoder feature with missing id or label"
            );
            continue;
        };
        if let Ok(stop_id) = StopPlaceId::parse(id) {
            stations.push(Station::new(stop_id, label.clone(), None));
        }
    }
    stations
}
