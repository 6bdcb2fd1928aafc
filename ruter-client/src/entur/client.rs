//! HTTP client for the Entur APIs.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Error;

use super::departures::DepartureQuery;
use super::geocode::GeocodeQuery;
use crate::domain::StopPlaceId;

/// Blocking client for the Entur journey-planner and geocoder.
///
/// Owns the HTTP connection pool, the configuration and the response
/// cache. Queries borrow the client; each query instance owns its own
/// fetched data.
#[derive(Debug)]
pub struct EnturClient {
    http: reqwest::blocking::Client,
    config: Config,
    cache: ResponseCache,
}

impl EnturClient {
    /// Create a client from the given configuration.
    ///
    /// Every request carries the `ET-Client-Name` header identifying the
    /// consumer, as Entur's API guidelines require.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        let client_name = HeaderValue::from_str(&config.client_name)
            .map_err(|_| Error::Config(format!("invalid client name: {:?}", config.client_name)))?;
        headers.insert(HeaderName::from_static("et-client-name"), client_name);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let cache = ResponseCache::new(config.cache_dir.clone(), config.cache_ttl);

        Ok(Self {
            http,
            config,
            cache,
        })
    }

    /// Start a geocoder query for free text.
    pub fn geocode(&self, text: impl Into<String>) -> GeocodeQuery<'_> {
        GeocodeQuery::new(self, text)
    }

    /// Start a departures query for a stop.
    ///
    /// An identifier carrying the stop-place prefix is used verbatim;
    /// anything else is treated as free text and resolved through the
    /// geocoder, taking the first matching stop place. Fails with
    /// [`Error::StopNotFound`] if resolution finds nothing.
    pub fn departures(&self, identifier: &str) -> Result<DepartureQuery<'_>, Error> {
        let station_id = match StopPlaceId::parse(identifier) {
            Ok(id) => id,
            Err(_) => self.geocode(identifier).first()?.id().clone(),
        };
        Ok(DepartureQuery::new(self, station_id))
    }

    /// GET the geocoder with the given query parameters. Returns the raw
    /// response body; non-2xx statuses become [`Error::Api`].
    pub(crate) fn get_geocoder(&self, params: &[(&str, &str)]) -> Result<String, Error> {
        let response = self
            .http
            .get(&self.config.geocoder_endpoint)
            .query(params)
            .send()?;
        Self::success_body(response)
    }

    /// POST a GraphQL query to the journey planner. Returns the raw
    /// response body; non-2xx statuses become [`Error::Api`].
    pub(crate) fn post_graphql(&self, query: &str) -> Result<String, Error> {
        let response = self
            .http
            .post(&self.config.api_endpoint)
            .json(&serde_json::json!({ "query": query }))
            .send()?;
        Self::success_body(response)
    }

    fn success_body(response: reqwest::blocking::Response) -> Result<String, Error> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text()?)
    }

    /// The response cache backing departure queries.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// The client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
