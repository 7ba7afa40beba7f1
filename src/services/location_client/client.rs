use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::types::{
    endpoint::{default_params, endpoint_path, Action, Category},
    location_client_error::LocationClientError,
    query_params::Params,
};

pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";

#[derive(Clone, Debug)]
pub struct LocationClientConfig {
    pub api_key: String,
    pub host: String,
}

impl LocationClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LocationClient {
    config: LocationClientConfig,
    client: reqwest::Client,
}

impl LocationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(LocationClientConfig::new(api_key))
    }

    pub fn with_config(config: LocationClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Builds the request url for an endpoint.
    ///
    /// `params` are laid over the endpoint defaults, then `key` is set to the
    /// client's API key whatever the caller passed.
    pub fn build_url(
        &self,
        params: &Params,
        category: Category,
        action: Option<Action>,
    ) -> Result<Url, LocationClientError> {
        let mut query: Params = default_params(category, action).iter().copied().collect();
        query.merge(params);
        query.insert("key", self.config.api_key.as_str());

        let url = format!(
            "{}/maps/api/{}?{}",
            self.config.host.trim_end_matches('/'),
            endpoint_path(category, action),
            query.to_query_string()
        );

        Url::parse(&url).map_err(|e| LocationClientError::InvalidUrl(e.to_string()))
    }

    /// Sends a GET to `url` and decodes the body as JSON.
    ///
    /// Neither the HTTP status nor the API `status` field is inspected.
    pub async fn request(&self, url: Url) -> Result<Value, LocationClientError> {
        debug!(path = url.path(), "Sending Google Maps request");

        let body = self.client.get(url).send().await?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn call(
        &self,
        params: &Params,
        category: Category,
        action: Option<Action>,
    ) -> Result<Value, LocationClientError> {
        let url = self.build_url(params, category, action)?;
        self.request(url).await
    }

    pub async fn search(&self, params: Params) -> Result<Value, LocationClientError> {
        self.call(&params, Category::Place, Some(Action::Search)).await
    }

    pub async fn autocomplete(&self, params: Params) -> Result<Value, LocationClientError> {
        self.call(&params, Category::Place, Some(Action::Autocomplete)).await
    }

    pub async fn details(&self, params: Params) -> Result<Value, LocationClientError> {
        self.call(&params, Category::Place, Some(Action::Details)).await
    }

    pub async fn geocode_address(&self, params: Params) -> Result<Value, LocationClientError> {
        self.call(&params, Category::Geocode, None).await
    }

    /// Expects `latlng` as a two element list, sent as `"lat,lng"`.
    pub async fn reverse_geocode(&self, params: Params) -> Result<Value, LocationClientError> {
        self.call(&params, Category::Geocode, None).await
    }
}
