// ABOUTME: HTTP Transport implementation posting GraphQL operations to Linear
// ABOUTME: Maps HTTP status, GraphQL error arrays and parse failures onto LinearError

use async_trait::async_trait;
use http::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Instant;
use url::Url;

use crate::builder::LinearClientConfig;
use crate::constants::urls;
use crate::error::LinearError;
use crate::graphql::{GraphQLRequest, GraphQLResponse, Transport, Variables};
use crate::queries::Operation;

pub struct LinearClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl LinearClient {
    pub(crate) fn from_config(config: LinearClientConfig) -> Result<Self, LinearError> {
        let endpoint = endpoint_url(config.base_url.as_deref().unwrap_or(urls::LINEAR_API_BASE))?;

        let mut auth = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|_| LinearError::Configuration("API key contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| LinearError::Configuration("Invalid user agent".into()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| LinearError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the GraphQL endpoint from an API base or a full endpoint URL.
pub(crate) fn endpoint_url(base: &str) -> Result<Url, LinearError> {
    let mut url = Url::parse(base)
        .map_err(|e| LinearError::Configuration(format!("Invalid API URL '{base}': {e}")))?;

    if url.path().trim_end_matches('/').ends_with(urls::GRAPHQL_PATH) {
        return Ok(url);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(urls::GRAPHQL_PATH)
        .map_err(|e| LinearError::Configuration(format!("Invalid API URL '{base}': {e}")))
}

fn interpret(status: StatusCode, body: &str) -> Result<Value, LinearError> {
    if matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::TOO_MANY_REQUESTS
    ) {
        return Err(LinearError::from_status(status));
    }

    match serde_json::from_str::<GraphQLResponse>(body) {
        Ok(response) => {
            let has_errors = response.errors.as_ref().is_some_and(|e| !e.is_empty());
            if status.is_success() || has_errors {
                response.into_data()
            } else {
                Err(LinearError::from_status(status))
            }
        }
        Err(err) if status.is_success() => Err(err.into()),
        Err(_) => Err(LinearError::from_status(status)),
    }
}

#[async_trait]
impl Transport for LinearClient {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<Value, LinearError> {
        operation.check_variables(&variables)?;
        log::debug!("Executing {} against {}", operation.name, self.endpoint);
        log::trace!("{} variables: {}", operation.name, Value::Object(variables.clone()));

        let started = Instant::now();
        let request = GraphQLRequest::new(operation, variables);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!(
            "{} returned HTTP {} in {:?}",
            operation.name,
            status,
            started.elapsed()
        );

        interpret(status, &body)
    }
}
