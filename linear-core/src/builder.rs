// ABOUTME: Builder pattern implementation for LinearClient configuration
// ABOUTME: Provides type-safe configuration with compile-time validation

use crate::LinearClient;
use crate::constants::{USER_AGENT, timeouts};
use crate::error::LinearError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LinearClient, LinearError>))]
pub struct LinearClientConfig {
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// API base (e.g. `https://api.linear.app`) or the full `/graphql` endpoint
    #[builder(default = None)]
    pub base_url: Option<String>,

    #[builder(default = USER_AGENT.to_string())]
    pub user_agent: String,
}

impl From<LinearClientConfig> for Result<LinearClient, LinearError> {
    fn from(config: LinearClientConfig) -> Self {
        LinearClient::from_config(config)
    }
}

impl LinearClient {
    pub fn builder() -> LinearClientConfigBuilder<((), (), (), ())> {
        LinearClientConfig::builder()
    }
}
