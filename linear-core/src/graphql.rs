// ABOUTME: GraphQL abstraction layer: the Transport trait plus request/response envelopes
// ABOUTME: Orchestrated operations depend only on Transport, never on a concrete client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LinearError;
use crate::queries::Operation;

/// Variable mapping sent alongside an operation.
pub type Variables = serde_json::Map<String, Value>;

/// Executes a single GraphQL operation against the remote endpoint.
///
/// Implementations return the response `data` document on success. A
/// response carrying an `errors` array becomes [`LinearError::GraphQL`];
/// anything that prevents reaching or parsing the response is one of the
/// other variants.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, operation: &Operation, variables: Variables)
        -> Result<Value, LinearError>;
}

/// Build a variable map from name/value pairs.
pub fn variables<const N: usize>(pairs: [(&str, Value); N]) -> Variables {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Variables,
    pub operation_name: &'a str,
}

impl<'a> GraphQLRequest<'a> {
    pub fn new(operation: &'a Operation, variables: Variables) -> Self {
        Self {
            query: operation.query,
            variables,
            operation_name: operation.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorMessage {
    pub message: String,
}

/// Raw response envelope as returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLErrorMessage>>,
}

impl GraphQLResponse {
    /// Errors take precedence over any partial data.
    pub fn into_data(self) -> Result<Value, LinearError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(LinearError::GraphQL {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        match self.data {
            Some(Value::Null) | None => Err(LinearError::InvalidResponse(
                "No data in response".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }
}
