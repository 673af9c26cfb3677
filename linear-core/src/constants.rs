// ABOUTME: Centralized constants for the Linear core
// ABOUTME: Contains endpoint URLs, request timeouts, and client identification

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Linear API URLs
pub mod urls {
    /// Base URL for Linear API
    pub const LINEAR_API_BASE: &str = "https://api.linear.app";

    /// Path of the GraphQL endpoint relative to the API base
    pub const GRAPHQL_PATH: &str = "graphql";
}

/// Value sent in the User-Agent header
pub const USER_AGENT: &str = concat!("linear-cli/", env!("CARGO_PKG_VERSION"));
