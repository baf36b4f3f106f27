// Data source trait - the consumed interface for the five backend endpoints
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

/// Opaque access credential forwarded to the authenticated endpoints.
#[derive(Debug, Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reporting granularity a backend endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Monthly,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
        }
    }
}

/// One of the five independent sub-requests feeding the aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRequest {
    ListProducts,
    AnalyticsSummary {
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    },
    CreditBalance,
    UsageAnalytics {
        period: Granularity,
    },
    RecentPurchases {
        limit: usize,
    },
}

impl DataRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            DataRequest::ListProducts => Endpoint::Products,
            DataRequest::AnalyticsSummary { .. } => Endpoint::Analytics,
            DataRequest::CreditBalance => Endpoint::Credits,
            DataRequest::UsageAnalytics { .. } => Endpoint::Usage,
            DataRequest::RecentPurchases { .. } => Endpoint::Purchases,
        }
    }

    /// The analytics summary endpoint is public; everything else needs
    /// the caller's credential.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, DataRequest::AnalyticsSummary { .. })
    }
}

/// Which backend endpoint a request (or failure) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Products,
    Analytics,
    Credits,
    Usage,
    Purchases,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Endpoint::Products => "product catalog",
            Endpoint::Analytics => "analytics summary",
            Endpoint::Credits => "credit balance",
            Endpoint::Usage => "usage analytics",
            Endpoint::Purchases => "purchase history",
        };
        f.write_str(name)
    }
}

/// Failure kinds a sub-request can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("credential missing or rejected")]
    Unauthorized,
    #[error("resource not found")]
    NotFound,
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Fetches one described request as a loosely-typed JSON value.
/// Implementations decide transport; the aggregator treats the five
/// requests as independent and order-insensitive.
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    async fn fetch(&self, credential: &Credential, request: &DataRequest)
        -> Result<Value, FetchError>;
}
