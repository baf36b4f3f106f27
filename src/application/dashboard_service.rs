// Dashboard service - Use case for building the dashboard snapshot
use crate::application::data_source::{
    Credential, DashboardDataSource, DataRequest, Endpoint, FetchError, Granularity,
};
use crate::application::normalize;
use crate::domain::snapshot::{DashboardSnapshot, RECENT_TRANSACTION_LIMIT};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Days of history the reporting window covers.
const WINDOW_DAYS: i64 = 30;

/// A failed aggregation, naming the sub-request that caused it.
#[derive(Debug, Clone, Error)]
#[error("{endpoint} request failed: {source}")]
pub struct AggregationError {
    pub endpoint: Endpoint,
    #[source]
    pub source: FetchError,
}

impl AggregationError {
    fn new(endpoint: Endpoint, source: FetchError) -> Self {
        Self { endpoint, source }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    data_source: Arc<dyn DashboardDataSource>,
}

impl DashboardService {
    pub fn new(data_source: Arc<dyn DashboardDataSource>) -> Self {
        Self { data_source }
    }

    /// Build one snapshot for the 30 days ending at `as_of`. The five
    /// sub-requests fan out concurrently and the snapshot is assembled
    /// only once all of them have succeeded; the first failure aborts
    /// the aggregation. Each call is independent and safe to retry.
    pub async fn get_dashboard(
        &self,
        credential: &Credential,
        as_of: DateTime<Utc>,
    ) -> Result<DashboardSnapshot, AggregationError> {
        let end = as_of.date_naive();
        let start = (as_of - Duration::days(WINDOW_DAYS)).date_naive();

        let (products, analytics, credits, usage, purchases) = futures::try_join!(
            self.fetch(credential, DataRequest::ListProducts),
            self.fetch(
                credential,
                DataRequest::AnalyticsSummary {
                    start,
                    end,
                    granularity: Granularity::Daily,
                }
            ),
            self.fetch(credential, DataRequest::CreditBalance),
            self.fetch(
                credential,
                DataRequest::UsageAnalytics {
                    period: Granularity::Monthly,
                }
            ),
            self.fetch(
                credential,
                DataRequest::RecentPurchases {
                    limit: RECENT_TRANSACTION_LIMIT,
                }
            ),
        )?;

        let catalog = normalize::products(&products)
            .map_err(|error| AggregationError::new(Endpoint::Products, error))?;
        let window = normalize::analytics_summary(&analytics)
            .map_err(|error| AggregationError::new(Endpoint::Analytics, error))?;
        let balance = normalize::credit_balance(&credits)
            .map_err(|error| AggregationError::new(Endpoint::Credits, error))?;
        let subscription = normalize::usage_analytics(&usage, balance)
            .map_err(|error| AggregationError::new(Endpoint::Usage, error))?;
        let history = normalize::transactions(&purchases)
            .map_err(|error| AggregationError::new(Endpoint::Purchases, error))?;

        Ok(DashboardSnapshot::assemble(
            catalog,
            window,
            subscription,
            history,
        ))
    }

    async fn fetch(
        &self,
        credential: &Credential,
        request: DataRequest,
    ) -> Result<Value, AggregationError> {
        let endpoint = request.endpoint();
        tracing::debug!("issuing {} sub-request", endpoint);
        self.data_source
            .fetch(credential, &request)
            .await
            .map_err(|error| AggregationError::new(endpoint, error))
    }
}
