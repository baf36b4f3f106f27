// HTTP data source implementation backed by the product API
use crate::application::data_source::{
    Credential, DashboardDataSource, DataRequest, FetchError,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn request_url(&self, request: &DataRequest) -> String {
        match request {
            DataRequest::ListProducts => format!("{}/api/products", self.base_url),
            DataRequest::AnalyticsSummary {
                start,
                end,
                granularity,
            } => format!(
                "{}/api/analytics/summary?start_date={}&end_date={}&period={}",
                self.base_url,
                urlencoding::encode(&start.to_string()),
                urlencoding::encode(&end.to_string()),
                granularity.as_str(),
            ),
            DataRequest::CreditBalance => format!("{}/api/credits", self.base_url),
            DataRequest::UsageAnalytics { period } => format!(
                "{}/api/usage/analytics?period={}",
                self.base_url,
                period.as_str()
            ),
            DataRequest::RecentPurchases { limit } => format!(
                "{}/api/credit-purchases?limit={}",
                self.base_url, limit
            ),
        }
    }
}

#[async_trait]
impl DashboardDataSource for HttpDataSource {
    async fn fetch(
        &self,
        credential: &Credential,
        request: &DataRequest,
    ) -> Result<Value, FetchError> {
        let url = self.request_url(request);
        tracing::debug!("fetching {}", url);

        let mut http_request = self
            .client
            .get(&url)
            .header("Accept", "application/json");
        if request.requires_auth() {
            http_request = http_request
                .header("Authorization", format!("Bearer {}", credential.as_str()));
        }

        let response = http_request
            .send()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Network(format!(
                "unexpected status {}: {}",
                status, body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|error| FetchError::Malformed(error.to_string()))
    }
}
