use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::{Result, ReviewsError};
use crate::types::{Rating, ReviewsResponse, TimeRange};

/// Source of review snapshots. `Ok(None)` means the backend answered `null`.
#[async_trait]
pub trait ReviewsApi: Send + Sync + std::fmt::Debug {
    async fn fetch_reviews(
        &self,
        rating: Option<Rating>,
        time_range: TimeRange,
    ) -> Result<Option<ReviewsResponse>>;
}

#[derive(Debug, Clone)]
pub struct HttpReviewsClient {
    client: Client,
    base_url: String,
}

impl HttpReviewsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn reviews_url(&self, rating: Option<Rating>, time_range: TimeRange) -> Result<Url> {
        let endpoint = format!("{}/reviews", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint)
            .map_err(|e| ReviewsError::Config(format!("Invalid API URL '{}': {}", endpoint, e)))?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(rating) = rating {
                query.append_pair("rating", &rating.to_string());
            }
            query.append_pair("hours", &time_range.hours().to_string());
        }

        Ok(url)
    }

    async fn request(
        &self,
        rating: Option<Rating>,
        time_range: TimeRange,
    ) -> Result<Option<ReviewsResponse>> {
        let url = self.reviews_url(rating, time_range)?;
        tracing::debug!(%url, "fetching reviews");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ReviewsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewsError::Http(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReviewsError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ReviewsError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ReviewsApi for HttpReviewsClient {
    async fn fetch_reviews(
        &self,
        rating: Option<Rating>,
        time_range: TimeRange,
    ) -> Result<Option<ReviewsResponse>> {
        self.request(rating, time_range)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching reviews"))
    }
}
