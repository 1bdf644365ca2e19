//! Fixtures shared by the screen and rendering tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::app::App;
use crate::client::ReviewsApi;
use crate::error::Result;
use crate::filter::FilterState;
use crate::query::QueryOptions;
use crate::types::{Rating, Review, ReviewsResponse, TimeRange};

pub fn review(id: &str, title: &str, content: &str, author: &str, rating: u8) -> Review {
    Review {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        rating: Rating::new(rating).expect("valid rating"),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    }
}

pub fn great_review() -> Review {
    review(
        "1",
        "Great app!",
        "This app is amazing and works perfectly.",
        "John Doe",
        5,
    )
}

pub fn decent_review() -> Review {
    review(
        "2",
        "Could be better",
        "The app has some issues but overall decent.",
        "Jane Smith",
        3,
    )
}

pub fn response_with(reviews: Vec<Review>) -> ReviewsResponse {
    ReviewsResponse {
        app_id: "test-app-123".to_string(),
        count: reviews.len() as u64,
        reviews,
        last_hours: TimeRange::Last48h,
    }
}

pub fn sample_response() -> ReviewsResponse {
    response_with(vec![great_review(), decent_review()])
}

/// Records every call and replays queued results, falling back to
/// [`sample_response`] once the queue is drained.
#[derive(Debug, Default)]
pub struct StubApi {
    calls: Mutex<Vec<(Option<Rating>, TimeRange)>>,
    responses: Mutex<VecDeque<Result<Option<ReviewsResponse>>>>,
}

impl StubApi {
    pub fn push(&self, result: Result<Option<ReviewsResponse>>) {
        self.responses.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<(Option<Rating>, TimeRange)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewsApi for StubApi {
    async fn fetch_reviews(
        &self,
        rating: Option<Rating>,
        time_range: TimeRange,
    ) -> Result<Option<ReviewsResponse>> {
        self.calls.lock().unwrap().push((rating, time_range));
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Some(sample_response())))
    }
}

pub fn app_with(api: Arc<StubApi>) -> (App, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(api, FilterState::default(), QueryOptions::default(), tx);
    (app, rx)
}

/// Wait for the next spawned fetch to report back and feed it to the app.
pub async fn settle_next(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Action>) {
    let action = rx.recv().await.expect("fetch result");
    app.update(action);
}
