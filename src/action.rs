use crate::error::ReviewsError;
use crate::types::{Rating, ReviewsResponse, TimeRange};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick,

    // Scrolling the review list
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,

    // Fetching
    LoadReviews,
    Refresh,
    ReviewsLoaded {
        response: Option<Box<ReviewsResponse>>,
        load_id: u64,
    },
    ReviewsFailed {
        message: String,
        load_id: u64,
    },

    // Filters
    SelectRating(Rating),
    ClearRating,
    SelectTimeRange(TimeRange),

    // Time range picker
    OpenTimeRangeSelect,
    PopupUp,
    PopupDown,
    PopupSelect,
    ClosePopup,

    None,
}

impl Action {
    /// Wrap a finished fetch so it can travel back through the action channel.
    pub fn from_fetch(
        result: Result<Option<ReviewsResponse>, ReviewsError>,
        load_id: u64,
    ) -> Self {
        match result {
            Ok(response) => Action::ReviewsLoaded {
                response: response.map(Box::new),
                load_id,
            },
            Err(e) => Action::ReviewsFailed {
                message: e.to_string(),
                load_id,
            },
        }
    }
}
