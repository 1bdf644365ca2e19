use crate::types::{Rating, TimeRange, DEFAULT_TIME_RANGE};

/// Rating and time range currently applied to the reviews request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub rating: Option<Rating>,
    pub time_range: TimeRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            rating: None,
            time_range: DEFAULT_TIME_RANGE,
        }
    }
}

impl FilterState {
    pub fn new(rating: Option<Rating>, time_range: TimeRange) -> Self {
        Self { rating, time_range }
    }

    /// Single-select-or-none: picking the active rating again clears it.
    pub fn toggle_rating(&mut self, rating: Rating) {
        self.rating = if self.rating == Some(rating) {
            None
        } else {
            Some(rating)
        };
    }

    /// Returns true if a rating was set.
    pub fn clear_rating(&mut self) -> bool {
        self.rating.take().is_some()
    }

    /// Returns true if the range actually changed.
    pub fn set_time_range(&mut self, time_range: TimeRange) -> bool {
        if self.time_range == time_range {
            return false;
        }
        self.time_range = time_range;
        true
    }
}
