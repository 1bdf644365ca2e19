use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Star rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every valid rating, lowest first
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating must be between 1 and 5, got {}", value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid rating '{}'", s))?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How far back the backend looks for reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeRange {
    Last24h,
    #[default]
    Last48h,
    Last72h,
    Last96h,
}

pub const DEFAULT_TIME_RANGE: TimeRange = TimeRange::Last48h;

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24h,
        TimeRange::Last48h,
        TimeRange::Last72h,
        TimeRange::Last96h,
    ];

    pub fn hours(self) -> u32 {
        match self {
            TimeRange::Last24h => 24,
            TimeRange::Last48h => 48,
            TimeRange::Last72h => 72,
            TimeRange::Last96h => 96,
        }
    }

    /// Position within `ALL`, used by the picker cursor
    pub fn index(self) -> usize {
        TimeRange::ALL
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }
}

impl TryFrom<u32> for TimeRange {
    type Error = String;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        TimeRange::ALL
            .into_iter()
            .find(|t| t.hours() == hours)
            .ok_or_else(|| format!("time range must be one of 24, 48, 72 or 96 hours, got {}", hours))
    }
}

impl From<TimeRange> for u32 {
    fn from(range: TimeRange) -> Self {
        range.hours()
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hours: u32 = trimmed
            .strip_suffix('h')
            .unwrap_or(trimmed)
            .parse()
            .map_err(|_| format!("invalid time range '{}'", s))?;
        TimeRange::try_from(hours)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Last {}h", self.hours())
    }
}

/// A single app store review as served by the reviews API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub rating: Rating,
    pub updated_at: DateTime<Utc>,
}

/// One snapshot of `GET /reviews`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub app_id: String,
    pub count: u64,
    pub reviews: Vec<Review>,
    pub last_hours: TimeRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).map(Rating::value), Some(3));
    }

    #[test]
    fn rating_from_str() {
        assert_eq!("4".parse::<Rating>(), Ok(Rating(4)));
        assert!("seven".parse::<Rating>().is_err());
        assert!("9".parse::<Rating>().is_err());
    }

    #[test]
    fn time_range_accepts_hour_suffix() {
        assert_eq!("72h".parse::<TimeRange>(), Ok(TimeRange::Last72h));
        assert_eq!("24".parse::<TimeRange>(), Ok(TimeRange::Last24h));
        assert!("12".parse::<TimeRange>().is_err());
    }

    #[test]
    fn time_range_index_matches_all() {
        for (i, range) in TimeRange::ALL.into_iter().enumerate() {
            assert_eq!(range.index(), i);
        }
        assert_eq!(TimeRange::default(), DEFAULT_TIME_RANGE);
    }

    #[test]
    fn parse_reviews_response() {
        let json = r#"{
            "appId": "595068606",
            "count": 1,
            "reviews": [{
                "id": "11",
                "title": "Great app!",
                "content": "Works perfectly.",
                "author": "John Doe",
                "rating": 5,
                "updatedAt": "2024-01-15T10:00:00Z"
            }],
            "lastHours": 48
        }"#;
        let response: ReviewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.app_id, "595068606");
        assert_eq!(response.last_hours, TimeRange::Last48h);
        assert_eq!(response.reviews[0].rating, Rating(5));
        assert_eq!(
            response.reviews[0].updated_at.to_rfc3339(),
            "2024-01-15T10:00:00+00:00"
        );
    }

    #[test]
    fn parse_rejects_invalid_rating() {
        let json = r#"{"id":"1","title":"t","content":"c","author":"a","rating":9,"updatedAt":"2024-01-15T10:00:00Z"}"#;
        assert!(serde_json::from_str::<Review>(json).is_err());
    }

    #[test]
    fn parse_rejects_unknown_time_range() {
        let json = r#"{"appId":"x","count":0,"reviews":[],"lastHours":12}"#;
        assert!(serde_json::from_str::<ReviewsResponse>(json).is_err());
    }
}
