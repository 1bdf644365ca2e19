use std::fmt::Display;

/// Message shown to the user for any failed fetch. The underlying error is
/// only logged.
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Fetch as soon as the screen starts
    pub refetch_on_mount: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            refetch_on_mount: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Pending,
    Success,
    Failure(String),
}

/// Tracks the result of a single kind of fetch.
///
/// Every fetch takes a token from [`Query::begin`]. Only the result carrying
/// the most recent token is applied, so a slow response to an older request
/// can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct Query<T> {
    data: Option<T>,
    status: QueryStatus,
    latest: u64,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            latest: 0,
        }
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new fetch in flight. Previous data stays visible to callers.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.status = QueryStatus::Pending;
        self.latest
    }

    /// Apply the outcome of the fetch identified by `token`.
    /// Returns false when the token is stale and the outcome was dropped.
    pub fn settle<E: Display>(&mut self, token: u64, result: Result<Option<T>, E>) -> bool {
        if token != self.latest {
            tracing::debug!(token, latest = self.latest, "dropping stale fetch result");
            return false;
        }

        match result {
            Ok(data) => {
                self.data = data;
                self.status = QueryStatus::Success;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching data");
                self.status = QueryStatus::Failure(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending
    }
}
