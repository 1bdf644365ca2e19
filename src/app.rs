use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::client::ReviewsApi;
use crate::event::Event;
use crate::filter::FilterState;
use crate::query::{Query, QueryOptions, QueryStatus};
use crate::types::{Rating, Review, ReviewsResponse, TimeRange};

/// Rows scrolled before the "back to top" hint appears
pub const BACK_TO_TOP_THRESHOLD: usize = 5;
const PAGE_SIZE: usize = 10;

/// What the main content area shows, in priority order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List(&'a [Review]),
}

pub struct App {
    pub filter: FilterState,
    pub reviews: Query<ReviewsResponse>,
    pub selected: usize,
    /// Cursor into `TimeRange::ALL` while the picker is open
    pub time_range_popup: Option<usize>,
    pub show_back_to_top: bool,
    pub spinner_frame: usize,
    pub should_quit: bool,
    options: QueryOptions,
    api: Arc<dyn ReviewsApi>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        api: Arc<dyn ReviewsApi>,
        filter: FilterState,
        options: QueryOptions,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            filter,
            reviews: Query::new(),
            selected: 0,
            time_range_popup: None,
            show_back_to_top: false,
            spinner_frame: 0,
            should_quit: false,
            options,
            api,
            action_tx,
        }
    }

    pub fn content(&self) -> ContentView<'_> {
        match self.reviews.status() {
            QueryStatus::Pending => ContentView::Loading,
            QueryStatus::Failure(message) => ContentView::Error(message),
            QueryStatus::Idle | QueryStatus::Success => match self.reviews.data() {
                Some(data) if !data.reviews.is_empty() => ContentView::List(&data.reviews),
                _ => ContentView::Empty,
            },
        }
    }

    fn review_count(&self) -> usize {
        self.reviews.data().map_or(0, |data| data.reviews.len())
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init if self.options.refetch_on_mount => Action::LoadReviews,
            Event::Tick => Action::Tick,
            Event::Key(key) => self.handle_key(key),
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if self.time_range_popup.is_some() {
            return match key.code {
                KeyCode::Char('j') | KeyCode::Down => Action::PopupDown,
                KeyCode::Char('k') | KeyCode::Up => Action::PopupUp,
                KeyCode::Enter => Action::PopupSelect,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => Action::ClosePopup,
                _ => Action::None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => Action::PageDown,
                KeyCode::Char('u') => Action::PageUp,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Char('g') | KeyCode::Home => Action::GoToTop,
            KeyCode::Char('G') | KeyCode::End => Action::GoToBottom,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('t') => Action::OpenTimeRangeSelect,
            KeyCode::Char('0') => Action::ClearRating,
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| Rating::new(d as u8))
                .map_or(Action::None, Action::SelectRating),
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }

            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::ScrollDown => {
                if self.selected + 1 < self.review_count() {
                    self.selected += 1;
                }
            }
            Action::PageUp => {
                self.selected = self.selected.saturating_sub(PAGE_SIZE);
            }
            Action::PageDown => {
                let last = self.review_count().saturating_sub(1);
                self.selected = (self.selected + PAGE_SIZE).min(last);
            }
            Action::GoToTop => {
                self.selected = 0;
            }
            Action::GoToBottom => {
                self.selected = self.review_count().saturating_sub(1);
            }

            Action::LoadReviews | Action::Refresh => {
                self.execute_query();
            }
            Action::ReviewsLoaded { response, load_id } => {
                if self
                    .reviews
                    .settle::<String>(load_id, Ok(response.map(|r| *r)))
                {
                    self.selected = 0;
                }
            }
            Action::ReviewsFailed { message, load_id } => {
                self.reviews.settle(load_id, Err(message));
            }

            Action::SelectRating(rating) => {
                self.filter.toggle_rating(rating);
                self.execute_query();
            }
            Action::ClearRating => {
                if self.filter.clear_rating() {
                    self.execute_query();
                }
            }
            Action::SelectTimeRange(time_range) => {
                if self.filter.set_time_range(time_range) {
                    self.execute_query();
                }
            }

            Action::OpenTimeRangeSelect => {
                self.time_range_popup = Some(self.filter.time_range.index());
            }
            Action::PopupUp => {
                if let Some(cursor) = self.time_range_popup.as_mut() {
                    *cursor = cursor.saturating_sub(1);
                }
            }
            Action::PopupDown => {
                if let Some(cursor) = self.time_range_popup.as_mut() {
                    *cursor = (*cursor + 1).min(TimeRange::ALL.len() - 1);
                }
            }
            Action::PopupSelect => {
                if let Some(time_range) = self
                    .time_range_popup
                    .take()
                    .and_then(|cursor| TimeRange::ALL.get(cursor).copied())
                {
                    self.update(Action::SelectTimeRange(time_range));
                }
            }
            Action::ClosePopup => {
                self.time_range_popup = None;
            }

            Action::None => {}
        }

        self.show_back_to_top = self.selected >= BACK_TO_TOP_THRESHOLD;
    }

    /// The one path every fetch goes through: take a fresh token, run the
    /// request for the current filters, report back on the action channel.
    fn execute_query(&mut self) {
        let load_id = self.reviews.begin();
        let FilterState { rating, time_range } = self.filter;
        let tx = self.action_tx.clone();
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let result = api.fetch_reviews(rating, time_range).await;
            tx.send(Action::from_fetch(result, load_id)).ok();
        });
    }
}
