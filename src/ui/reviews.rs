use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, ContentView};
use crate::types::Review;

use super::review_item;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.content() {
        ContentView::Loading => {
            let text = format!("{} Loading reviews...", super::spinner(app));
            render_centered(frame, area, text, Style::default().fg(Color::Gray));
        }
        ContentView::Error(message) => {
            render_centered(frame, area, message.to_string(), Style::default().fg(Color::Red));
        }
        ContentView::Empty => {
            render_centered(
                frame,
                area,
                "No reviews data available".to_string(),
                Style::default().fg(Color::Gray),
            );
        }
        ContentView::List(reviews) => render_list(frame, app, reviews, area),
    }
}

fn render_centered(frame: &mut Frame, area: Rect, text: String, style: Style) {
    let block = Block::default().borders(Borders::ALL);
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::from(""); top_padding as usize];
    lines.push(Line::styled(text, style));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, app: &App, reviews: &[Review], area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<_> = reviews
        .iter()
        .map(|review| review_item::item(review, width))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Reviews ({})", reviews.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    state.select(Some(app.selected.min(reviews.len().saturating_sub(1))));

    frame.render_stateful_widget(list, area, &mut state);
}
