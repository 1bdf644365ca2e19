use chrono::Local;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::types::{Rating, Review};

pub const STAR_COLOR: Color = Color::Yellow;

pub fn stars(rating: Rating) -> String {
    Rating::all()
        .map(|r| if r <= rating { '★' } else { '☆' })
        .collect()
}

/// Three lines per review: title and stars, body, author and date.
pub fn item(review: &Review, width: usize) -> ListItem<'static> {
    let title_width = width.saturating_sub(7).max(10);
    let title = truncate(&review.title, title_width);

    let date = review
        .updated_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:<title_width$}", title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(stars(review.rating), Style::default().fg(STAR_COLOR)),
        ]),
        Line::from(Span::styled(
            truncate(&review.content, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("By {}", review.author),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(date, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
