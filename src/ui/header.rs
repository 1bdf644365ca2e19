use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::types::DEFAULT_TIME_RANGE;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let data = app.reviews.data();
    let app_id = data.map_or("-", |d| d.app_id.as_str());
    let count = data.map_or(0, |d| d.count);
    let hours = data.map_or(DEFAULT_TIME_RANGE, |d| d.last_hours).hours();

    let refresh = if app.reviews.is_loading() {
        Span::styled(
            format!("{} refreshing…", super::spinner(app)),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("[r] refresh", Style::default().fg(Color::Blue))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("App ID: {} • {} reviews ({}h)", app_id, count, hours),
            Style::default().fg(Color::Gray),
        )),
        Line::from(refresh),
    ];

    let header = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            " App Reviews ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    );

    frame.render_widget(header, area);
}
