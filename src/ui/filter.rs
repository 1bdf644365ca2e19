use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::types::Rating;

use super::review_item::STAR_COLOR;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" Filter ", Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Stars fill up to the selected rating, like a single-select star bar
    let selected = app.filter.rating.map_or(0, Rating::value);
    let mut stars: Vec<Span> = Rating::all()
        .map(|rating| {
            let filled = rating.value() <= selected;
            Span::styled(
                if filled { "★ " } else { "☆ " },
                Style::default().fg(STAR_COLOR),
            )
        })
        .collect();
    stars.push(Span::styled(
        match app.filter.rating {
            Some(rating) => format!(" {}★ only", rating),
            None => " all ratings".to_string(),
        },
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(Line::from(stars)), chunks[0]);

    let time_style = if app.time_range_popup.is_some() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let time_range = Line::from(vec![
        Span::styled("Time: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{} ▾", app.filter.time_range), time_style),
    ]);
    frame.render_widget(Paragraph::new(time_range), chunks[1]);
}
