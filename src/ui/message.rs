//! Loading and error screens.

use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = vec![
        Line::from(Span::styled("Loading questions…", Theme::title())),
        Line::from(""),
        Line::from(Span::styled(state.source.to_string(), Theme::dim())),
        Line::from(""),
        Line::from(Span::styled("f: use built-in questions", Theme::dim())),
    ];
    let box_area = centered(area, 60, 7);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, box_area);
}

pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState, message: &str) {
    let block = Block::default()
        .title(" Could not load questions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::error_message());

    let text = vec![
        Line::from(Span::styled(message.to_string(), Theme::error_message())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Source: ", Theme::dim()),
            Span::raw(state.source.to_string()),
        ]),
        Line::from(""),
        Line::from("r  retry loading"),
        Line::from("f  continue with the built-in questions"),
        Line::from("q  quit"),
    ];

    let box_area = centered(area, 70, 11);
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, box_area);
}
