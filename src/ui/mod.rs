mod layout;
mod message;
mod question;
mod results;
mod setup;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::quiz::Phase;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header, state);

    match &state.quiz.phase {
        Phase::Loading => message::render_loading(frame, app_layout.body, state),
        Phase::Error(error) => message::render_error(frame, app_layout.body, state, error),
        Phase::Setup => setup::render(frame, app_layout.body, state),
        Phase::Active | Phase::Feedback { .. } => question::render(frame, app_layout.body, state),
        Phase::Completed => results::render(frame, app_layout.body, state),
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let in_progress = matches!(state.quiz.phase, Phase::Active | Phase::Feedback { .. });
    let session = state.session().filter(|_| in_progress);

    let Some(session) = session else {
        let block = Block::default()
            .title(" crabquiz ")
            .title_style(Theme::title())
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());
        frame.render_widget(block, area);
        return;
    };

    let total = session.total().max(1);
    let position = session.index + 1;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Question {} of {} ", position, session.total()))
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::gauge())
        .ratio((position as f64 / total as f64).clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}
