use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Seconds left at which the clock turns red.
const LOW_TIME_SECS: u32 = 30;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut right: Vec<Span> = Vec::new();

    if let Some(score) = state.score_line() {
        right.push(Span::styled(format!(" {} ", score), Theme::score()));
    }

    // Remaining time
    if let Some(secs) = state.session().and_then(|s| s.remaining_secs) {
        let style = if secs <= LOW_TIME_SECS {
            Theme::timer_low()
        } else {
            Theme::timer()
        };
        right.push(Span::styled(format!(" ⏱ {} ", format_clock(secs)), style));
    }

    let hint = format!(" {} ", state.status_line());
    let used: usize = hint.width() + right.iter().map(|s| s.content.width()).sum::<usize>();
    let remaining = (area.width as usize).saturating_sub(used);

    let mut parts = vec![
        Span::styled(hint, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
    ];
    parts.extend(right);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
