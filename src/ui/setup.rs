use crate::app::state::*;
use crate::quiz::settings;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;
    let count = quiz.settings.question_count;
    let (min_minutes, max_minutes) = settings::suggested_minutes(count);

    let block = Block::default()
        .title(" New quiz ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let field = |label: &str, value: String, target: SetupField| -> Line<'static> {
        let focused = state.setup_field == target;
        let marker = if focused { "❯ " } else { "  " };
        let value_style = if focused {
            Theme::answer_cursor()
        } else {
            Theme::answer()
        };
        Line::from(vec![
            Span::styled(marker.to_string(), Theme::answer_cursor()),
            Span::styled(format!("{:<16}", label), Theme::dim()),
            Span::styled(value, value_style),
        ])
    };

    let time_value = match quiz.settings.time_limit_secs {
        Some(secs) => format!("◀ {} min ▶", secs.div_ceil(60)),
        None => "—".to_string(),
    };
    let timing_value = if quiz.settings.is_timed() { "on" } else { "off" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Questions available: ", Theme::dim()),
            Span::raw(quiz.pool.len().to_string()),
        ]),
        Line::from(""),
        field(
            "Questions",
            format!("◀ {} ▶  (1–{})", count, quiz.max_question_count()),
            SetupField::QuestionCount,
        ),
        field("Timer", timing_value.to_string(), SetupField::Timing),
        field("Time limit", time_value, SetupField::TimeLimit),
    ];

    if quiz.settings.is_timed() {
        lines.push(Line::from(Span::styled(
            format!(
                "                  suggested {}–{} minutes",
                min_minutes, max_minutes
            ),
            Theme::dim(),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to start",
        Theme::title(),
    )));

    let box_area = centered(area, 60, lines.len() as u16 + 2);
    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
