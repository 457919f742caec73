//! Question and feedback screen.

use crate::app::state::AppState;
use crate::quiz::model::{Answer, Image, Question};
use crate::quiz::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (Some(session), Some(question)) = (state.session(), state.current_question()) else {
        return;
    };
    let feedback = match state.quiz.phase {
        Phase::Feedback { correct } => Some(correct),
        _ => None,
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(question.prompt.clone(), Theme::prompt())));
    if let Some(line) = image_line(question.image.as_ref()) {
        lines.push(line);
    }
    if question.multiple {
        lines.push(Line::from(Span::styled(
            "Select all that apply",
            Theme::dim(),
        )));
    }
    lines.push(Line::from(""));

    for (i, answer) in question.answers.iter().enumerate() {
        let selected = session.selected.contains(&answer.value);
        lines.push(answer_line(
            i,
            answer,
            question,
            selected,
            i == state.cursor,
            feedback.is_some(),
        ));
    }

    if let Some(correct) = feedback {
        lines.push(Line::from(""));
        lines.push(if correct {
            Line::from(Span::styled("✓ Correct!", Theme::correct()))
        } else {
            Line::from(Span::styled("✗ Incorrect", Theme::incorrect()))
        });
        if state.config.ui.show_explanations && !question.explanation.is_empty() {
            lines.push(Line::from(Span::styled(
                question.explanation.clone(),
                Theme::explanation(),
            )));
        }
        lines.push(Line::from(""));
        let next = if session.is_last() {
            "Enter: view results"
        } else {
            "Enter: next question"
        };
        lines.push(Line::from(Span::styled(next, Theme::title())));
    } else if question.multiple {
        lines.push(Line::from(""));
        let hint = if session.selected.is_empty() {
            Span::styled("Select at least one answer", Theme::dim())
        } else {
            Span::styled("s: submit answer", Theme::title())
        };
        lines.push(Line::from(hint));
    }

    let star = if question.favorite { "★ " } else { "" };
    let title = format!(" {}Question #{} ", star, question.rank);
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn image_line(image: Option<&Image>) -> Option<Line<'static>> {
    match image {
        Some(Image {
            url,
            width: Some(w),
            height: Some(h),
        }) => Some(Line::from(Span::styled(
            format!("[image {}×{}: {}]", w, h, url),
            Theme::dim(),
        ))),
        Some(Image { url, .. }) => Some(Line::from(Span::styled(
            format!("[image: {}]", url),
            Theme::dim(),
        ))),
        None => None,
    }
}

fn answer_line(
    index: usize,
    answer: &Answer,
    question: &Question,
    selected: bool,
    under_cursor: bool,
    revealed: bool,
) -> Line<'static> {
    let marker = match (question.multiple, selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    };

    let (suffix, style) = if revealed {
        match (answer.correct, selected) {
            (true, _) => (" ✓", Theme::correct()),
            (false, true) => (" ✗", Theme::incorrect()),
            (false, false) => ("", Theme::dim()),
        }
    } else if under_cursor {
        ("", Theme::answer_cursor())
    } else if selected {
        ("", Theme::answer_selected())
    } else {
        ("", Theme::answer())
    };

    let pointer = if under_cursor && !revealed { "❯" } else { " " };
    Line::from(vec![
        Span::styled(format!("{} {} {}. ", pointer, marker, index + 1), style),
        Span::styled(format!("{}{}", answer.title, suffix), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_line_variants() {
        let full = Image {
            url: "https://x/a.png".into(),
            width: Some(640),
            height: Some(480),
        };
        let line = image_line(Some(&full)).unwrap();
        assert_eq!(line.spans[0].content, "[image 640×480: https://x/a.png]");

        let partial = Image {
            url: "https://x/a.png".into(),
            width: Some(640),
            height: None,
        };
        let line = image_line(Some(&partial)).unwrap();
        assert_eq!(line.spans[0].content, "[image: https://x/a.png]");

        assert!(image_line(None).is_none());
    }
}
