use crate::app::state::{format_clock, AppState};
use crate::quiz::Session;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.session() else {
        return;
    };
    let percentage = session.percentage();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary
            Constraint::Length(3), // Gauge
            Constraint::Min(3),    // Review
        ])
        .split(area);

    let mut summary = vec![
        Line::from(Span::styled("Quiz completed!", Theme::title())),
        Line::from(Span::styled(format!("{}%", percentage), Theme::percentage())),
        Line::from(format!(
            "You scored {} out of {} questions correctly",
            session.score,
            session.total()
        )),
    ];
    if session.time_expired {
        summary.push(Line::from(Span::styled(
            "Time is up! Unanswered questions count as incorrect.",
            Theme::incorrect(),
        )));
    }
    if let (Some(start), Some(end)) = (state.started_at, state.finished_at) {
        let secs = (end - start).num_seconds().max(0) as u32;
        summary.push(Line::from(Span::styled(
            format!("Finished at {} after {}", end.format("%H:%M"), format_clock(secs)),
            Theme::dim(),
        )));
    }
    frame.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Performance ")
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::gauge())
        .percent(percentage.min(100) as u16);
    frame.render_widget(gauge, chunks[1]);

    let items: Vec<ListItem> = session
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let (mark, style) = match outcome(session, i) {
                Some(true) => ("✓", Theme::correct()),
                Some(false) => ("✗", Theme::incorrect()),
                None => ("–", Theme::dim()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", mark), style),
                Span::styled(format!("{:>2}. ", i + 1), Theme::dim()),
                Span::raw(question.prompt.clone()),
            ]))
        })
        .collect();

    let review = List::new(items).block(
        Block::default()
            .title(" Review ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    frame.render_widget(review, chunks[2]);
}

/// Result of the `index`-th drawn question. Answers are recorded in
/// presentation order, so position identifies the question even when ids
/// repeat.
fn outcome(session: &Session, index: usize) -> Option<bool> {
    let question = session.questions.get(index)?;
    session
        .answered
        .get(index)
        .filter(|a| a.question_id == question.id)
        .map(|a| a.correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::machine::AnsweredQuestion;
    use crate::quiz::model::{Answer, Question};

    fn question(id: i64, prompt: &str) -> Question {
        Question {
            id,
            rank: 1,
            prompt: prompt.into(),
            image: None,
            multiple: false,
            favorite: false,
            explanation: String::new(),
            answers: vec![Answer {
                value: 1,
                title: "a".into(),
                correct: true,
            }],
        }
    }

    #[test]
    fn test_outcome_is_positional_with_repeated_ids() {
        let session = Session {
            questions: vec![question(9, "first"), question(9, "second"), question(9, "third")],
            index: 2,
            selected: Vec::new(),
            score: 1,
            history: vec![2, 1],
            answered: vec![
                AnsweredQuestion {
                    question_id: 9,
                    selected: vec![2],
                    correct: false,
                },
                AnsweredQuestion {
                    question_id: 9,
                    selected: vec![1],
                    correct: true,
                },
            ],
            remaining_secs: Some(0),
            time_expired: true,
        };

        assert_eq!(outcome(&session, 0), Some(false));
        assert_eq!(outcome(&session, 1), Some(true));
        assert_eq!(outcome(&session, 2), None);
    }
}
