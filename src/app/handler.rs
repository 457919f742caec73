use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::quiz::{Phase, QuizEvent};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::QuestionsLoaded(pool) => {
            tracing::info!(questions = pool.len(), source = %state.source, "questions loaded");
            state.dispatch(QuizEvent::Loaded(pool));
            vec![]
        }
        AppEvent::QuestionsFailed(error) => {
            state.dispatch(QuizEvent::LoadFailed(error));
            vec![]
        }
        AppEvent::Countdown { .. } => {
            state.dispatch(QuizEvent::Tick);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    match state.quiz.phase {
        Phase::Loading => handle_loading_key(state, key),
        Phase::Error(_) => handle_error_key(state, key),
        Phase::Setup => handle_setup_key(state, key),
        Phase::Active => handle_question_key(state, key),
        Phase::Feedback { .. } => handle_feedback_key(state, key),
        Phase::Completed => handle_results_key(state, key),
    }
}

fn handle_loading_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('f') {
        state.dispatch(QuizEvent::UseFallback);
    }
    vec![]
}

fn handle_error_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => {
            state.dispatch(QuizEvent::Retry);
            vec![Action::LoadQuestions]
        }
        KeyCode::Char('f') => {
            state.dispatch(QuizEvent::UseFallback);
            vec![]
        }
        KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_setup_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            state.setup_field = state.setup_field.prev();
            state.dirty = true;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.setup_field = state.setup_field.next();
            state.dirty = true;
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => adjust_setup(state, -1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => adjust_setup(state, 1),
        KeyCode::PageDown => adjust_setup(state, -5),
        KeyCode::PageUp => adjust_setup(state, 5),
        KeyCode::Char('t') => state.toggle_timing(),
        KeyCode::Enter => state.dispatch(QuizEvent::Start),
        KeyCode::Esc => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn adjust_setup(state: &mut AppState, delta: i32) {
    match state.setup_field {
        SetupField::QuestionCount => state.adjust_question_count(delta as isize),
        SetupField::Timing => state.toggle_timing(),
        SetupField::TimeLimit => state.adjust_time_limit(delta.signum()),
    }
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = state.cursor;
            select_at(state, cursor);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if state.current_question().is_some_and(|q| index < q.answers.len()) {
                state.cursor = index;
                select_at(state, index);
            }
        }
        KeyCode::Char('s') => state.dispatch(QuizEvent::Submit),
        KeyCode::Char('r') => state.dispatch(QuizEvent::Restart),
        _ => {}
    }
    vec![]
}

fn select_at(state: &mut AppState, index: usize) {
    let value = state
        .current_question()
        .and_then(|q| q.answers.get(index))
        .map(|a| a.value);
    if let Some(value) = value {
        state.dispatch(QuizEvent::Select(value));
    }
}

fn handle_feedback_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
            state.dispatch(QuizEvent::Next)
        }
        KeyCode::Char('r') => state.dispatch(QuizEvent::Restart),
        _ => {}
    }
    vec![]
}

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => state.dispatch(QuizEvent::Restart),
        KeyCode::Esc => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::fallback;
    use crate::source::QuestionSource;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), QuestionSource::Builtin);
        handle_event(&mut state, AppEvent::QuestionsLoaded(fallback::questions()));
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_error_recovery_keys() {
        let mut state = AppState::new(AppConfig::default(), QuestionSource::Builtin);
        handle_event(&mut state, AppEvent::QuestionsFailed("HTTP status 500".into()));
        assert_eq!(state.quiz.phase, Phase::Error("HTTP status 500".into()));

        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(actions, vec![Action::LoadQuestions]);
        assert_eq!(state.quiz.phase, Phase::Loading);

        handle_event(&mut state, AppEvent::QuestionsFailed("still down".into()));
        handle_event(&mut state, key(KeyCode::Char('f')));
        assert_eq!(state.quiz.phase, Phase::Setup);
        assert_eq!(state.quiz.pool, fallback::questions());
    }

    #[test]
    fn test_answer_flow_through_keys() {
        let mut state = loaded_state();
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.quiz.phase, Phase::Active);
        let total = state.session().unwrap().total();

        for _ in 0..total {
            let question = state.current_question().unwrap().clone();
            if question.multiple {
                for (i, answer) in question.answers.iter().enumerate() {
                    if answer.correct {
                        let digit = char::from(b'1' + i as u8);
                        handle_event(&mut state, key(KeyCode::Char(digit)));
                    }
                }
                assert_eq!(state.quiz.phase, Phase::Active);
                handle_event(&mut state, key(KeyCode::Char('s')));
            } else {
                let index = question.answers.iter().position(|a| a.correct).unwrap();
                for _ in 0..index {
                    handle_event(&mut state, key(KeyCode::Down));
                }
                handle_event(&mut state, key(KeyCode::Enter));
            }
            assert_eq!(state.quiz.phase, Phase::Feedback { correct: true });
            handle_event(&mut state, key(KeyCode::Enter));
        }

        assert_eq!(state.quiz.phase, Phase::Completed);
        assert_eq!(state.session().unwrap().score, total);
        assert!(state.finished_at.is_some());

        handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.quiz.phase, Phase::Setup);
        assert!(state.session().is_none());
    }

    #[test]
    fn test_countdown_event_ticks() {
        let mut state = loaded_state();
        handle_event(&mut state, key(KeyCode::Enter));
        let before = state.session().unwrap().remaining_secs.unwrap();
        handle_event(&mut state, AppEvent::Countdown { generation: 0 });
        assert_eq!(state.session().unwrap().remaining_secs, Some(before - 1));
    }

    #[test]
    fn test_setup_keys() {
        let mut state = loaded_state();
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.quiz.settings.question_count, state.quiz.pool.len() - 1);
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.setup_field, SetupField::Timing);
        handle_event(&mut state, key(KeyCode::Right));
        assert!(!state.quiz.settings.is_timed());
        handle_event(&mut state, key(KeyCode::Char('t')));
        assert!(state.quiz.settings.is_timed());
    }
}
