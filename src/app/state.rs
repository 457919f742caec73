use crate::config::AppConfig;
use crate::quiz::settings::{self, MINUTE_STEP};
use crate::quiz::{Phase, Question, Quiz, QuizEvent, Session};
use crate::source::QuestionSource;
use chrono::{DateTime, Local};

/// Field focused on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetupField {
    QuestionCount,
    Timing,
    TimeLimit,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::QuestionCount => SetupField::Timing,
            SetupField::Timing => SetupField::TimeLimit,
            SetupField::TimeLimit => SetupField::QuestionCount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::QuestionCount => SetupField::TimeLimit,
            SetupField::Timing => SetupField::QuestionCount,
            SetupField::TimeLimit => SetupField::Timing,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub source: QuestionSource,
    pub quiz: Quiz,
    /// Highlighted answer on the question screen.
    pub cursor: usize,
    pub setup_field: SetupField,
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, source: QuestionSource) -> Self {
        let quiz = Quiz::new(config.quiz.limits(), config.quiz.timed);
        Self {
            config,
            source,
            quiz,
            cursor: 0,
            setup_field: SetupField::QuestionCount,
            started_at: None,
            finished_at: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Feeds `event` to the quiz and updates the view bookkeeping that
    /// depends on phase changes.
    pub fn dispatch(&mut self, event: QuizEvent) {
        let quiz = std::mem::take(&mut self.quiz);
        let before_phase = quiz.phase.clone();
        let before_index = quiz.session.as_ref().map(|s| s.index);

        self.quiz = quiz.apply(event, &mut rand::rng());

        let index = self.quiz.session.as_ref().map(|s| s.index);
        if self.quiz.phase == Phase::Active && (before_phase == Phase::Setup || index != before_index) {
            self.cursor = 0;
        }
        if before_phase == Phase::Setup && self.quiz.phase == Phase::Active {
            self.started_at = Some(Local::now());
            self.finished_at = None;
        }
        if before_phase != Phase::Completed && self.quiz.phase == Phase::Completed {
            self.finished_at = Some(Local::now());
        }
        if self.quiz.phase == Phase::Setup && before_phase != Phase::Setup {
            self.setup_field = SetupField::QuestionCount;
            self.started_at = None;
            self.finished_at = None;
        }
        self.dirty = true;
    }

    pub fn session(&self) -> Option<&Session> {
        self.quiz.session.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.current_question()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let Some(len) = self.current_question().map(|q| q.answers.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len as isize) as usize;
        self.dirty = true;
    }

    pub fn adjust_question_count(&mut self, delta: isize) {
        let count = self.quiz.settings.question_count as isize + delta;
        self.dispatch(QuizEvent::SetQuestionCount(count.max(1) as usize));
    }

    pub fn toggle_timing(&mut self) {
        let limit = match self.quiz.settings.time_limit_secs {
            Some(_) => None,
            None => Some(settings::default_minutes(self.quiz.settings.question_count) * 60),
        };
        self.dispatch(QuizEvent::SetTimeLimit(limit));
    }

    /// Steps the time limit by whole `MINUTE_STEP`s inside the suggested range.
    pub fn adjust_time_limit(&mut self, steps: i32) {
        let Some(secs) = self.quiz.settings.time_limit_secs else {
            return;
        };
        let (min, max) = settings::suggested_minutes(self.quiz.settings.question_count);
        let minutes = secs.div_ceil(60) as i32 + steps * MINUTE_STEP as i32;
        let minutes = (minutes.max(0) as u32).clamp(min, max);
        self.dispatch(QuizEvent::SetTimeLimit(Some(minutes * 60)));
    }

    pub fn status_line(&self) -> String {
        match &self.quiz.phase {
            Phase::Loading => format!("Loading {}", self.source),
            Phase::Error(_) => "r: retry  f: built-in questions  q: quit".to_string(),
            Phase::Setup => "↑↓: field  ←→: adjust  t: timing  Enter: start  q: quit".to_string(),
            Phase::Active => {
                let multiple = self.current_question().is_some_and(|q| q.multiple);
                if multiple {
                    "↑↓: move  Space: toggle  s: submit  r: restart  q: quit".to_string()
                } else {
                    "↑↓: move  Enter: answer  1-9: pick  r: restart  q: quit".to_string()
                }
            }
            Phase::Feedback { .. } => "Enter: continue  r: restart  q: quit".to_string(),
            Phase::Completed => "r: take quiz again  q: quit".to_string(),
        }
    }

    /// Running score as `score/answered`.
    pub fn score_line(&self) -> Option<String> {
        self.session()
            .map(|s| format!("Score: {}/{}", s.score, s.answered.len()))
    }
}

/// Formats seconds as `mm:ss`, or `h:mm:ss` past an hour.
pub fn format_clock(secs: u32) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
