//! Quiz session state machine.
//!
//! [`Quiz`] holds everything the quiz knows: the loaded pool, the settings
//! for the next session and the running [`Session`]. Every user action and
//! every countdown tick is a [`QuizEvent`]; [`Quiz::apply`] consumes the
//! current state and returns the next one. Events that make no sense in the
//! current phase return the state unchanged.
//!
//! ```text
//! Loading -> Error | Setup
//! Error   -> Loading (retry) | Setup (fallback)
//! Setup   -> Active
//! Active  -> Feedback | Completed (time expired)
//! Feedback -> Active | Completed
//! Active | Feedback | Completed -> Setup (restart)
//! ```

use crate::quiz::draw;
use crate::quiz::fallback;
use crate::quiz::model::{AnswerValue, Question};
use crate::quiz::scoring;
use crate::quiz::settings::{self, QuizLimits, SessionSettings};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Error(String),
    Setup,
    Active,
    /// An answer was just scored; `correct` is its result.
    Feedback { correct: bool },
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    Loaded(Vec<Question>),
    LoadFailed(String),
    Retry,
    UseFallback,
    SetQuestionCount(usize),
    SetTimeLimit(Option<u32>),
    Start,
    Select(AnswerValue),
    Submit,
    Next,
    Tick,
    Restart,
}

/// Submitted answer for one question, kept for the results review.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub question_id: i64,
    pub selected: Vec<AnswerValue>,
    pub correct: bool,
}

/// State of one run through a drawn subset of the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub questions: Vec<Question>,
    pub index: usize,
    /// Pending selection for the current question.
    pub selected: Vec<AnswerValue>,
    pub score: usize,
    /// Every submitted answer value, in submission order.
    pub history: Vec<AnswerValue>,
    pub answered: Vec<AnsweredQuestion>,
    /// `None` for untimed sessions.
    pub remaining_secs: Option<u32>,
    pub time_expired: bool,
}

impl Session {
    fn new(questions: Vec<Question>, time_limit_secs: Option<u32>) -> Self {
        Self {
            questions,
            index: 0,
            selected: Vec::new(),
            score: 0,
            history: Vec::new(),
            answered: Vec::new(),
            remaining_secs: time_limit_secs,
            time_expired: false,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    pub fn percentage(&self) -> u32 {
        scoring::percentage(self.score, self.total())
    }

    fn record(&mut self, selected: Vec<AnswerValue>) -> bool {
        let Some(question) = self.current() else {
            return false;
        };
        let correct = scoring::is_correct(question, &selected);
        let question_id = question.id;
        if correct {
            self.score += 1;
        }
        self.history.extend_from_slice(&selected);
        self.answered.push(AnsweredQuestion {
            question_id,
            selected,
            correct,
        });
        correct
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub phase: Phase,
    pub pool: Vec<Question>,
    pub settings: SessionSettings,
    pub session: Option<Session>,
    limits: QuizLimits,
    timed: bool,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(QuizLimits::default(), true)
    }
}

impl Quiz {
    /// A quiz waiting for its question pool. `timed` selects whether new
    /// settings start with a countdown.
    pub fn new(limits: QuizLimits, timed: bool) -> Self {
        Self {
            phase: Phase::Loading,
            pool: Vec::new(),
            settings: SessionSettings::for_pool(0, limits, timed),
            session: None,
            limits,
            timed,
        }
    }

    pub fn max_question_count(&self) -> usize {
        settings::max_count(self.pool.len(), self.limits)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(Session::current)
    }

    /// The countdown may only run while a timed question is being answered.
    pub fn timer_should_run(&self) -> bool {
        self.phase == Phase::Active
            && self
                .session
                .as_ref()
                .and_then(|s| s.remaining_secs)
                .is_some_and(|secs| secs > 0)
    }

    pub fn apply<R: Rng + ?Sized>(mut self, event: QuizEvent, rng: &mut R) -> Self {
        match (self.phase.clone(), event) {
            (Phase::Loading, QuizEvent::Loaded(pool)) => {
                if pool.is_empty() {
                    self.phase = Phase::Error("question set is empty".to_string());
                } else {
                    self.set_pool(pool);
                }
            }
            (Phase::Loading, QuizEvent::LoadFailed(message)) => {
                tracing::warn!(%message, "question load failed");
                self.phase = Phase::Error(message);
            }
            (Phase::Error(_), QuizEvent::Retry) => {
                self.phase = Phase::Loading;
            }
            (Phase::Loading | Phase::Error(_), QuizEvent::UseFallback) => {
                tracing::info!("using built-in question set");
                self.set_pool(fallback::questions());
            }
            (Phase::Setup, QuizEvent::SetQuestionCount(count)) => {
                let count = count.clamp(1, self.max_question_count());
                self.settings.question_count = count;
                if let Some(secs) = self.settings.time_limit_secs {
                    let (min, max) = settings::suggested_minutes(count);
                    let minutes = secs.div_ceil(60).clamp(min, max);
                    self.settings.time_limit_secs = Some(minutes * 60);
                }
            }
            (Phase::Setup, QuizEvent::SetTimeLimit(limit)) => {
                self.settings.time_limit_secs = limit.map(|secs| secs.max(1));
            }
            (Phase::Setup, QuizEvent::Start) => {
                let questions = draw::draw(&self.pool, self.settings.question_count, rng);
                tracing::info!(
                    questions = questions.len(),
                    time_limit_secs = ?self.settings.time_limit_secs,
                    "session started"
                );
                self.session = Some(Session::new(questions, self.settings.time_limit_secs));
                self.phase = Phase::Active;
            }
            (Phase::Active, QuizEvent::Select(value)) => self.select(value),
            (Phase::Active, QuizEvent::Submit) => self.submit(),
            (Phase::Feedback { .. }, QuizEvent::Next) => self.advance(),
            (Phase::Active, QuizEvent::Tick) => self.tick(),
            (
                Phase::Active | Phase::Feedback { .. } | Phase::Completed,
                QuizEvent::Restart,
            ) => {
                self.session = None;
                self.phase = Phase::Setup;
            }
            (phase, event) => {
                tracing::trace!(?phase, ?event, "event ignored");
            }
        }
        self
    }

    fn set_pool(&mut self, pool: Vec<Question>) {
        self.settings = SessionSettings::for_pool(pool.len(), self.limits, self.timed);
        self.pool = pool;
        self.session = None;
        self.phase = Phase::Setup;
    }

    fn select(&mut self, value: AnswerValue) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(question) = session.current() else {
            return;
        };
        if !question.has_answer(value) {
            return;
        }

        if question.multiple {
            if let Some(pos) = session.selected.iter().position(|v| *v == value) {
                session.selected.remove(pos);
            } else {
                session.selected.push(value);
            }
        } else {
            session.selected = vec![value];
            let correct = session.record(vec![value]);
            self.phase = Phase::Feedback { correct };
        }
    }

    fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let is_multiple = session.current().is_some_and(|q| q.multiple);
        if !is_multiple || session.selected.is_empty() {
            return;
        }
        let selected = session.selected.clone();
        let correct = session.record(selected);
        self.phase = Phase::Feedback { correct };
    }

    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_last() {
            tracing::info!(
                score = session.score,
                total = session.total(),
                "session completed"
            );
            self.phase = Phase::Completed;
        } else {
            session.index += 1;
            session.selected.clear();
            self.phase = Phase::Active;
        }
    }

    fn tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(remaining) = session.remaining_secs else {
            return;
        };
        let remaining = remaining.saturating_sub(1);
        session.remaining_secs = Some(remaining);
        if remaining == 0 {
            session.time_expired = true;
            tracing::info!(
                score = session.score,
                total = session.total(),
                "time expired"
            );
            self.phase = Phase::Completed;
        }
    }
}
