use crate::quiz::Question;
use crate::timer::Generation;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Question set finished loading
    QuestionsLoaded(Vec<Question>),
    QuestionsFailed(String),

    /// One second elapsed on the countdown task with this generation
    Countdown { generation: Generation },
}
