/// Side effects requested by the handler and carried out by the event loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    LoadQuestions,
    Quit,
}
