//! Quiz domain: question model, scoring, subset drawing and the session
//! state machine. Nothing in here touches the terminal or the network.

pub mod draw;
pub mod fallback;
pub mod machine;
pub mod model;
pub mod scoring;
pub mod settings;

pub use machine::{Phase, Quiz, QuizEvent, Session};
pub use model::Question;
