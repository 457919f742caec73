mod app;
mod config;
mod logging;
mod quiz;
mod source;
mod timer;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::source::QuestionSource;
use crate::timer::Countdown;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    let location = config::resolve_source(&cfg, std::env::args().nth(1));
    let source = QuestionSource::parse(&location);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, source).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Loads the question set in the background and reports the outcome as an event.
fn spawn_load(source: QuestionSource, timeout: Duration, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let event = match source::load(&source, timeout).await {
            Ok(questions) => AppEvent::QuestionsLoaded(questions),
            Err(e) => AppEvent::QuestionsFailed(e.to_string()),
        };
        let _ = tx.send(event);
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    source: QuestionSource,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let timeout = cfg.source.timeout();
    let mut state = AppState::new(cfg, source.clone());
    let mut countdown = Countdown::new(COUNTDOWN_PERIOD, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    tracing::info!(%source, "loading questions");
    spawn_load(source.clone(), timeout, event_tx.clone());

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        // Ticks from a countdown that has since been stopped
        if let AppEvent::Countdown { generation } = event {
            if !countdown.is_current(generation) {
                continue;
            }
        }

        let actions = handler::handle_event(&mut state, event);
        countdown.sync(state.quiz.timer_should_run());

        // Process actions
        for action in actions {
            match action {
                Action::LoadQuestions => {
                    tracing::info!(%source, "retrying question load");
                    spawn_load(source.clone(), timeout, event_tx.clone());
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            countdown.stop();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
