use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn answer() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn answer_cursor() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn answer_selected() -> Style {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    }

    pub fn correct() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn incorrect() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn explanation() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn timer() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn timer_low() -> Style {
        Style::default()
            .fg(Color::Red)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn score() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Color::Blue).bg(Color::Black)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn percentage() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}
