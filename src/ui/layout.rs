use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + progress
            Constraint::Min(5),    // Screen body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Keep long prompts readable on wide terminals
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Max(100),
            Constraint::Min(1),
        ])
        .split(main_chunks[1])[1];

    AppLayout {
        header: main_chunks[0],
        body,
        status_bar: main_chunks[2],
    }
}

/// Centered box of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
