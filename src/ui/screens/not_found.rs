use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = Paragraph::new(format!(
        "No page is mounted at {}\n\nPress Esc to go back or 1-5 to navigate.",
        state.current.path
    ))
    .block(Block::default().borders(Borders::ALL).title("Not Found"));
    frame.render_widget(message, area);
}
