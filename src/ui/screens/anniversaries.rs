use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::ui::components::card_list;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Anniversary cards
            Constraint::Length(1), // Selection footer
        ])
        .split(area);

    let cards = state.anniversary_cards();
    card_list::render(
        frame,
        chunks[0],
        "Upcoming Anniversaries - [j/k]select [Enter]wishlist",
        &cards,
    );

    let footer = match state
        .catalog
        .anniversaries
        .get(state.selection_state.anniversaries_list_index)
    {
        Some(anniversary) => Paragraph::new(format!(
            " Selected: {} ({}/{})",
            anniversary.friend_name,
            state.selection_state.anniversaries_list_index + 1,
            state.catalog.anniversaries.len()
        ))
        .style(theme.selected_style()),
        None => Paragraph::new(" No anniversaries yet").style(theme.muted_style()),
    };
    frame.render_widget(footer, chunks[1]);
}
