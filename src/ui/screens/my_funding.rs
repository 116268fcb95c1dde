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
            Constraint::Min(0),    // Funding cards
            Constraint::Length(1), // Totals footer
        ])
        .split(area);

    let cards = state.my_funding_cards();
    let title = format!("My Funding - {}", state.settings.viewer_name);
    card_list::render(frame, chunks[0], &title, &cards);

    let collected: u64 = state
        .catalog
        .my_fundings
        .iter()
        .map(|f| u64::from(f.collected))
        .sum();
    let goal: u64 = state
        .catalog
        .my_fundings
        .iter()
        .map(|f| u64::from(f.goal))
        .sum();

    let footer = Paragraph::new(format!(
        " {} fundings | collected {collected} of {goal}",
        state.catalog.my_fundings.len()
    ))
    .style(theme.muted_style());
    frame.render_widget(footer, chunks[1]);
}
