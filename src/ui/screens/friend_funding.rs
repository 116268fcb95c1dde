use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::ui::Theme;

/// The always-visible friend-funding region. Rendered by the shell on every
/// route, not mounted through the route table.
pub fn render_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    let block = Block::default().borders(Borders::ALL).title("Friend Funding");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(funding) = state.urgent_friend_funding() else {
        let empty = Paragraph::new("No active friend fundings").style(theme.muted_style());
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let summary = Paragraph::new(format!(
        "{} for {} - ends {}",
        funding.title,
        funding.owner_name,
        funding.ends_on.format("%Y-%m-%d")
    ));
    frame.render_widget(summary, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(theme.primary_style())
        .percent(u16::from(funding.progress_percent()))
        .label(format!(
            "{}% ({} of {})",
            funding.progress_percent(),
            funding.collected,
            funding.goal
        ));
    frame.render_widget(gauge, chunks[1]);
}
