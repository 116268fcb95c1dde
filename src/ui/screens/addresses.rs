use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    if state.catalog.addresses.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Addresses - none registered");

        frame.render_widget(block, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Alias"),
        Cell::from("Recipient"),
        Cell::from("Address"),
        Cell::from("Phone"),
    ])
    .style(theme.title_style())
    .height(1);

    let rows: Vec<Row> = state
        .catalog
        .addresses
        .iter()
        .map(|address| {
            Row::new(vec![
                Cell::from(address.alias.clone()),
                Cell::from(address.recipient.clone()),
                Cell::from(address.address.clone()),
                Cell::from(address.phone.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(15),
        Constraint::Percentage(20),
        Constraint::Percentage(45),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Addresses"));

    frame.render_widget(table, area);
}
