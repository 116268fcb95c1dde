use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    if state.catalog.accounts.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Accounts - none registered");

        frame.render_widget(block, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Bank"),
        Cell::from("Number"),
        Cell::from("Holder"),
        Cell::from("Primary"),
    ])
    .style(theme.title_style())
    .height(1);

    let rows: Vec<Row> = state
        .catalog
        .accounts
        .iter()
        .map(|account| {
            let primary = if account.primary { "✓" } else { "" };
            Row::new(vec![
                Cell::from(account.bank.clone()),
                Cell::from(account.number.clone()),
                Cell::from(account.holder.clone()),
                Cell::from(primary),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(25),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Accounts"));

    frame.render_widget(table, area);
}
