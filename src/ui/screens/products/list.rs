use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    if state.catalog.products.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Products - catalog is empty");

        frame.render_widget(block, area);
        return;
    }

    let selected_index = state.selection_state.products_list_index;

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Brand"),
        Cell::from("Price"),
        Cell::from("Wishes"),
    ])
    .style(theme.title_style())
    .height(1);

    let rows: Vec<Row> = state
        .catalog
        .products
        .iter()
        .enumerate()
        .map(|(idx, product)| {
            let brand_name = state
                .get_brand(product.brand_id)
                .map(|b| b.name.as_str())
                .unwrap_or("Unknown");

            let row = Row::new(vec![
                Cell::from(product.name.clone()),
                Cell::from(brand_name.to_string()),
                Cell::from(product.display_price()),
                Cell::from(product.wish_count.to_string()),
            ]);

            if idx == selected_index {
                row.style(theme.selected_style())
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Products - [j/k]select [Enter]detail [b]rand store"),
        );

    frame.render_widget(table, area);
}
