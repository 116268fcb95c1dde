use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    let brand = state
        .current
        .params
        .get("brandId")
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .and_then(|id| state.get_brand(id));

    let Some(brand) = brand else {
        let raw = state.current.params.get("brandId").unwrap_or("?");
        let notice = Paragraph::new(format!("No brand with id {}", raw))
            .style(theme.warning_style())
            .block(Block::default().borders(Borders::ALL).title("Brand Store"));
        frame.render_widget(notice, area);
        return;
    };

    let products = state.brand_products(brand.id);
    let title = format!("Brand Store - {} ({})", brand.name, brand.tagline);

    if products.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(title);
        frame.render_widget(
            Paragraph::new("This brand has no products yet").block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Price"),
        Cell::from("Wishes"),
    ])
    .style(theme.title_style())
    .height(1);

    let rows: Vec<Row> = products
        .iter()
        .map(|product| {
            Row::new(vec![
                Cell::from(product.name.clone()),
                Cell::from(product.display_price()),
                Cell::from(product.wish_count.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(55),
        Constraint::Percentage(25),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}
