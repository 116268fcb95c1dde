use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();
    let block = Block::default().borders(Borders::ALL).title("Product Detail");

    let Some(product_id) = state.current.params.get("productId") else {
        frame.render_widget(
            Paragraph::new("No product selected").block(block),
            area,
        );
        return;
    };

    let product = Uuid::parse_str(product_id)
        .ok()
        .and_then(|id| state.get_product(id));

    let Some(product) = product else {
        let notice = Paragraph::new(format!("No product with id {}", product_id))
            .style(theme.warning_style())
            .block(block);
        frame.render_widget(notice, area);
        return;
    };

    let brand_name = state
        .get_brand(product.brand_id)
        .map(|b| b.name.as_str())
        .unwrap_or("Unknown");

    let body = format!(
        "{}\n\nBrand: {}\nPrice: {}\nWished by: {}\n\n{}\n\nOpen /my-funding to attach this product to a funding.",
        product.name,
        brand_name,
        product.display_price(),
        product.wish_count,
        product.description
    );

    frame.render_widget(Paragraph::new(body).block(block), area);
}
