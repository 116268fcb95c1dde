use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::new();

    let wishlist = state
        .current
        .params
        .get("userId")
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .and_then(|id| state.get_wishlist(id));

    let Some(wishlist) = wishlist else {
        let raw = state.current.params.get("userId").unwrap_or("?");
        let notice = Paragraph::new(format!("No wishlist for user {}", raw))
            .style(theme.warning_style())
            .block(Block::default().borders(Borders::ALL).title("Wishlist"));
        frame.render_widget(notice, area);
        return;
    };

    let title = format!("Wishlist - {}", wishlist.owner_name);

    let items: Vec<ListItem> = wishlist
        .product_ids
        .iter()
        .map(|product_id| match state.get_product(*product_id) {
            Some(product) => ListItem::new(format!(
                "  • {} ({})",
                product.name,
                product.display_price()
            )),
            None => ListItem::new(format!("  • unknown product {}", product_id)),
        })
        .collect();

    if items.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(title);
        frame.render_widget(
            Paragraph::new("Nothing wished for yet").block(block),
            area,
        );
        return;
    }

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}
