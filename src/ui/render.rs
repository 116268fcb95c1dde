use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, NotificationLevel};
use super::{screens, Page, Theme};

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new();

    // Main layout: header, menu, content, friend-funding overlay, status bar.
    // The overlay is a named shell region, visible on every route.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Menu
            Constraint::Min(0),    // Main content
            Constraint::Length(4), // Friend funding overlay
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Render header
    let header = Paragraph::new(format!(
        "GIFTFUND - {} ({})        [g] Go to path  [x] Dismiss  [q] Quit",
        state.current_page().title(),
        state.current.path
    ))
    .style(theme.title_style());
    frame.render_widget(header, chunks[0]);

    // Render menu
    let menu = Paragraph::new(
        " [1] Anniversaries  [2] Accounts  [3] Addresses  [4] My Funding  [5] Products",
    );
    frame.render_widget(menu, chunks[1]);

    // Render main content based on the mounted page
    render_main_content(frame, chunks[2], state);

    // Friend funding overlay, independent of the mounted page
    screens::friend_funding::render_overlay(frame, chunks[3], state);

    // Render status bar
    render_status_bar(frame, chunks[4], state, &theme);
}

fn render_main_content(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    match state.current_page() {
        Page::AnniversaryList => screens::anniversaries::render(frame, area, state),
        Page::AccountList => screens::accounts::render(frame, area, state),
        Page::AddressList => screens::addresses::render(frame, area, state),
        Page::MyFunding => screens::my_funding::render(frame, area, state),
        Page::ProductList => screens::products::list::render(frame, area, state),
        Page::ProductDetail => screens::products::detail::render(frame, area, state),
        Page::BrandStore => screens::products::brand::render(frame, area, state),
        Page::Wishlist => screens::products::wishlist::render(frame, area, state),
        Page::NotFound => screens::not_found::render(frame, area, state),
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &AppState,
    theme: &Theme,
) {
    // An open location prompt takes over the status line.
    if let Some(input) = &state.location_input {
        let prompt = Paragraph::new(format!("Go to: {}\u{2588}", input)).style(theme.selected_style());
        frame.render_widget(prompt, area);
        return;
    }

    let status = if let Some(notification) = state.notifications.front() {
        let style = match notification.level {
            NotificationLevel::Success => theme.success_style(),
            NotificationLevel::Warning => theme.warning_style(),
            NotificationLevel::Error => theme.error_style(),
            NotificationLevel::Info => theme.muted_style(),
        };
        Paragraph::new(notification.message.clone()).style(style)
    } else {
        Paragraph::new(format!(
            "Ready | {} | Friends: {} | Products: {} | My fundings: {}",
            state.current.path,
            state.catalog.anniversaries.len(),
            state.catalog.products.len(),
            state.catalog.my_fundings.len()
        ))
    };

    frame.render_widget(status, area);
}
