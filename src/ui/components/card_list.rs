use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::CardRecord;
use crate::ui::Theme;

const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 6;

/// Render one card per record, in input order, flowing left-to-right and
/// wrapping onto new rows. The container is drawn even when `cards` is
/// empty. Position in the slice is the only card identity.
pub fn render(frame: &mut Frame, area: Rect, title: &str, cards: &[CardRecord]) {
    let container = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = container.inner(area);
    frame.render_widget(container, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let per_row = (inner.width / CARD_WIDTH).max(1);

    for (index, card) in cards.iter().enumerate() {
        let row = (index as u16) / per_row;
        let col = (index as u16) % per_row;

        let y = inner.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            // Out of vertical space; remaining cards are clipped.
            break;
        }
        let x = inner.x + col * CARD_WIDTH;
        let width = CARD_WIDTH.min(inner.x + inner.width - x);

        let slot = Rect {
            x,
            y,
            width,
            height: CARD_HEIGHT,
        };
        render_card(frame, slot, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardRecord) {
    let theme = Theme::new();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(card.title.clone());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name
            Constraint::Length(1), // date
            Constraint::Length(1), // progress gauge
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(card.name.clone()), chunks[0]);
    frame.render_widget(Paragraph::new(card.date.clone()), chunks[1]);

    // Gauge rejects percentages above 100; the record itself stays untouched.
    let gauge = Gauge::default()
        .gauge_style(theme.primary_style())
        .percent(u16::from(card.progress.min(100)))
        .label(format!("{}%", card.progress));
    frame.render_widget(gauge, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(width: u16, height: u16, cards: &[CardRecord]) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "Cards", cards))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn record(title: &str, name: &str, date: &str, progress: u8) -> CardRecord {
        CardRecord {
            title: title.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            progress,
        }
    }

    #[test]
    fn test_single_card_carries_all_four_values() {
        let text = draw(40, 10, &[record("A", "N1", "2024-01-01", 50)]);
        assert!(text.contains("A"));
        assert!(text.contains("N1"));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_empty_input_renders_container_without_cards() {
        let text = draw(40, 10, &[]);
        assert!(text.contains("Cards"));
        assert!(!text.contains("%"));
    }

    #[test]
    fn test_cards_keep_input_order() {
        let text = draw(80, 10, &[
            record("First", "N1", "2024-01-01", 10),
            record("Second", "N2", "2024-02-02", 20),
        ]);
        let first = text.find("First").unwrap();
        let second = text.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_cards_wrap_to_next_row_when_width_runs_out() {
        // Inner width fits exactly one card, so the second wraps below.
        let text = draw(CARD_WIDTH + 2, 20, &[
            record("First", "N1", "2024-01-01", 10),
            record("Second", "N2", "2024-02-02", 20),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        let first_line = lines.iter().position(|l| l.contains("First")).unwrap();
        let second_line = lines.iter().position(|l| l.contains("Second")).unwrap();
        assert!(second_line > first_line);
    }

    #[test]
    fn test_out_of_range_progress_does_not_panic() {
        let text = draw(40, 10, &[record("A", "N1", "2024-01-01", 250)]);
        assert!(text.contains("250%"));
    }
}
