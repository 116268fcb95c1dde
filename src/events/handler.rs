use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;
use crate::state::AppState;
use crate::ui::Page;

/// Convert crossterm events to Actions
pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            handle_key_event(key_event, state)
        }
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    // While the location prompt is open it captures everything.
    if state.location_input.is_some() {
        return handle_location_prompt_keys(key);
    }

    // Global key bindings (work on all pages)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return Action::Quit
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => return Action::OpenLocationPrompt,
        (KeyCode::Char('x'), KeyModifiers::NONE) => return Action::DismissNotification,
        (KeyCode::Char('R'), KeyModifiers::SHIFT) => return Action::ReloadCatalog,
        (KeyCode::Esc, _) => return Action::NavigateBack,
        _ => {}
    }

    // Menu jumps to the static routes
    match key.code {
        KeyCode::Char('1') => return Action::Navigate("/".to_string()),
        KeyCode::Char('2') => return Action::Navigate("/account-list-page".to_string()),
        KeyCode::Char('3') => return Action::Navigate("/address-list-page".to_string()),
        KeyCode::Char('4') => return Action::Navigate("/my-funding".to_string()),
        KeyCode::Char('5') => return Action::Navigate("/product".to_string()),
        _ => {}
    }

    // Page-specific key bindings
    match state.current_page() {
        Page::AnniversaryList => handle_anniversary_list_keys(key),
        Page::ProductList => handle_product_list_keys(key),
        _ => Action::None,
    }
}

fn handle_location_prompt_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::LocationCancel,
        KeyCode::Enter => Action::LocationSubmit,
        KeyCode::Backspace => Action::LocationBackspace,
        KeyCode::Char(c) => Action::LocationInput(c),
        _ => Action::None,
    }
}

fn handle_anniversary_list_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Enter => Action::OpenSelected,
        _ => Action::None,
    }
}

fn handle_product_list_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Enter => Action::OpenSelected,
        KeyCode::Char('b') => Action::OpenSelectedBrand,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state() -> AppState {
        let temp_dir = TempDir::new().unwrap();
        AppState::new(temp_dir.path().join("config.toml")).unwrap()
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_menu_keys_navigate_to_static_routes() {
        let state = state();
        assert!(matches!(
            handle_event(press(KeyCode::Char('5')), &state),
            Action::Navigate(path) if path == "/product"
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('1')), &state),
            Action::Navigate(path) if path == "/"
        ));
    }

    #[test]
    fn test_location_prompt_captures_typed_characters() {
        let mut state = state();
        state.location_input = Some("/pro".to_string());
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &state),
            Action::LocationInput('d')
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &state),
            Action::LocationSubmit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &state),
            Action::LocationCancel
        ));
    }

    #[test]
    fn test_x_dismisses_the_current_notification() {
        let state = state();
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &state),
            Action::DismissNotification
        ));
    }

    #[test]
    fn test_escape_navigates_back_outside_the_prompt() {
        let state = state();
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &state),
            Action::NavigateBack
        ));
    }
}
