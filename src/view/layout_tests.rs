//! Rendering tests for the board layout.

use super::*;
use crate::model::{FlightRecord, SourceError};
use crate::state::SearchController;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn plain_styles() -> BoardStyles {
    BoardStyles::with_color_config(ColorConfig::from_env_and_args(true))
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let bindings = KeyBindings::default();
    let styles = plain_styles();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &bindings, &styles))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

fn numbered(count: usize) -> Vec<FlightRecord> {
    (1..=count)
        .map(|n| FlightRecord::route("TLV", "JFK").with_number(format!("LY{:03}", n)))
        .collect()
}

fn loaded_state(records: Vec<FlightRecord>) -> AppState {
    let mut state = AppState::new(SearchController::new(3), "flights.json");
    let pending = state.reset();
    state.controller.apply_fetch(pending.request, Ok(records));
    state
}

#[test]
fn loading_state_shows_loading_message() {
    let mut state = AppState::new(SearchController::new(3), "flights.json");
    state.reset();

    let text = render(&state, 80, 24);
    assert!(text.contains("Loading flights..."), "{}", text);
    assert!(!text.contains("load more"), "{}", text);
}

#[test]
fn header_shows_source_and_search() {
    let state = loaded_state(numbered(1));
    let text = render(&state, 80, 24);
    assert!(text.contains("Flightboard"));
    assert!(text.contains("All flights"));
    assert!(text.contains("flights.json"));
}

#[test]
fn header_shows_active_route() {
    let mut state = loaded_state(numbered(1));
    state.form = crate::state::SearchForm::with_values("TLV", "JFK");
    let pending = state.submit();
    state.controller.apply_fetch(pending.request, Ok(numbered(1)));

    let text = render(&state, 80, 24);
    assert!(text.contains("Route TLV → JFK"), "{}", text);
}

#[test]
fn first_batch_is_rendered_with_counter_and_hint() {
    let state = loaded_state(numbered(5));
    let text = render(&state, 80, 24);

    assert!(text.contains("LY001"));
    assert!(text.contains("LY002"));
    assert!(text.contains("LY003"));
    assert!(!text.contains("LY004"));
    assert!(text.contains("Showing 3 of 5"), "{}", text);
    assert!(text.contains("Ctrl+n/PgDn: load more"), "{}", text);
}

#[test]
fn exhausted_set_hides_hint_and_shows_no_more_results() {
    let mut state = loaded_state(numbered(5));
    state.load_more();

    let text = render(&state, 80, 24);
    assert!(text.contains("No more results to show."), "{}", text);
    assert!(text.contains("Showing 5 of 5"), "{}", text);
    assert!(!text.contains("load more"), "{}", text);
}

#[test]
fn empty_result_set_says_so() {
    let state = loaded_state(Vec::new());
    let text = render(&state, 80, 24);
    assert!(text.contains("No flights to show."), "{}", text);
    assert!(text.contains("No more results to show."), "{}", text);
}

#[test]
fn failure_is_shown_in_results_and_status() {
    let mut state = AppState::new(SearchController::new(3), "api");
    let pending = state.reset();
    state
        .controller
        .apply_fetch(pending.request, Err(SourceError::Status { status: 503 }));

    let text = render(&state, 100, 24);
    assert!(text.contains("Failed to load flights"), "{}", text);
    assert!(text.contains("503"), "{}", text);
    assert!(!text.contains("load more"), "{}", text);
}

#[test]
fn cards_start_at_scroll_offset() {
    let mut state = loaded_state(numbered(5));
    state.load_more();
    state.scroll_offset = 3;

    let text = render(&state, 80, 24);
    assert!(!text.contains("LY001"), "{}", text);
    assert!(text.contains("LY004"), "{}", text);
    assert!(text.contains("LY005"), "{}", text);
}

#[test]
fn short_terminal_renders_partial_card_without_panic() {
    let state = loaded_state(numbered(3));
    let text = render(&state, 40, 8);
    assert!(text.contains("Flightboard"));
}

#[test]
fn visible_card_count_uses_whole_cards() {
    assert_eq!(visible_card_count(0), 0);
    assert_eq!(visible_card_count(CARD_HEIGHT - 1), 0);
    assert_eq!(visible_card_count(CARD_HEIGHT * 3 + 2), 3);
}
