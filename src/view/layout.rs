//! Board layout rendering.
//!
//! Header, From/To form, the stack of revealed flight cards and a one-line
//! status bar. Pure function of the state: nothing here mutates it.

use super::constants::{CARD_HEIGHT, FORM_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::flight_card::FlightCard;
use super::search_form::SearchFormWidget;
use super::styles::BoardStyles;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, LoadPhase, SearchState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole board.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    key_bindings: &KeyBindings,
    styles: &BoardStyles,
) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(0), // Flight cards
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, vertical_chunks[0], state, styles);
    frame.render_widget(
        SearchFormWidget::new(&state.form, styles),
        vertical_chunks[1],
    );
    render_results(frame, vertical_chunks[2], state, styles);
    render_status_bar(frame, vertical_chunks[3], state, key_bindings, styles);
}

/// Number of whole cards that fit in a results area of `height` lines.
pub fn visible_card_count(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let search_label = match state.controller.search() {
        SearchState::Idle => "All flights".to_string(),
        SearchState::Filtered { route } => format!("Route {}", route),
    };

    let line = Line::from(vec![
        Span::styled(" Flightboard ", styles.title),
        Span::styled(format!("| {} ", search_label), styles.airline),
        Span::styled(format!("| {}", state.source_label), styles.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &BoardStyles) {
    let revealed = state.controller.revealed();

    if revealed.is_empty() {
        let message = match state.controller.phase() {
            LoadPhase::Ready => "No flights to show.".to_string(),
            _ => state.controller.status_message(),
        };
        let style = match state.controller.phase() {
            LoadPhase::Failed(_) => styles.error,
            _ => styles.muted,
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let first = state.scroll_offset.min(revealed.len() - 1);
    let capacity = visible_card_count(area.height).max(1);
    let mut y = area.y;

    for record in revealed.iter().skip(first).take(capacity) {
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, height);
        frame.render_widget(FlightCard::new(record, styles), card_area);
        y += height;
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    key_bindings: &KeyBindings,
    styles: &BoardStyles,
) {
    let controller = &state.controller;
    let mut spans = Vec::new();

    let message = controller.status_message();
    if !message.is_empty() {
        let style = match controller.phase() {
            LoadPhase::Failed(_) => styles.error,
            _ => styles.muted,
        };
        spans.push(Span::styled(format!(" {} ", message), style));
        spans.push(Span::raw("| "));
    }

    if *controller.phase() == LoadPhase::Ready {
        spans.push(Span::raw(format!(
            "Showing {} of {} ",
            controller.cursor(),
            controller.active_len()
        )));
    }

    if controller.can_load_more() {
        spans.push(Span::styled(
            format!(
                "| {}: load more ",
                key_bindings.keys_for(KeyAction::LoadMore).join("/")
            ),
            styles.hint,
        ));
    }

    spans.push(Span::styled(
        format!("| {}: help", key_bindings.keys_for(KeyAction::Help).join("/")),
        styles.muted,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
