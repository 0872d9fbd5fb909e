//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal listing every action with the keys bound to it.
//! Toggled by the Help action, dismissed the same way.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::BoardStyles;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Order in which actions are listed.
const HELP_ORDER: [KeyAction; 9] = [
    KeyAction::SubmitSearch,
    KeyAction::ResetSearch,
    KeyAction::NextField,
    KeyAction::PrevField,
    KeyAction::LoadMore,
    KeyAction::ScrollUp,
    KeyAction::ScrollDown,
    KeyAction::Help,
    KeyAction::Quit,
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, key_bindings: &KeyBindings, styles: &BoardStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(key_bindings, styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.title),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let close_keys = key_bindings.keys_for(KeyAction::Help).join("/");
    let hint = Paragraph::new(Line::from(Span::styled(
        format!(" Press {} to close ", close_keys),
        styles.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Returns a Rect centered in `area` with the given percentage of its size.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(key_bindings: &KeyBindings, styles: &BoardStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(HELP_ORDER.len() + 3);

    for action in HELP_ORDER {
        let keys = key_bindings.keys_for(action);
        if keys.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", keys.join("/")), styles.help_key),
            Span::raw(action.description()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Type airport codes (e.g. TLV) into the focused field.",
        styles.muted,
    )));
    lines
}
