//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It wraps the
//! [`SearchController`] (the result store) with what only the terminal needs:
//! the input form, the list scroll position and overlay visibility.

use crate::state::{PageStatus, PendingFetch, SearchController, SearchForm};

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Submit: form → controller.submit_search → fetch pending, list scrolled to top
/// - Reset: form cleared → controller.reset_search → fetch pending
/// - Load more: controller.load_more, list scrolled to the new batch
/// - Scroll: offset moves within the revealed cards
#[derive(Debug, Clone)]
pub struct AppState {
    /// Result store, search state and pagination cursor.
    pub controller: SearchController,

    /// Contents of the From/To inputs.
    pub form: SearchForm,

    /// Index of the first revealed card drawn at the top of the list.
    /// Valid range: `0..revealed.len()` (0 when nothing is revealed).
    pub scroll_offset: usize,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Where flights come from (URL or file path), shown in the header.
    pub source_label: String,
}

impl AppState {
    /// Fresh state with an empty form, no scroll and help hidden.
    pub fn new(controller: SearchController, source_label: impl Into<String>) -> Self {
        Self {
            controller,
            form: SearchForm::new(),
            scroll_offset: 0,
            help_visible: false,
            source_label: source_label.into(),
        }
    }

    /// Submit whatever is typed in the form.
    ///
    /// Both inputs filled: filtered search, inputs cleared. Either empty: show all,
    /// inputs left as typed.
    pub fn submit(&mut self) -> PendingFetch {
        let (origin, destination) = self.form.take_route();
        self.scroll_offset = 0;
        self.controller.submit_search(&origin, &destination)
    }

    /// Clear the form and any filter, and refetch everything.
    pub fn reset(&mut self) -> PendingFetch {
        self.form.clear();
        self.scroll_offset = 0;
        self.controller.reset_search()
    }

    /// Reveal the next batch and bring it into view.
    pub fn load_more(&mut self) -> PageStatus {
        let first_new = self.controller.cursor();
        let status = self.controller.load_more();
        if status.newly_revealed > 0 && first_new > 0 {
            self.scroll_offset = first_new;
        }
        status
    }

    /// Scroll one card up.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll one card down, stopping at the last revealed card.
    pub fn scroll_down(&mut self) {
        let max = self.controller.revealed().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Keep the scroll offset inside the revealed range after the set changes.
    pub fn clamp_scroll(&mut self) {
        let max = self.controller.revealed().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }
}
