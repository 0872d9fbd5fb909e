//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Printable characters that are not bound are typed into the focused input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Reveal the next batch of flights. Default: Ctrl+n / PageDown
    LoadMore,
    /// Apply the typed From/To pair (or show all when either is empty). Default: Enter
    SubmitSearch,
    /// Drop any filter and refetch everything. Default: Ctrl+r
    ResetSearch,
    /// Move input focus to the next field. Default: Tab
    NextField,
    /// Move input focus to the previous field. Default: Shift+Tab
    PrevField,
    /// Scroll the flight list up one card. Default: Up
    ScrollUp,
    /// Scroll the flight list down one card. Default: Down
    ScrollDown,
    /// Toggle the help overlay. Default: F1
    Help,
    /// Exit the application. Default: Esc / Ctrl+c
    Quit,
}

impl KeyAction {
    /// Short description shown in the help overlay.
    pub fn description(self) -> &'static str {
        match self {
            KeyAction::LoadMore => "Load more results",
            KeyAction::SubmitSearch => "Search (empty field shows all)",
            KeyAction::ResetSearch => "Clear search and reload",
            KeyAction::NextField => "Next input field",
            KeyAction::PrevField => "Previous input field",
            KeyAction::ScrollUp => "Scroll up",
            KeyAction::ScrollDown => "Scroll down",
            KeyAction::Help => "Toggle help",
            KeyAction::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_description() {
        let actions = [
            KeyAction::LoadMore,
            KeyAction::SubmitSearch,
            KeyAction::ResetSearch,
            KeyAction::NextField,
            KeyAction::PrevField,
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::Help,
            KeyAction::Quit,
        ];
        for action in actions {
            assert!(!action.description().is_empty(), "{:?}", action);
        }
    }
}
