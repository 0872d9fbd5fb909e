//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the From/To input row (border + content).
pub const FORM_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one flight card: border, airline row, flight row, departure and
/// arrival rows, border.
pub const CARD_HEIGHT: u16 = 6;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// How long the event loop waits for input before polling the fetch worker.
pub const TICK_INTERVAL_MS: u64 = 100;
