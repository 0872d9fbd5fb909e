//! Board styling configuration.
//!
//! Colours for the input form, flight cards and status bar, all switched off
//! together when colour output is disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BoardStyles =====

/// Styles used across the board.
///
/// Modifiers (bold, reversed) survive with colours disabled so the focused
/// input and headings stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyles {
    /// Header title.
    pub title: Style,
    /// Input that has focus.
    pub focused_input: Style,
    /// Input without focus.
    pub input: Style,
    /// Flight card border.
    pub card_border: Style,
    /// Airline name on a card.
    pub airline: Style,
    /// Departure and arrival times.
    pub time: Style,
    /// Labels and secondary text.
    pub muted: Style,
    /// Failure messages.
    pub error: Style,
    /// Load-more hint and flight status.
    pub hint: Style,
    /// Key names in the help overlay.
    pub help_key: Style,
}

impl BoardStyles {
    /// Styles following `NO_COLOR` only.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// If colors are disabled, only text modifiers are kept.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                focused_input: bold.fg(Color::Yellow),
                input: Style::default().fg(Color::Gray),
                card_border: Style::default().fg(Color::Blue),
                airline: bold.fg(Color::White),
                time: Style::default().fg(Color::Green),
                muted: Style::default().fg(Color::DarkGray),
                error: bold.fg(Color::Red),
                hint: Style::default().fg(Color::Yellow),
                help_key: bold.fg(Color::Yellow),
            }
        } else {
            Self {
                title: bold,
                focused_input: bold.add_modifier(Modifier::REVERSED),
                input: Style::default(),
                card_border: Style::default(),
                airline: bold,
                time: Style::default(),
                muted: Style::default(),
                error: bold,
                hint: Style::default(),
                help_key: bold,
            }
        }
    }
}

impl Default for BoardStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
