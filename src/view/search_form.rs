//! From/To input row.

use crate::state::{FormField, SearchForm};
use crate::view::styles::BoardStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Two bordered inputs side by side. The focused one is highlighted and shows
/// a block cursor after its text.
pub struct SearchFormWidget<'a> {
    form: &'a SearchForm,
    styles: &'a BoardStyles,
}

impl<'a> SearchFormWidget<'a> {
    /// Widget over `form`.
    pub fn new(form: &'a SearchForm, styles: &'a BoardStyles) -> Self {
        Self { form, styles }
    }

    fn input(&self, field: FormField) -> Paragraph<'a> {
        let focused = self.form.focus() == field;
        let style = if focused {
            self.styles.focused_input
        } else {
            self.styles.input
        };

        let mut spans = vec![Span::raw(self.form.value(field))];
        if focused {
            spans.push(Span::styled("█", style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(format!(" {} ", field.label())),
        )
    }
}

impl Widget for SearchFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.input(FormField::Origin).render(chunks[0], buf);
        self.input(FormField::Destination).render(chunks[1], buf);
    }
}
