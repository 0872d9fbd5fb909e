//! From/To input form (pure state transitions).
//!
//! Mirrors the two text inputs above the flight list. Editing operates on the
//! focused field; submitting hands the raw strings to the controller.

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    /// Departure airport code.
    #[default]
    Origin,
    /// Arrival airport code.
    Destination,
}

impl FormField {
    /// The other field.
    pub fn next(self) -> Self {
        match self {
            FormField::Origin => FormField::Destination,
            FormField::Destination => FormField::Origin,
        }
    }

    /// Two fields, so previous is the same as next.
    pub fn prev(self) -> Self {
        self.next()
    }

    /// Title shown on the input border.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Origin => "From",
            FormField::Destination => "To",
        }
    }
}

/// Contents of the search inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    origin: String,
    destination: String,
    focus: FormField,
}

impl SearchForm {
    /// Empty form, origin focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from CLI arguments.
    pub fn with_values(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            focus: FormField::Origin,
        }
    }

    /// Typed departure code.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Typed arrival code.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Field receiving input.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Text of `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Origin => &self.origin,
            FormField::Destination => &self.destination,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Origin => &mut self.origin,
            FormField::Destination => &mut self.destination,
        }
    }

    /// Append a character to the focused input.
    pub fn insert_char(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    /// Delete the last character of the focused input. No-op when empty.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Take the typed pair for submission.
    ///
    /// When both inputs are filled they are returned and cleared. When either is
    /// empty the search degenerates to "show all", and the inputs are left as
    /// typed.
    pub fn take_route(&mut self) -> (String, String) {
        if self.origin.is_empty() || self.destination.is_empty() {
            return (self.origin.clone(), self.destination.clone());
        }
        self.focus = FormField::Origin;
        (
            std::mem::take(&mut self.origin),
            std::mem::take(&mut self.destination),
        )
    }

    /// Clear both inputs and return focus to the first one.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
