/// The free-text filter input.
///
/// Holds only what the user has typed. Submitting hands the text to the
/// caller; the control itself changes nothing else and never talks to the
/// catalog service. The empty string is a valid filter meaning "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControl {
    text: String,
}

impl FilterControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the input's value, as typing would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Invoke `on_filter` with the current text and return its result.
    pub fn submit<R>(&self, on_filter: impl FnOnce(&str) -> R) -> R {
        on_filter(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_passes_exactly_the_typed_text() {
        let mut control = FilterControl::new();
        control.set_text("Fire Hawk");

        let mut received = Vec::new();
        control.submit(|text| received.push(text.to_string()));

        assert_eq!(received, vec!["Fire Hawk".to_string()]);
    }

    #[test]
    fn empty_text_is_submitted_as_is() {
        let control = FilterControl::new();
        let received = control.submit(str::to_owned);
        assert_eq!(received, "");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let mut control = FilterControl::new();
        control.set_text("  hawk ");
        assert_eq!(control.submit(str::len), 7);
    }
}
