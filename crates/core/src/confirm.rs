/// A yes/no dialog guarding a destructive action.
///
/// The modal knows nothing about what it protects: the caller supplies the
/// action at confirmation time. Confirming runs the action once and closes;
/// dismissing only closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmModal {
    open: bool,
    title: String,
    description: String,
}

impl ConfirmModal {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            open: false,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Run `on_confirm` and close.
    ///
    /// Returns `None` without running anything when the modal is closed,
    /// since there is no button to click.
    pub fn confirm<R>(&mut self, on_confirm: impl FnOnce() -> R) -> Option<R> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(on_confirm())
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
