// UiState holds ephemeral UI-only state (modals, clipboard requests).
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalKind>,
    pub(crate) share_text: Option<String>,
    pub(crate) pending_clipboard: Option<String>,
}

impl UiState {
    /// The session opens on the start modal; the clock runs only after it is
    /// dismissed.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            active_modal: Some(ModalKind::Start),
            share_text: None,
            pending_clipboard: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    Start,
    Success,
    Mistakes,
    Share,
}
