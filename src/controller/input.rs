//! Narrow event data passed from the UI layer into the controller.

/// A click on the progress bar, with the bar's bounding box at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressClick {
    pub client_x: f64,
    pub bar_left: f64,
    pub bar_width: f64,
}

impl ProgressClick {
    /// Position of the click along the bar. Not clamped: a stale bar width can
    /// put it outside `0..=1`.
    pub fn fraction(&self) -> f64 {
        (self.client_x - self.bar_left) / self.bar_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl KeyCode {
    /// Map a `KeyboardEvent.code` value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Self::Space,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    /// Focus is inside a text-entry element; shortcuts stay out of the way.
    pub in_text_input: bool,
}

/// Result of a key press: whether to suppress the browser default, and any
/// play request the key started.
#[must_use]
pub struct KeyOutcome<F> {
    pub prevent_default: bool,
    pub pending: Option<super::PendingPlay<F>>,
}

impl<F> KeyOutcome<F> {
    pub(super) fn ignored() -> Self {
        Self {
            prevent_default: false,
            pending: None,
        }
    }
}
