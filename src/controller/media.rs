//! The capability set the player needs from an audio element.

use crate::error::PlaybackError;
use std::future::Future;

/// A playable media element (an `<audio>` tag in the browser).
///
/// Lifecycle events (`timeupdate`, `loadedmetadata`, `ended`, `pause`, `play`)
/// are not part of the trait; the platform layer forwards them to the
/// controller's `on_*` methods.
pub trait MediaElement {
    /// Resolves once playback has actually started, or with the rejection reason.
    type PlayFuture: Future<Output = Result<(), PlaybackError>> + 'static;

    fn set_source(&mut self, source: &str);
    fn load(&mut self);
    fn play(&mut self) -> Self::PlayFuture;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// True once playback has reached the end of the current source.
    fn ended(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// NaN until metadata has loaded.
    fn duration(&self) -> f64;
}

/// Identifies one play request. Only the newest ticket may change player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    pub(super) generation: u64,
}

/// A play request the caller must drive to completion and hand back through
/// `PlayerController::finish_play`.
#[must_use = "the play request does nothing unless awaited and reported back"]
pub struct PendingPlay<F> {
    pub ticket: PlayTicket,
    pub request: F,
}
