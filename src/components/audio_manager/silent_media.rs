// Stand-in element for targets without a browser audio stack.
use crate::controller::MediaElement;
use crate::error::PlaybackError;
use futures_util::future::{self, Ready};

/// Keeps position and source like a real element but rejects every play
/// request as unsupported, so the player shows its placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub struct SilentMedia {
    source: String,
    paused: bool,
    current_time: f64,
}

impl SilentMedia {
    pub fn attach(_element_id: &str) -> Option<Self> {
        Some(Self {
            source: String::new(),
            paused: true,
            current_time: 0.0,
        })
    }

    #[allow(dead_code)]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl MediaElement for SilentMedia {
    type PlayFuture = Ready<Result<(), PlaybackError>>;

    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
    }

    fn load(&mut self) {
        self.paused = true;
        self.current_time = 0.0;
    }

    fn play(&mut self) -> Self::PlayFuture {
        future::ready(Err(PlaybackError::NotSupported(
            "no audio backend on this target".to_string(),
        )))
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn ended(&self) -> bool {
        false
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }
}
