use crate::models::Chapter;

/// Mutable playback state owned by a single controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerState {
    pub current_chapter_index: usize,
    pub is_playing: bool,
}

/// Which transport icon is visible. Exactly one is shown at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportIcon {
    #[default]
    Play,
    Pause,
}

impl TransportIcon {
    pub fn for_playing(is_playing: bool) -> Self {
        if is_playing {
            Self::Pause
        } else {
            Self::Play
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

/// Everything the player view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDisplay {
    pub title: String,
    pub subtitle: String,
    /// Fill width of the progress bar, 0..=100 for a well-behaved element.
    pub progress_percent: f64,
    pub elapsed: String,
    pub total: String,
    pub icon: TransportIcon,
}

impl Default for PlayerDisplay {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            progress_percent: 0.0,
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
            icon: TransportIcon::Play,
        }
    }
}

impl PlayerDisplay {
    pub(super) fn show_chapter(&mut self, chapter: &Chapter) {
        self.title = chapter.title();
        self.subtitle = chapter.display_name.clone();
        self.progress_percent = 0.0;
        self.elapsed = "0:00".to_string();
    }

    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}
