//! Player Controller - binds UI intents to a media element and keeps the
//! display model in step with what the element is actually doing.
//!
//! The element's own `play`/`pause` events are the source of truth for
//! `is_playing`. Play requests are asynchronous; each one carries a
//! generation ticket so a pause or chapter change issued before it resolves
//! makes the late result a no-op.

mod input;
mod media;
mod state;

#[cfg(test)]
mod tests;

pub use input::{KeyCode, KeyInput, KeyOutcome, ProgressClick};
pub use media::{MediaElement, PendingPlay, PlayTicket};
pub use state::{PlayerDisplay, PlayerState, TransportIcon};

use crate::db::PlayerSettings;
use crate::error::PlaybackError;
use crate::models::{Chapter, ChapterListEntry};
use crate::utils::{format_time, known_duration, parse_leading_int};
use dioxus::logger::tracing::{debug, info, warn};

pub struct PlayerController<M: MediaElement> {
    media: M,
    chapters: Vec<Chapter>,
    chapter_list: Vec<ChapterListEntry>,
    state: PlayerState,
    display: PlayerDisplay,
    seek_step_secs: f64,
    coming_soon_text: String,
    play_generation: u64,
    /// Set when the element paused itself at the end of a playing chapter.
    playing_at_end: bool,
}

impl<M: MediaElement> PlayerController<M> {
    /// Build a controller and load the first chapter (paused).
    pub fn new(
        media: M,
        chapters: Vec<Chapter>,
        chapter_list: Vec<ChapterListEntry>,
        settings: &PlayerSettings,
    ) -> Self {
        let mut controller = Self {
            media,
            chapters,
            chapter_list,
            state: PlayerState::default(),
            display: PlayerDisplay::default(),
            seek_step_secs: settings.seek_step_secs,
            coming_soon_text: settings.coming_soon_text.clone(),
            play_generation: 0,
            playing_at_end: false,
        };
        controller.load_chapter(0);
        controller
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn display(&self) -> &PlayerDisplay {
        &self.display
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_list(&self) -> &[ChapterListEntry] {
        &self.chapter_list
    }

    #[allow(dead_code)]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Point the element at a chapter and reset the progress display.
    /// Out-of-range indices are ignored. Does not start playback.
    pub fn load_chapter(&mut self, index: usize) -> bool {
        let Some(chapter) = self.chapters.get(index) else {
            debug!(index, "ignoring out-of-range chapter");
            return false;
        };

        self.state.current_chapter_index = index;
        self.media.set_source(&chapter.source);
        self.media.load();
        self.display.show_chapter(chapter);
        mark_active_entry(&mut self.chapter_list, index);
        // Anything still in flight belongs to the previous source.
        self.play_generation += 1;
        self.playing_at_end = false;
        info!(chapter = chapter.number, source = %chapter.source, "loaded chapter");
        true
    }

    pub fn toggle_play(&mut self) -> Option<PendingPlay<M::PlayFuture>> {
        if self.media.is_paused() {
            Some(self.request_play())
        } else {
            self.media.pause();
            self.play_generation += 1;
            self.state.is_playing = false;
            self.update_play_button();
            None
        }
    }

    fn request_play(&mut self) -> PendingPlay<M::PlayFuture> {
        self.play_generation += 1;
        let ticket = PlayTicket {
            generation: self.play_generation,
        };
        PendingPlay {
            ticket,
            request: self.media.play(),
        }
    }

    /// Report the outcome of a play request. Results for superseded tickets
    /// are logged and otherwise dropped.
    pub fn finish_play(&mut self, ticket: PlayTicket, result: Result<(), PlaybackError>) {
        let current = ticket.generation == self.play_generation;
        match result {
            Ok(()) => {
                if !current {
                    debug!("dropping stale play resolution");
                    return;
                }
                self.state.is_playing = true;
                self.update_play_button();
            }
            Err(err) => {
                warn!("Playback failed: {err}");
                if current && err.is_source_unavailable() {
                    self.display.subtitle = self.coming_soon_text.clone();
                }
            }
        }
    }

    pub fn prev_chapter(&mut self) -> Option<PendingPlay<M::PlayFuture>> {
        let index = self.state.current_chapter_index.checked_sub(1)?;
        self.move_to(index)
    }

    pub fn next_chapter(&mut self) -> Option<PendingPlay<M::PlayFuture>> {
        let index = self.state.current_chapter_index + 1;
        if index >= self.chapters.len() {
            return None;
        }
        self.move_to(index)
    }

    /// Navigation carries the playing intent over to the new chapter.
    fn move_to(&mut self, index: usize) -> Option<PendingPlay<M::PlayFuture>> {
        let was_playing = self.state.is_playing;
        if !self.load_chapter(index) {
            return None;
        }
        was_playing.then(|| self.request_play())
    }

    /// `timeupdate`
    pub fn update_progress(&mut self) {
        let Some(duration) = known_duration(self.media.duration()) else {
            return;
        };
        let current = self.media.current_time();
        self.display.progress_percent = current / duration * 100.0;
        self.display.elapsed = format_time(current);
    }

    /// `loadedmetadata`
    pub fn on_loaded_metadata(&mut self) {
        self.display.total = format_time(self.media.duration());
    }

    /// `ended`: roll into the next chapter, or stop after the last one.
    /// The next chapter only starts if the finished one was playing.
    ///
    /// Browsers fire `pause` just before `ended`, so the flag is usually
    /// already cleared here; `on_pause` remembers whether that pause came
    /// from reaching the end.
    pub fn on_ended(&mut self) -> Option<PendingPlay<M::PlayFuture>> {
        let playing_at_end = std::mem::take(&mut self.playing_at_end);
        let was_playing = self.state.is_playing || playing_at_end;
        let next = self.state.current_chapter_index + 1;
        if next < self.chapters.len() {
            self.load_chapter(next);
            was_playing.then(|| self.request_play())
        } else {
            self.state.is_playing = false;
            self.update_play_button();
            None
        }
    }

    /// `pause`
    pub fn on_pause(&mut self) {
        self.playing_at_end = self.state.is_playing && self.media.ended();
        self.state.is_playing = false;
        self.update_play_button();
    }

    /// `play`
    pub fn on_play(&mut self) {
        self.playing_at_end = false;
        self.state.is_playing = true;
        self.update_play_button();
    }

    pub fn seek(&mut self, click: ProgressClick) {
        let Some(duration) = known_duration(self.media.duration()) else {
            return;
        };
        let target = click.fraction() * duration;
        if target.is_finite() {
            self.media.set_current_time(target);
        }
    }

    /// A click in the chapter list. `item` is the position of the entry that
    /// was clicked, or `None` when the click landed outside every entry.
    ///
    /// Playback is toggled after the load no matter what, so the outcome
    /// depends on whether the element reports itself paused after `load()`.
    pub fn handle_chapter_click(
        &mut self,
        item: Option<usize>,
    ) -> Option<PendingPlay<M::PlayFuture>> {
        let entry = self.chapter_list.get(item?)?;
        if entry.locked {
            return None;
        }
        let attr = entry.chapter_attr.clone();

        let Some(number) = parse_leading_int(&attr) else {
            warn!(%attr, "chapter item has no usable number");
            return None;
        };
        // Numbers outside the table skip the load but still toggle.
        if let Some(index) = number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
        {
            self.load_chapter(index);
        }
        self.toggle_play()
    }

    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome<M::PlayFuture> {
        if key.in_text_input {
            return KeyOutcome::ignored();
        }

        match key.code {
            KeyCode::Space => KeyOutcome {
                prevent_default: true,
                pending: self.toggle_play(),
            },
            KeyCode::ArrowLeft => {
                let current = self.media.current_time();
                let pending = if current > self.seek_step_secs {
                    self.media.set_current_time(current - self.seek_step_secs);
                    None
                } else {
                    self.prev_chapter()
                };
                KeyOutcome {
                    prevent_default: false,
                    pending,
                }
            }
            KeyCode::ArrowRight => {
                let current = self.media.current_time();
                let room_to_skip = known_duration(self.media.duration())
                    .map(|duration| current < duration - self.seek_step_secs)
                    .unwrap_or(false);
                let pending = if room_to_skip {
                    self.media.set_current_time(current + self.seek_step_secs);
                    None
                } else {
                    self.next_chapter()
                };
                KeyOutcome {
                    prevent_default: false,
                    pending,
                }
            }
            KeyCode::Other => KeyOutcome::ignored(),
        }
    }

    fn update_play_button(&mut self) {
        self.display.icon = TransportIcon::for_playing(self.state.is_playing);
    }
}

/// Locked entries are skipped entirely: the active entry is the `index`-th
/// unlocked one, whatever its absolute position in the list.
fn mark_active_entry(entries: &mut [ChapterListEntry], index: usize) {
    for (position, entry) in entries.iter_mut().filter(|entry| !entry.locked).enumerate() {
        entry.active = position == index;
    }
}
