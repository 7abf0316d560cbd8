use super::*;
use crate::models::{default_chapter_list, default_chapters};
use futures_util::future::{ready, Ready};
use futures_util::FutureExt;

/// In-memory element whose play outcome and `load()` behaviour are scripted.
#[derive(Debug)]
struct ScriptedMedia {
    source: String,
    loads: usize,
    paused: bool,
    current_time: f64,
    duration: f64,
    ended: bool,
    play_result: Result<(), PlaybackError>,
    /// A browser element pauses itself on `load()`; a plain double does not.
    load_resets_paused: bool,
}

impl ScriptedMedia {
    fn new() -> Self {
        Self {
            source: String::new(),
            loads: 0,
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            ended: false,
            play_result: Ok(()),
            load_resets_paused: false,
        }
    }
}

impl MediaElement for ScriptedMedia {
    type PlayFuture = Ready<Result<(), PlaybackError>>;

    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
    }

    fn load(&mut self) {
        self.loads += 1;
        self.current_time = 0.0;
        self.ended = false;
        if self.load_resets_paused {
            self.paused = true;
        }
    }

    fn play(&mut self) -> Self::PlayFuture {
        if self.play_result.is_ok() {
            self.paused = false;
        }
        ready(self.play_result.clone())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn ended(&self) -> bool {
        self.ended
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

type Controller = PlayerController<ScriptedMedia>;

fn controller() -> Controller {
    controller_with(ScriptedMedia::new())
}

fn controller_with(media: ScriptedMedia) -> Controller {
    let chapters = default_chapters();
    let list = default_chapter_list(&chapters);
    PlayerController::new(media, chapters, list, &PlayerSettings::default())
}

type ScriptedPlay = PendingPlay<Ready<Result<(), PlaybackError>>>;

fn settle(controller: &mut Controller, pending: Option<ScriptedPlay>) {
    let pending = pending.expect("expected a play request");
    let result = pending
        .request
        .now_or_never()
        .expect("scripted play futures are always ready");
    controller.finish_play(pending.ticket, result);
}

fn playing_controller() -> Controller {
    let mut c = controller();
    let pending = c.toggle_play();
    settle(&mut c, pending);
    assert!(c.state().is_playing);
    c
}

fn active_positions(c: &Controller) -> Vec<usize> {
    c.chapter_list()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.active)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn starts_paused_on_first_chapter() {
    let c = controller();
    assert_eq!(c.state(), PlayerState::default());
    assert_eq!(c.display().title, "Chapter 1");
    assert_eq!(c.display().subtitle, "The Beginning");
    assert_eq!(c.display().icon, TransportIcon::Play);
    assert_eq!(c.media().source, "audio/chapter-01.mp3");
    assert_eq!(c.media().loads, 1);
    assert_eq!(active_positions(&c), vec![0]);
}

#[test]
fn out_of_range_load_changes_nothing() {
    let mut c = controller();
    c.load_chapter(2);
    let before_state = c.state();
    let before_display = c.display().clone();
    let before_list = c.chapter_list().to_vec();

    for index in [6, 7, 100, usize::MAX] {
        assert!(!c.load_chapter(index));
        assert_eq!(c.state(), before_state);
        assert_eq!(c.display(), &before_display);
        assert_eq!(c.chapter_list(), before_list.as_slice());
        assert_eq!(c.media().source, "audio/chapter-03.mp3");
        assert_eq!(c.media().loads, 2);
    }
}

#[test]
fn load_resets_progress_display() {
    let mut media = ScriptedMedia::new();
    media.duration = 200.0;
    let mut c = controller_with(media);
    c.media.current_time = 150.0;
    c.update_progress();
    assert_eq!(c.display().elapsed, "2:30");
    assert_eq!(c.display().progress_percent, 75.0);

    assert!(c.load_chapter(3));
    assert_eq!(c.display().elapsed, "0:00");
    assert_eq!(c.display().progress_percent, 0.0);
    assert_eq!(c.display().progress_width(), "0%");
    assert_eq!(c.display().title, "Chapter 4");
    assert_eq!(c.display().subtitle, "Descent");
    assert!(!c.state().is_playing);
}

#[test]
fn active_entry_counts_only_unlocked_items() {
    let chapters = default_chapters();
    let list = vec![
        ChapterListEntry::unlocked(&chapters[0]),
        ChapterListEntry::locked(9, "Bonus"),
        ChapterListEntry::unlocked(&chapters[1]),
        ChapterListEntry::locked(10, "Bonus"),
        ChapterListEntry::unlocked(&chapters[2]),
    ];
    let mut c = PlayerController::new(
        ScriptedMedia::new(),
        chapters,
        list,
        &PlayerSettings::default(),
    );

    c.load_chapter(2);
    assert_eq!(active_positions(&c), vec![4]);

    // Index 1 is the second unlocked entry, not the locked one at position 1.
    c.load_chapter(1);
    assert_eq!(active_positions(&c), vec![2]);

    // No unlocked entry at index 4: nothing highlighted.
    c.load_chapter(4);
    assert!(active_positions(&c).is_empty());
}

#[test]
fn toggle_play_marks_playing_once_resolved() {
    let mut c = controller();
    let pending = c.toggle_play();
    assert!(!c.state().is_playing, "not playing until the request resolves");
    settle(&mut c, pending);
    assert!(c.state().is_playing);
    assert_eq!(c.display().icon, TransportIcon::Pause);

    assert!(c.toggle_play().is_none());
    assert!(!c.state().is_playing);
    assert!(c.media().is_paused());
    assert_eq!(c.display().icon, TransportIcon::Play);
}

#[test]
fn unsupported_source_shows_placeholder() {
    let mut media = ScriptedMedia::new();
    media.play_result = Err(PlaybackError::NotSupported("no source".into()));
    let mut c = controller_with(media);

    let pending = c.toggle_play();
    settle(&mut c, pending);
    assert!(!c.state().is_playing);
    assert_eq!(c.display().subtitle, "Audio coming soon...");
    assert_eq!(c.display().title, "Chapter 1");
}

#[test]
fn other_play_failures_leave_subtitle_alone() {
    let mut media = ScriptedMedia::new();
    media.play_result = Err(PlaybackError::NotAllowed("autoplay".into()));
    let mut c = controller_with(media);

    let pending = c.toggle_play();
    settle(&mut c, pending);
    assert!(!c.state().is_playing);
    assert_eq!(c.display().subtitle, "The Beginning");
}

#[test]
fn pause_before_resolution_drops_stale_success() {
    let mut c = controller();
    let pending = c.toggle_play().expect("play request");
    // Element reports playing, user pauses before the promise settles.
    assert!(c.toggle_play().is_none());
    let result = pending.request.now_or_never().expect("ready");
    c.finish_play(pending.ticket, result);
    assert!(!c.state().is_playing);
    assert_eq!(c.display().icon, TransportIcon::Play);
}

#[test]
fn stale_failure_does_not_overwrite_new_chapter() {
    let mut media = ScriptedMedia::new();
    media.play_result = Err(PlaybackError::NotSupported("missing".into()));
    let mut c = controller_with(media);

    let pending = c.toggle_play().expect("play request");
    c.load_chapter(1);
    let result = pending.request.now_or_never().expect("ready");
    c.finish_play(pending.ticket, result);
    assert_eq!(c.display().subtitle, "First Encounter");
}

#[test]
fn navigation_clamps_at_bounds() {
    let mut c = controller();
    assert!(c.prev_chapter().is_none());
    assert_eq!(c.state().current_chapter_index, 0);
    assert_eq!(c.media().loads, 1);

    c.load_chapter(5);
    let loads = c.media().loads;
    assert!(c.next_chapter().is_none());
    assert_eq!(c.state().current_chapter_index, 5);
    assert_eq!(c.media().loads, loads);
}

#[test]
fn next_five_times_stops_at_last_chapter() {
    let mut c = controller();
    for expected in 1..=5 {
        assert!(c.next_chapter().is_none(), "paused player never autoplays");
        assert_eq!(c.state().current_chapter_index, expected);
    }
    assert!(c.next_chapter().is_none());
    assert_eq!(c.state().current_chapter_index, 5);
    assert_eq!(c.display().title, "Chapter 6");
}

#[test]
fn navigation_carries_playing_over() {
    let mut c = playing_controller();
    let pending = c.next_chapter();
    assert!(pending.is_some());
    assert_eq!(c.state().current_chapter_index, 1);
    settle(&mut c, pending);
    assert!(c.state().is_playing);

    let pending = c.prev_chapter();
    assert!(pending.is_some());
    assert_eq!(c.state().current_chapter_index, 0);
    assert_eq!(c.media().source, "audio/chapter-01.mp3");
}

#[test]
fn progress_waits_for_duration() {
    let mut c = controller();
    c.media.current_time = 30.0;
    c.update_progress();
    assert_eq!(c.display().elapsed, "0:00");
    assert_eq!(c.display().progress_percent, 0.0);

    c.media.duration = 120.0;
    c.update_progress();
    assert_eq!(c.display().elapsed, "0:30");
    assert_eq!(c.display().progress_percent, 25.0);
    assert_eq!(c.display().progress_width(), "25%");
}

#[test]
fn loaded_metadata_sets_total_label() {
    let mut c = controller();
    c.on_loaded_metadata();
    assert_eq!(c.display().total, "0:00");
    c.media.duration = 4503.0;
    c.on_loaded_metadata();
    assert_eq!(c.display().total, "75:03");
}

/// What a browser element does when playback runs off the end: it flags
/// `ended`, pauses itself and fires `pause`, then `ended`.
fn run_to_end(c: &mut Controller) {
    c.media.ended = true;
    c.media.paused = true;
    c.on_pause();
}

#[test]
fn ended_advances_and_resumes() {
    let mut c = playing_controller();
    run_to_end(&mut c);
    assert!(!c.state().is_playing);
    let pending = c.on_ended();
    assert_eq!(c.state().current_chapter_index, 1);
    settle(&mut c, pending);
    assert!(c.state().is_playing);
}

#[test]
fn ended_while_paused_advances_without_playing() {
    let mut c = controller();
    assert!(c.on_ended().is_none());
    assert_eq!(c.state().current_chapter_index, 1);
    assert!(!c.state().is_playing);
    assert!(c.media().is_paused());
    assert_eq!(c.display().icon, TransportIcon::Play);
}

#[test]
fn user_pause_before_end_does_not_resume() {
    let mut c = playing_controller();
    assert!(c.toggle_play().is_none());
    c.on_pause();
    // Seeking past the end of a paused chapter fires `ended` alone.
    c.media.ended = true;
    assert!(c.on_ended().is_none());
    assert_eq!(c.state().current_chapter_index, 1);
    assert!(!c.state().is_playing);
}

#[test]
fn end_of_chapter_intent_is_consumed_once() {
    let mut c = playing_controller();
    run_to_end(&mut c);
    assert!(c.on_ended().is_some());
    assert_eq!(c.state().current_chapter_index, 1);

    // A second `ended` with nothing playing must not start chapter 3.
    c.media.paused = true;
    assert!(c.on_ended().is_none());
    assert_eq!(c.state().current_chapter_index, 2);
}

#[test]
fn ended_on_last_chapter_stops() {
    let mut c = playing_controller();
    c.load_chapter(5);
    c.on_play();
    assert!(c.on_ended().is_none());
    assert_eq!(c.state().current_chapter_index, 5);
    assert!(!c.state().is_playing);
    assert_eq!(c.display().icon, TransportIcon::Play);
}

#[test]
fn element_events_drive_playing_flag() {
    let mut c = controller();
    c.on_play();
    assert!(c.state().is_playing);
    assert_eq!(c.display().icon, TransportIcon::Pause);
    c.on_pause();
    assert!(!c.state().is_playing);
    assert_eq!(c.display().icon, TransportIcon::Play);
}

#[test]
fn seek_maps_click_to_time() {
    let mut c = controller();
    let click = ProgressClick {
        client_x: 60.0,
        bar_left: 10.0,
        bar_width: 200.0,
    };
    c.seek(click);
    assert_eq!(c.media().current_time, 0.0, "no seek before metadata");

    c.media.duration = 400.0;
    c.seek(click);
    assert_eq!(c.media().current_time, 100.0);
}

#[test]
fn seek_ignores_degenerate_bar() {
    let mut c = controller();
    c.media.duration = 400.0;
    c.media.current_time = 12.0;
    c.seek(ProgressClick {
        client_x: 60.0,
        bar_left: 10.0,
        bar_width: 0.0,
    });
    assert_eq!(c.media().current_time, 12.0);
}

#[test]
fn chapter_click_loads_and_plays() {
    let mut c = controller();
    let pending = c.handle_chapter_click(Some(3));
    assert_eq!(c.state().current_chapter_index, 3);
    assert_eq!(c.media().source, "audio/chapter-04.mp3");
    settle(&mut c, pending);
    assert!(c.state().is_playing);
}

#[test]
fn chapter_click_while_playing_pauses_when_load_keeps_playing() {
    let mut c = playing_controller();
    let pending = c.handle_chapter_click(Some(2));
    assert!(pending.is_none());
    assert_eq!(c.state().current_chapter_index, 2);
    assert!(!c.state().is_playing);
    assert!(c.media().is_paused());
}

#[test]
fn chapter_click_while_playing_restarts_when_load_pauses() {
    let mut media = ScriptedMedia::new();
    media.load_resets_paused = true;
    let mut c = controller_with(media);
    let pending = c.toggle_play();
    settle(&mut c, pending);

    let pending = c.handle_chapter_click(Some(2));
    assert_eq!(c.state().current_chapter_index, 2);
    settle(&mut c, pending);
    assert!(c.state().is_playing);
}

#[test]
fn locked_or_outside_clicks_are_ignored() {
    let mut c = controller();
    c.load_chapter(1);
    let loads = c.media().loads;

    assert!(c.handle_chapter_click(Some(6)).is_none());
    assert!(c.handle_chapter_click(None).is_none());
    assert!(c.handle_chapter_click(Some(42)).is_none());
    assert_eq!(c.state().current_chapter_index, 1);
    assert_eq!(c.media().loads, loads);
    assert!(c.media().is_paused());
}

#[test]
fn unparsable_chapter_attr_is_ignored() {
    let chapters = default_chapters();
    let mut bad = ChapterListEntry::unlocked(&chapters[0]);
    bad.chapter_attr = "intro".to_string();
    let mut c = PlayerController::new(
        ScriptedMedia::new(),
        chapters,
        vec![bad],
        &PlayerSettings::default(),
    );
    c.load_chapter(2);
    let loads = c.media().loads;

    assert!(c.handle_chapter_click(Some(0)).is_none());
    assert_eq!(c.state().current_chapter_index, 2);
    assert_eq!(c.media().loads, loads);
    assert!(c.media().is_paused());
    assert!(!c.state().is_playing);
}

#[test]
fn chapter_attr_past_the_table_still_toggles() {
    let chapters = default_chapters();
    let mut far = ChapterListEntry::unlocked(&chapters[0]);
    far.chapter_attr = "9".to_string();
    let mut c = PlayerController::new(
        ScriptedMedia::new(),
        chapters,
        vec![far],
        &PlayerSettings::default(),
    );
    c.load_chapter(2);

    let pending = c.handle_chapter_click(Some(0));
    assert_eq!(c.state().current_chapter_index, 2);
    settle(&mut c, pending);
    assert!(c.state().is_playing);
}

fn key(code: KeyCode) -> KeyInput {
    KeyInput {
        code,
        in_text_input: false,
    }
}

#[test]
fn space_toggles_and_prevents_scroll() {
    let mut c = controller();
    let outcome = c.handle_key(key(KeyCode::Space));
    assert!(outcome.prevent_default);
    settle(&mut c, outcome.pending);
    assert!(c.state().is_playing);
}

#[test]
fn keys_ignored_in_text_inputs() {
    let mut c = controller();
    let outcome = c.handle_key(KeyInput {
        code: KeyCode::Space,
        in_text_input: true,
    });
    assert!(!outcome.prevent_default);
    assert!(outcome.pending.is_none());
    assert!(c.media().is_paused());
}

#[test]
fn arrow_left_rewinds_or_goes_back() {
    let mut c = controller();
    c.load_chapter(2);
    c.media.duration = 300.0;
    c.media.current_time = 42.0;
    let outcome = c.handle_key(key(KeyCode::ArrowLeft));
    assert!(!outcome.prevent_default);
    assert_eq!(c.media().current_time, 37.0);
    assert_eq!(c.state().current_chapter_index, 2);

    c.media.current_time = 5.0;
    let _ = c.handle_key(key(KeyCode::ArrowLeft));
    assert_eq!(c.state().current_chapter_index, 1);
}

#[test]
fn arrow_right_skips_or_advances() {
    let mut c = controller();
    c.media.duration = 300.0;
    c.media.current_time = 100.0;
    let _ = c.handle_key(key(KeyCode::ArrowRight));
    assert_eq!(c.media().current_time, 105.0);
    assert_eq!(c.state().current_chapter_index, 0);

    c.media.current_time = 295.0;
    let _ = c.handle_key(key(KeyCode::ArrowRight));
    assert_eq!(c.state().current_chapter_index, 1);
}

#[test]
fn arrow_right_without_duration_advances() {
    let mut c = controller();
    c.media.current_time = 1.0;
    let _ = c.handle_key(key(KeyCode::ArrowRight));
    assert_eq!(c.state().current_chapter_index, 1);
}

#[test]
fn other_keys_do_nothing() {
    let mut c = controller();
    let outcome = c.handle_key(key(KeyCode::Other));
    assert!(!outcome.prevent_default);
    assert!(outcome.pending.is_none());
    assert_eq!(c.state(), PlayerState::default());
}

#[test]
fn controllers_are_independent() {
    let mut a = controller();
    let b = controller();
    a.load_chapter(4);
    assert_eq!(a.state().current_chapter_index, 4);
    assert_eq!(b.state().current_chapter_index, 0);
}
