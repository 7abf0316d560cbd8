use crate::components::{AudioController, ChapterList, PlatformMedia, Player, SignupForm};
use crate::controller::PlayerController;
use crate::db::{load_settings, PlayerSettings};
use crate::models::{default_chapter_list, default_chapters};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let settings = use_hook(|| {
        load_settings().unwrap_or_else(|err| {
            warn!("Failed to load player settings, using defaults: {err}");
            PlayerSettings::default()
        })
    });
    let media = use_hook(|| PlatformMedia::attach(&settings.audio_element_id));

    match media {
        Some(media) => rsx! {
            PlayerPage { media, settings }
        },
        None => rsx! {
            main { class: "app-shell",
                p { class: "player-unavailable", "Audio playback isn't available in this browser." }
            }
        },
    }
}

#[component]
fn PlayerPage(media: PlatformMedia, settings: PlayerSettings) -> Element {
    let show_signup = settings.show_signup;
    let controller = use_signal(|| {
        let chapters = default_chapters();
        let list = default_chapter_list(&chapters);
        PlayerController::new(media, chapters, list, &settings)
    });

    // Provide the player via context
    use_context_provider(|| controller);

    rsx! {
        main { class: "app-shell",
            AudioController {}
            Player {}
            ChapterList {}
            if show_signup {
                SignupForm { settings: settings.clone() }
            }
        }
    }
}
