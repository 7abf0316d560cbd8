use crate::components::PlayerHandle;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, ProgressBar};

#[component]
pub fn Player() -> Element {
    let controller = use_context::<PlayerHandle>();

    let (title, subtitle) = {
        let player = controller.read();
        let display = player.display();
        (display.title.clone(), display.subtitle.clone())
    };

    rsx! {
        section { class: "player",
            // Now playing
            div { class: "chapter-heading",
                h2 { class: "chapter-title", "{title}" }
                p { class: "chapter-subtitle", "{subtitle}" }
            }
            // Transport
            div { class: "player-controls",
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
            }
            ProgressBar {}
        }
    }
}
