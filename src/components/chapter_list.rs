use crate::components::{drive_play, Icon, PlayerHandle};
use crate::models::ChapterListEntry;
use dioxus::prelude::*;

fn entry_class(entry: &ChapterListEntry) -> &'static str {
    match (entry.locked, entry.active) {
        (true, _) => "chapter-item locked",
        (false, true) => "chapter-item active",
        (false, false) => "chapter-item",
    }
}

/// Chapter list. Clicking an unlocked entry loads it and toggles playback.
#[component]
pub fn ChapterList() -> Element {
    let mut controller = use_context::<PlayerHandle>();
    let entries = controller.read().chapter_list().to_vec();

    rsx! {
        ul {
            id: "chapterList",
            class: "chapter-list",
            for (position, entry) in entries.into_iter().enumerate() {
                li {
                    key: "{position}",
                    class: entry_class(&entry),
                    "data-chapter": "{entry.chapter_attr}",
                    onclick: move |_| {
                        let pending = controller.write().handle_chapter_click(Some(position));
                        drive_play(controller, pending);
                    },
                    span { class: "chapter-number", "{entry.chapter_attr}" }
                    span { class: "chapter-name", "{entry.label}" }
                    if entry.locked {
                        Icon { name: "lock".to_string(), class: "icon icon-small".to_string() }
                    }
                }
            }
        }
    }
}
