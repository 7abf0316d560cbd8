use crate::components::{drive_play, Icon, PlayerHandle};
use crate::controller::ProgressClick;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use std::rc::Rc;

/// Play/Pause button - shows whichever icon matches the element's state
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<PlayerHandle>();
    let icon = controller.read().display().icon;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "transport-btn transport-btn-main",
            onclick: move |_| {
                let pending = controller.write().toggle_play();
                drive_play(controller, pending);
            },
            Icon { name: icon.icon_name().to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<PlayerHandle>();
    let at_start = controller.read().state().current_chapter_index == 0;

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "transport-btn",
            aria_disabled: at_start,
            onclick: move |_| {
                let pending = controller.write().prev_chapter();
                drive_play(controller, pending);
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<PlayerHandle>();
    let at_end = {
        let player = controller.read();
        player.state().current_chapter_index + 1 >= player.chapters().len()
    };

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "transport-btn",
            aria_disabled: at_end,
            onclick: move |_| {
                let pending = controller.write().next_chapter();
                drive_play(controller, pending);
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Progress bar with elapsed/total labels. Clicking seeks relative to the
/// bar's current layout box.
#[component]
pub(super) fn ProgressBar() -> Element {
    let controller = use_context::<PlayerHandle>();
    let mut bar_ref = use_signal(|| None::<Rc<MountedData>>);

    let (elapsed, total, width) = {
        let player = controller.read();
        let display = player.display();
        (
            display.elapsed.clone(),
            display.total.clone(),
            display.progress_width(),
        )
    };

    let on_seek = move |evt: MouseEvent| {
        let client_x = evt.client_coordinates().x;
        let mut controller = controller;
        spawn(async move {
            let Some(bar) = bar_ref.peek().clone() else {
                return;
            };
            match bar.get_client_rect().await {
                Ok(rect) => controller.write().seek(ProgressClick {
                    client_x,
                    bar_left: rect.origin.x,
                    bar_width: rect.size.width,
                }),
                Err(err) => warn!("progress bar has no layout box: {err:?}"),
            }
        });
    };

    rsx! {
        div { class: "progress-row",
            span { class: "time-current", "{elapsed}" }
            div {
                class: "progress-bar",
                onmounted: move |evt: MountedEvent| bar_ref.set(Some(evt.data())),
                onclick: on_seek,
                div { id: "progress", class: "progress", style: "width: {width}" }
            }
            span { class: "time-total", "{total}" }
        }
    }
}
