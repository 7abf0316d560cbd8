// Browser event wiring: media lifecycle events and global keyboard shortcuts.
use super::{PlatformPlay, PlayerHandle, WebMedia};
use crate::controller::{KeyCode, KeyInput, PendingPlay, PlayerController};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, EventTarget, KeyboardEvent};

type Player = PlayerController<WebMedia>;

/// Same as `drive_play`, for callbacks that run outside any component scope.
fn drive_play_detached(
    runtime: Rc<Runtime>,
    mut controller: PlayerHandle,
    pending: Option<PendingPlay<PlatformPlay>>,
) {
    let Some(PendingPlay { ticket, request }) = pending else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let result = request.await;
        let _guard = RuntimeGuard::new(runtime);
        controller.write().finish_play(ticket, result);
    });
}

fn listen_media<F>(
    target: &EventTarget,
    event: &str,
    runtime: Rc<Runtime>,
    mut controller: PlayerHandle,
    handler: F,
) where
    F: Fn(&mut Player) -> Option<PendingPlay<PlatformPlay>> + 'static,
{
    let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let _guard = RuntimeGuard::new(runtime.clone());
        let pending = {
            let mut player = controller.write();
            handler(&mut *player)
        };
        drive_play_detached(runtime.clone(), controller, pending);
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Focus sits in something the user types into; shortcuts must not fire.
fn is_text_entry_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

pub(super) fn attach(controller: PlayerHandle) {
    let runtime = Runtime::current();
    let audio: EventTarget = controller.peek().media().element().clone().into();

    listen_media(&audio, "timeupdate", runtime.clone(), controller, |player| {
        player.update_progress();
        None
    });
    listen_media(&audio, "loadedmetadata", runtime.clone(), controller, |player| {
        player.on_loaded_metadata();
        None
    });
    listen_media(&audio, "ended", runtime.clone(), controller, |player| {
        player.on_ended()
    });
    listen_media(&audio, "pause", runtime.clone(), controller, |player| {
        player.on_pause();
        None
    });
    listen_media(&audio, "play", runtime.clone(), controller, |player| {
        player.on_play();
        None
    });

    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let mut key_controller = controller;
    let key_runtime = runtime.clone();
    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let _guard = RuntimeGuard::new(key_runtime.clone());
        let input = KeyInput {
            code: KeyCode::from_code(&event.code()),
            in_text_input: is_text_entry_target(&event),
        };
        let outcome = key_controller.write().handle_key(input);
        if outcome.prevent_default {
            event.prevent_default();
        }
        drive_play_detached(key_runtime.clone(), key_controller, outcome.pending);
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    key_cb.forget();
}
