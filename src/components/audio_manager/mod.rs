//! Audio Manager - owns the platform media element and feeds its events into
//! the player controller outside of the component render cycle.

use crate::controller::{MediaElement, PendingPlay, PlayerController};
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
mod silent_media;
#[cfg(target_arch = "wasm32")]
mod web_listeners;
#[cfg(target_arch = "wasm32")]
mod web_media;

#[cfg(not(target_arch = "wasm32"))]
pub use silent_media::SilentMedia;
#[cfg(target_arch = "wasm32")]
pub use web_media::WebMedia;

#[cfg(target_arch = "wasm32")]
pub type PlatformMedia = WebMedia;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformMedia = SilentMedia;

pub type PlatformPlay = <PlatformMedia as MediaElement>::PlayFuture;

/// The page's single player, shared through context.
pub type PlayerHandle = Signal<PlayerController<PlatformMedia>>;

/// Await a play request on the component's task scope and report the outcome.
pub fn drive_play(mut controller: PlayerHandle, pending: Option<PendingPlay<PlatformPlay>>) {
    let Some(PendingPlay { ticket, request }) = pending else {
        return;
    };
    spawn(async move {
        let result = request.await;
        controller.write().finish_play(ticket, result);
    });
}

/// Attaches media and keyboard listeners once; renders nothing.
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerHandle>();

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        web_listeners::attach(controller);
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = controller;

    rsx! {}
}
