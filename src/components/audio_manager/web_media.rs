// Browser-backed media element: a single `<audio>` tag owned by the page.
use crate::controller::MediaElement;
use crate::error::PlaybackError;
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, DomException, HtmlAudioElement};

#[derive(Debug, Clone, PartialEq)]
pub struct WebMedia {
    audio: HtmlAudioElement,
}

impl WebMedia {
    /// Reuse the page's audio element with this id, creating it once if needed.
    pub fn attach(element_id: &str) -> Option<Self> {
        let document = window()?.document()?;

        if let Some(existing) = document.get_element_by_id(element_id) {
            let audio = existing.dyn_into::<HtmlAudioElement>().ok()?;
            return Some(Self { audio });
        }

        let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
        audio.set_id(element_id);
        audio.set_attribute("preload", "metadata").ok()?;
        document.body()?.append_child(&audio).ok()?;

        Some(Self { audio })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

/// Turn a rejected `play()` promise into a typed error using the DOM exception name.
fn playback_error(value: JsValue) -> PlaybackError {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        return PlaybackError::from_dom_name(&exception.name(), exception.message());
    }

    let field = |key: &str| {
        js_sys::Reflect::get(&value, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    };
    let name = field("name").unwrap_or_default();
    let message = field("message").unwrap_or_else(|| format!("{value:?}"));
    PlaybackError::from_dom_name(&name, message)
}

impl MediaElement for WebMedia {
    type PlayFuture = LocalBoxFuture<'static, Result<(), PlaybackError>>;

    fn set_source(&mut self, source: &str) {
        self.audio.set_src(source);
    }

    fn load(&mut self) {
        self.audio.load();
    }

    fn play(&mut self) -> Self::PlayFuture {
        match self.audio.play() {
            Ok(promise) => JsFuture::from(promise)
                .map(|result| result.map(|_| ()).map_err(playback_error))
                .boxed_local(),
            Err(err) => future::ready(Err(playback_error(err))).boxed_local(),
        }
    }

    fn pause(&mut self) {
        let _ = self.audio.pause();
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn ended(&self) -> bool {
        self.audio.ended()
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }
}
