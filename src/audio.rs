use crate::core::{MediaBackend, MediaError, MediaEvent, PlayOutcome};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Where media notifications are delivered. Installed after the session
/// exists, so the backend never owns a strong reference back to it.
pub type MediaSink = Rc<RefCell<Option<Box<dyn Fn(MediaEvent)>>>>;

fn emit(sink: &MediaSink, event: MediaEvent) {
    if let Some(f) = sink.borrow().as_ref() {
        f(event);
    }
}

/// Browsers report an undecodable source as `NotSupportedError`; anything
/// else (autoplay policy, `AbortError` from a later pause) is a rejection.
fn play_error(err: &JsValue) -> MediaError {
    let name = js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let message = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    if name == "NotSupportedError" {
        MediaError::Unsupported(message)
    } else {
        MediaError::Rejected(format!("{}: {}", name, message))
    }
}

/// `MediaBackend` over a detached `<audio>` element.
pub struct HtmlAudioBackend {
    audio: web::HtmlAudioElement,
    sink: MediaSink,
}

impl HtmlAudioBackend {
    pub fn new() -> anyhow::Result<Self> {
        let audio = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        audio.set_preload("auto");
        Ok(Self {
            audio,
            sink: Rc::new(RefCell::new(None)),
        })
    }

    pub fn sink(&self) -> MediaSink {
        self.sink.clone()
    }

    /// Forward `timeupdate`, `durationchange` and `ended` to the sink.
    pub fn wire_events(&self) -> anyhow::Result<Vec<Listener>> {
        let mut listeners = Vec::with_capacity(3);

        let audio = self.audio.clone();
        let sink = self.sink.clone();
        listeners.push(Listener::new(&self.audio, "timeupdate", move |_| {
            emit(&sink, MediaEvent::TimeUpdate(audio.current_time()));
        })?);

        let audio = self.audio.clone();
        let sink = self.sink.clone();
        listeners.push(Listener::new(&self.audio, "durationchange", move |_| {
            emit(&sink, MediaEvent::DurationChange(audio.duration()));
        })?);

        let sink = self.sink.clone();
        listeners.push(Listener::new(&self.audio, "ended", move |_| {
            emit(&sink, MediaEvent::Ended);
        })?);

        Ok(listeners)
    }
}

impl MediaBackend for HtmlAudioBackend {
    fn load(&mut self, source: &str) {
        self.audio.set_src(source);
        self.audio.load();
    }

    fn play(&mut self, attempt: u64) -> Result<PlayOutcome, MediaError> {
        let promise = self.audio.play().map_err(|e| play_error(&e))?;
        let sink = self.sink.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => emit(&sink, MediaEvent::PlayConfirmed(attempt)),
                Err(e) => emit(&sink, MediaEvent::PlayRejected(attempt, play_error(&e).to_string())),
            }
        });
        Ok(PlayOutcome::Pending)
    }

    fn pause(&mut self) {
        _ = self.audio.pause();
    }

    fn seek(&mut self, time_sec: f64) {
        self.audio.set_current_time(time_sec);
    }
}
