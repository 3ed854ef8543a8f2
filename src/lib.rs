#![cfg(target_arch = "wasm32")]
use crate::audio::HtmlAudioBackend;
use crate::constants::DANDELION_CANVAS_ID;
use crate::core::{FieldParams, LevelMeter, MediaEvent, ParticleField, Session, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod timers;
mod ui;

pub(crate) type SharedSession = Rc<RefCell<Session<HtmlAudioBackend>>>;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

/// Everything alive for one page session.
pub(crate) struct App {
    document: web::Document,
    session: SharedSession,
    frame: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    memories: overlay::MemoryLayer,
    listeners: RefCell<Vec<dom::Listener>>,
}

impl App {
    /// Apply one user intent, then bring effects and the page in line.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Session<HtmlAudioBackend>) -> R) -> R {
        let out = f(&mut *self.session.borrow_mut());
        self.refresh();
        out
    }

    pub(crate) fn session(&self) -> std::cell::Ref<'_, Session<HtmlAudioBackend>> {
        self.session.borrow()
    }

    pub(crate) fn document(&self) -> &web::Document {
        &self.document
    }

    /// The playing flag gates both ambient layers.
    pub(crate) fn refresh(&self) {
        let playing = self.session.borrow().is_playing();
        self.frame.borrow_mut().set_active(playing);
        if playing {
            self.frame_loop.start();
        } else {
            self.frame_loop.stop();
        }
        self.memories.sync();
        ui::render_session(&self.document, &*self.session.borrow());
    }

    fn on_media_event(&self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(_) => {
                self.session.borrow_mut().handle_media_event(event);
                let state = self.session.borrow().snapshot();
                ui::render_clock(&self.document, state.current_time, state.duration);
            }
            other => self.update(|s| s.handle_media_event(other)),
        }
    }

    fn on_resize(&self) {
        self.frame.borrow_mut().resize();
    }

    fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.frame_loop.stop();
        self.memories.shutdown();
        let mut session = self.session.borrow_mut();
        session.player_mut().eject();
        let ids: Vec<_> = session.shelf.tapes().iter().map(|t| t.id).collect();
        for id in ids {
            if let Some(url) = session.shelf.clear(id) {
                dom::revoke_url(&url);
            }
        }
        for url in session.memories.images() {
            dom::revoke_url(url);
        }
        *session.player().media().sink().borrow_mut() = None;
        log::info!("[init] shut down");
    }
}

fn wire_resize(app: &Rc<App>) -> anyhow::Result<dom::Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak: Weak<App> = Rc::downgrade(app);
    dom::Listener::new(&window, "resize", move |_| {
        if let Some(app) = weak.upgrade() {
            app.on_resize();
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("mixtape-web starting");

    if APP.with(|a| a.borrow().is_some()) {
        return Ok(());
    }
    match init() {
        Ok(app) => APP.with(|a| *a.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the page session down: listeners, timers, frame loop and media.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.shutdown();
    }
}

fn init() -> anyhow::Result<Rc<App>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_as(&document, DANDELION_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", DANDELION_CANVAS_ID))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (w, h) = dom::sync_canvas_to_viewport(&canvas);

    let backend = HtmlAudioBackend::new()?;
    let sink = backend.sink();
    let media_listeners = backend.wire_events()?;
    let session: SharedSession = Rc::new(RefCell::new(Session::new(backend)));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        document: document.clone(),
        field: ParticleField::new(
            FieldParams::default(),
            Viewport::new(w as f32, h as f32),
            rand::random(),
        ),
        meter: LevelMeter::new(rand::random()),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::FrameLoop::new(frame_ctx.clone());
    let memories = overlay::MemoryLayer::new(&document, session.clone(), rand::random())?;

    let app = Rc::new(App {
        document,
        session,
        frame: frame_ctx,
        frame_loop,
        memories,
        listeners: RefCell::new(media_listeners),
    });

    let weak = Rc::downgrade(&app);
    *sink.borrow_mut() = Some(Box::new(move |event: MediaEvent| {
        if let Some(app) = weak.upgrade() {
            app.on_media_event(event);
        }
    }));

    let mut listeners = events::wire_all(&app)?;
    listeners.push(wire_resize(&app)?);
    app.listeners.borrow_mut().extend(listeners);

    app.refresh();
    log::info!(
        "[init] {} tapes, canvas {}x{}",
        app.session().shelf.tapes().len(),
        w,
        h
    );
    Ok(app)
}
