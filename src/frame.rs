use crate::core::{LevelMeter, ParticleField, Viewport};
use crate::dom;
use crate::render;
use crate::ui;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state: the dandelion canvas and the deck's level meter.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,
    pub field: ParticleField,
    pub meter: LevelMeter,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if self.field.tick() {
            render::draw_field(&self.ctx, &self.canvas, &self.field);
        }
        if self.meter.advance(dt) {
            ui::render_meter(&self.document, self.meter.bars());
        }
    }

    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.resize(Viewport::new(w as f32, h as f32));
    }

    /// Gate the effects on playback. Going quiet wipes the canvas and drops
    /// the meter to rest.
    pub fn set_active(&mut self, active: bool) -> bool {
        if !self.field.set_active(active) {
            return false;
        }
        if active {
            self.last_instant = Instant::now();
        } else {
            render::clear(&self.ctx, &self.canvas);
            self.meter.rest();
            ui::render_meter(&self.document, self.meter.bars());
        }
        log::info!("[dandelions] active={}", active);
        true
    }
}

/// `requestAnimationFrame` loop that can be started and stopped repeatedly.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id_tick = raf_id.clone();
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Stopped between scheduling and firing.
            if raf_id_tick.get().is_none() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(tick) = tick_weak.upgrade() {
                raf_id_tick.set(request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));
        Self { raf_id, tick }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.raf_id.set(request_frame(&self.tick));
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
