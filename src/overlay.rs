use crate::constants::{CLASS_MEMORY, CLASS_MEMORY_CJK, CLASS_MEMORY_NOTE, MEMORY_OVERLAY_ID};
use crate::core::{FloatingMemory, Gate, MemoryContent, MemoryScheduler, SpawnParams, Viewport};
use crate::dom;
use crate::timers::{Interval, Timeout};
use crate::SharedSession;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Shown {
    id: u64,
    node: web::Element,
    removal: Timeout,
}

struct OverlayState {
    document: web::Document,
    container: web::Element,
    scheduler: MemoryScheduler,
    shown: Vec<Shown>,
    // Timeouts that already fired; released on the next cycle since a
    // closure cannot be dropped while it is running.
    spent: Vec<Timeout>,
}

impl OverlayState {
    fn expire(&mut self, id: u64) {
        self.scheduler.remove(id);
        if let Some(pos) = self.shown.iter().position(|s| s.id == id) {
            let shown = self.shown.remove(pos);
            shown.node.remove();
            self.spent.push(shown.removal);
        }
    }

    fn clear_all(&mut self) {
        for shown in self.shown.drain(..) {
            shown.node.remove();
        }
        self.spent.clear();
    }
}

/// Floating photos and notes, shown while a tape plays.
pub struct MemoryLayer {
    state: Rc<RefCell<OverlayState>>,
    session: SharedSession,
    interval: RefCell<Option<Interval>>,
}

impl MemoryLayer {
    pub fn new(document: &web::Document, session: SharedSession, seed: u64) -> anyhow::Result<Self> {
        let container = dom::element(document, MEMORY_OVERLAY_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", MEMORY_OVERLAY_ID))?;
        Ok(Self {
            state: Rc::new(RefCell::new(OverlayState {
                document: document.clone(),
                container,
                scheduler: MemoryScheduler::new(SpawnParams::default(), seed),
                shown: Vec::new(),
                spent: Vec::new(),
            })),
            session,
            interval: RefCell::new(None),
        })
    }

    /// Follow the session: run while playing with content, otherwise clear.
    pub fn sync(&self) {
        let gate = {
            let session = self.session.borrow();
            self.state
                .borrow_mut()
                .scheduler
                .sync(session.is_playing(), &session.memories)
        };
        match gate {
            Gate::Started => {
                let period = self.state.borrow().scheduler.params.interval_ms;
                let state = Rc::downgrade(&self.state);
                let session = Rc::downgrade(&self.session);
                match Interval::new(period, move || {
                    if let (Some(state), Some(session)) = (state.upgrade(), session.upgrade()) {
                        spawn_cycle(&state, &session);
                    }
                }) {
                    Ok(interval) => *self.interval.borrow_mut() = Some(interval),
                    Err(e) => log::error!("[memories] timer: {:?}", e),
                }
                log::info!("[memories] started");
            }
            Gate::Stopped => {
                self.interval.borrow_mut().take();
                self.state.borrow_mut().clear_all();
                log::info!("[memories] stopped");
            }
            Gate::Unchanged => {}
        }
    }

    pub fn shutdown(&self) {
        self.interval.borrow_mut().take();
        self.state.borrow_mut().clear_all();
    }
}

fn spawn_cycle(state: &Rc<RefCell<OverlayState>>, session: &SharedSession) {
    let (w, h) = dom::viewport_size();
    let memory = {
        let session = session.borrow();
        let mut st = state.borrow_mut();
        st.spent.clear();
        st.scheduler
            .spawn(&session.memories, Viewport::new(w as f32, h as f32))
            .cloned()
    };
    let Some(memory) = memory else {
        return;
    };

    let mut st = state.borrow_mut();
    let node = match build_node(&st.document, &memory) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[memories] node: {:?}", e);
            st.scheduler.remove(memory.id);
            return;
        }
    };
    _ = st.container.append_child(&node);

    let id = memory.id;
    let weak = Rc::downgrade(state);
    match Timeout::new(memory.duration_ms(), move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().expire(id);
        }
    }) {
        Ok(removal) => st.shown.push(Shown { id, node, removal }),
        Err(e) => {
            log::warn!("[memories] removal timer: {:?}", e);
            node.remove();
            st.scheduler.remove(id);
        }
    }
}

fn build_node(document: &web::Document, m: &FloatingMemory) -> anyhow::Result<web::Element> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let root = document.create_element("div").map_err(js)?;
    root.set_class_name(CLASS_MEMORY);
    let style = format!(
        "left:{:.2}%;top:{:.2}%;width:{:.0}px;--r-start:{:.2}deg;--r-mid:{:.2}deg;--r-end:{:.2}deg;animation-duration:{:.2}s",
        m.x, m.y, m.size, m.rotation[0], m.rotation[1], m.rotation[2], m.duration_sec
    );
    root.set_attribute("style", &style).map_err(js)?;

    match &m.content {
        MemoryContent::Image(src) => {
            let img = document.create_element("img").map_err(js)?;
            img.set_attribute("src", src).map_err(js)?;
            img.set_attribute("alt", "Memory").map_err(js)?;
            root.append_child(&img).map_err(js)?;
        }
        MemoryContent::Text(text) => {
            let note = document.create_element("div").map_err(js)?;
            note.set_class_name(CLASS_MEMORY_NOTE);
            dom::set_class(&note, CLASS_MEMORY_CJK, m.cjk);
            note.set_text_content(Some(text));
            root.append_child(&note).map_err(js)?;
        }
    }
    Ok(root)
}
