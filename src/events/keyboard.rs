use crate::core::{transport_for_key, TransportKey};
use crate::dom::{self, Listener};
use crate::App;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    // Typing a note or a tape title must not drive the deck.
    if dom::from_control(ev) || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    match transport_for_key(&ev.key()) {
        Some(TransportKey::PlayPause) => {
            app.update(|s| s.toggle_play());
            log::debug!("[keys] play/pause");
            ev.prevent_default();
        }
        Some(TransportKey::Stop) => {
            app.update(|s| s.stop());
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(app: &Rc<App>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak: Weak<App> = Rc::downgrade(app);
    Listener::new(&window, "keydown", move |ev: web::Event| {
        let (Some(app), Ok(ev)) = (weak.upgrade(), ev.dyn_into::<web::KeyboardEvent>()) else {
            return;
        };
        handle_global_keydown(&ev, &app);
    })
}
