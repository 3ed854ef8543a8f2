use crate::constants::{tape_element_id, DECK_PLAY_ID, DECK_STOP_ID};
use crate::core::{is_audio_file, TapeId};
use crate::dom::{self, Listener};
use crate::timers;
use crate::App;
use std::rc::{Rc, Weak};
use web_sys as web;

fn listen(el: &web::Element, event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Listener> {
    match Listener::new(el, event, handler) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[deck] {:?}", e);
            None
        }
    }
}

/// Clicking an empty tape opens its file picker; clicking a loaded one puts
/// it in the deck.
fn on_tape_click(app: &App, id: TapeId) {
    let empty = app.session().shelf.get(id).map(|t| t.is_empty());
    match empty {
        Some(true) => {
            let input_id = tape_element_id(id, Some("file"));
            if let Some(input) = dom::element_as::<web::HtmlInputElement>(app.document(), &input_id) {
                // The input sits inside the tape, so its click bubbles back here;
                // open the picker after this handler has returned.
                if let Err(e) = timers::defer(move || input.click()) {
                    log::warn!("[deck] {:?}", e);
                }
            }
        }
        Some(false) => {
            if app.update(|s| s.select_tape(id)) {
                log::info!("[deck] selected tape {}", id);
            }
        }
        None => {}
    }
}

fn on_file_chosen(app: &App, id: TapeId, input: &web::HtmlInputElement) {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return;
    };
    let name = file.name();
    input.set_value("");
    if !is_audio_file(&name, &file.type_()) {
        log::warn!("[deck] ignoring {} ({})", name, file.type_());
        return;
    }
    let Some(url) = dom::object_url(&file) else {
        return;
    };
    if let Some(old) = app.update(|s| s.upload(id, &name, url)) {
        dom::revoke_url(&old);
    }
}

fn on_meta_input(app: &App, id: TapeId) {
    let doc = app.document();
    let read = |part: &str| {
        dom::element_as::<web::HtmlInputElement>(doc, &tape_element_id(id, Some(part)))
            .map(|i| i.value())
    };
    if let (Some(title), Some(artist)) = (read("title"), read("artist")) {
        app.update(|s| s.update_meta(id, &title, &artist));
    }
}

pub fn wire_tapes(app: &Rc<App>) -> Vec<Listener> {
    let ids: Vec<TapeId> = app.session().shelf.tapes().iter().map(|t| t.id).collect();
    let doc = app.document().clone();
    let mut listeners = Vec::new();

    for id in ids {
        if let Some(el) = dom::element(&doc, &tape_element_id(id, None)) {
            let weak: Weak<App> = Rc::downgrade(app);
            listeners.extend(listen(&el, "click", move |ev| {
                if dom::from_control(&ev) {
                    return;
                }
                if let Some(app) = weak.upgrade() {
                    on_tape_click(&app, id);
                }
            }));
        }

        if let Some(input) = dom::element_as::<web::HtmlInputElement>(&doc, &tape_element_id(id, Some("file"))) {
            let weak = Rc::downgrade(app);
            let target = input.clone();
            listeners.extend(listen(&input, "change", move |_| {
                if let Some(app) = weak.upgrade() {
                    on_file_chosen(&app, id, &target);
                }
            }));
        }

        for part in ["title", "artist"] {
            if let Some(el) = dom::element(&doc, &tape_element_id(id, Some(part))) {
                let weak = Rc::downgrade(app);
                listeners.extend(listen(&el, "input", move |_| {
                    if let Some(app) = weak.upgrade() {
                        on_meta_input(&app, id);
                    }
                }));
            }
        }

        if let Some(el) = dom::element(&doc, &tape_element_id(id, Some("clear"))) {
            let weak = Rc::downgrade(app);
            listeners.extend(listen(&el, "click", move |ev| {
                ev.stop_propagation();
                if let Some(app) = weak.upgrade() {
                    if let Some(url) = app.update(|s| s.clear_tape(id)) {
                        dom::revoke_url(&url);
                    }
                    log::info!("[deck] cleared tape {}", id);
                }
            }));
        }
    }
    listeners
}

pub fn wire_transport(app: &Rc<App>) -> Vec<Listener> {
    let doc = app.document().clone();
    let mut listeners = Vec::new();

    let weak = Rc::downgrade(app);
    listeners.extend(dom::on_click(&doc, DECK_PLAY_ID, move || {
        if let Some(app) = weak.upgrade() {
            app.update(|s| s.toggle_play());
        }
    }));

    let weak = Rc::downgrade(app);
    listeners.extend(dom::on_click(&doc, DECK_STOP_ID, move || {
        if let Some(app) = weak.upgrade() {
            app.update(|s| s.stop());
        }
    }));
    listeners
}
