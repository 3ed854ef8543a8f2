use crate::constants::{NOTE_ADD_ID, NOTE_INPUT_ID, PHOTO_BUTTON_ID, PHOTO_INPUT_ID};
use crate::core::constants::MAX_NOTE_CHARS;
use crate::dom::{self, Listener};
use crate::App;
use std::rc::Rc;
use web_sys as web;

fn on_photos_chosen(app: &App, input: &web::HtmlInputElement) {
    let Some(files) = input.files() else {
        return;
    };
    let urls: Vec<String> = (0..files.length())
        .filter_map(|i| files.get(i))
        .filter(|f| f.type_().starts_with("image/"))
        .filter_map(|f| dom::object_url(&f))
        .collect();
    input.set_value("");
    let added = urls.len();
    let overflow = app.update(|s| s.add_images(urls));
    for url in &overflow {
        dom::revoke_url(url);
    }
    log::info!("[memories] +{} photos", added - overflow.len());
}

fn on_note_submit(app: &App) {
    let Some(area) = dom::element_as::<web::HtmlTextAreaElement>(app.document(), NOTE_INPUT_ID) else {
        return;
    };
    let note = area.value();
    if app.update(|s| s.add_note(&note)) {
        area.set_value("");
        log::info!("[memories] note added");
    }
}

pub fn wire_memory_inputs(app: &Rc<App>) -> Vec<Listener> {
    let doc = app.document().clone();
    let mut listeners = Vec::new();

    if let Some(area) = dom::element(&doc, NOTE_INPUT_ID) {
        _ = area.set_attribute("maxlength", &MAX_NOTE_CHARS.to_string());
    }

    listeners.extend(dom::on_click(&doc, PHOTO_BUTTON_ID, {
        let doc = doc.clone();
        move || {
            if let Some(input) = dom::element_as::<web::HtmlInputElement>(&doc, PHOTO_INPUT_ID) {
                input.click();
            }
        }
    }));

    if let Some(input) = dom::element_as::<web::HtmlInputElement>(&doc, PHOTO_INPUT_ID) {
        let weak = Rc::downgrade(app);
        let target = input.clone();
        match Listener::new(&input, "change", move |_| {
            if let Some(app) = weak.upgrade() {
                on_photos_chosen(&app, &target);
            }
        }) {
            Ok(l) => listeners.push(l),
            Err(e) => log::warn!("[memories] {:?}", e),
        }
    }

    let weak = Rc::downgrade(app);
    listeners.extend(dom::on_click(&doc, NOTE_ADD_ID, move || {
        if let Some(app) = weak.upgrade() {
            on_note_submit(&app);
        }
    }));
    listeners
}
