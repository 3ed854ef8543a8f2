use crate::constants::*;
use crate::core::{format_time, progress, MediaBackend, Session};
use crate::dom;
use web_sys as web;

/// Push tape labels, deck display and memory counts into the page.
pub fn render_session<M: MediaBackend>(document: &web::Document, session: &Session<M>) {
    let state = session.snapshot();

    for tape in session.shelf.tapes() {
        if let Some(el) = dom::element(document, &tape_element_id(tape.id, None)) {
            dom::set_class(&el, CLASS_ACTIVE, state.current_tape == Some(tape.id));
            dom::set_class(&el, CLASS_EMPTY, tape.is_empty());
            _ = el.set_attribute("data-color", tape.color.as_str());
        }
        for (part, value) in [("title", &tape.title), ("artist", &tape.artist)] {
            let id = tape_element_id(tape.id, Some(part));
            if let Some(input) = dom::element_as::<web::HtmlInputElement>(document, &id) {
                // Leave the field alone while it is being typed into.
                if input.value() != *value {
                    input.set_value(value);
                }
            }
        }
    }

    let (title, artist) = match session.current_tape() {
        Some(tape) => (
            if tape.title.is_empty() { "Unknown Track" } else { tape.title.as_str() },
            if tape.artist.is_empty() { "Unknown Artist" } else { tape.artist.as_str() },
        ),
        None => ("INSERT TAPE", ""),
    };
    dom::set_text(document, DECK_TITLE_ID, title);
    dom::set_text(document, DECK_ARTIST_ID, artist);
    render_clock(document, state.current_time, state.duration);

    if let Some(play) = dom::element(document, DECK_PLAY_ID) {
        dom::set_class(&play, CLASS_PLAYING, state.is_playing);
        _ = play.set_attribute("aria-label", if state.is_playing { "Pause" } else { "Play" });
    }

    let images = session.memories.images().len();
    let texts = session.memories.texts().len();
    dom::set_text(document, PHOTO_COUNT_ID, &count_label(images));
    dom::set_text(document, NOTE_COUNT_ID, &count_label(texts));
}

pub fn render_clock(document: &web::Document, current_time: f64, duration: f64) {
    dom::set_text(document, DECK_TIME_ID, &format_time(current_time));
    if let Some(el) = dom::element_as::<web::HtmlElement>(document, DECK_PROGRESS_ID) {
        let pct = progress(current_time, duration) * 100.0;
        _ = el.style().set_property("width", &format!("{:.1}%", pct));
    }
}

/// Bars are the `.meter-bar` children of the meter, in order.
pub fn render_meter(document: &web::Document, bars: &[f32]) {
    let Some(meter) = dom::element(document, DECK_METER_ID) else {
        return;
    };
    let Ok(nodes) = meter.query_selector_all(&format!(".{}", CLASS_METER_BAR)) else {
        return;
    };
    for (i, height) in bars.iter().enumerate() {
        let Some(bar) = nodes.get(i as u32) else {
            break;
        };
        if let Ok(bar) = wasm_bindgen::JsCast::dyn_into::<web::HtmlElement>(bar) {
            _ = bar.style().set_property("height", &format!("{:.0}%", height));
        }
    }
}

#[inline]
fn count_label(n: usize) -> String {
    if n > 0 {
        format!("({})", n)
    } else {
        String::new()
    }
}
