use crate::dom::Listener;
use crate::App;
use std::rc::Rc;

mod deck;
mod keyboard;
mod memories;

pub fn wire_all(app: &Rc<App>) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = deck::wire_tapes(app);
    listeners.extend(deck::wire_transport(app));
    listeners.extend(memories::wire_memory_inputs(app));
    listeners.push(keyboard::wire_global_keydown(app)?);
    Ok(listeners)
}
