/// Deck actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKey {
    PlayPause,
    Stop,
}

#[inline]
pub fn transport_for_key(key: &str) -> Option<TransportKey> {
    match key {
        " " | "k" | "K" => Some(TransportKey::PlayPause),
        "s" | "S" => Some(TransportKey::Stop),
        _ => None,
    }
}
