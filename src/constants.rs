// DOM contract and visual constants for the web frontend.
//
// Per-tape elements are addressed as `tape-{id}`, `tape-{id}-file`,
// `tape-{id}-title`, `tape-{id}-artist` and `tape-{id}-clear`.

// Canvas and overlays
pub const DANDELION_CANVAS_ID: &str = "dandelion-canvas";
pub const MEMORY_OVERLAY_ID: &str = "memory-overlay";

// Deck display and transport
pub const DECK_TITLE_ID: &str = "deck-title";
pub const DECK_ARTIST_ID: &str = "deck-artist";
pub const DECK_TIME_ID: &str = "deck-time";
pub const DECK_PROGRESS_ID: &str = "deck-progress";
pub const DECK_METER_ID: &str = "deck-meter";
pub const DECK_PLAY_ID: &str = "deck-play";
pub const DECK_STOP_ID: &str = "deck-stop";

// Memory inputs
pub const PHOTO_INPUT_ID: &str = "photo-input";
pub const PHOTO_BUTTON_ID: &str = "photo-button";
pub const PHOTO_COUNT_ID: &str = "photo-count";
pub const NOTE_INPUT_ID: &str = "note-input";
pub const NOTE_ADD_ID: &str = "note-add";
pub const NOTE_COUNT_ID: &str = "note-count";

// Classes toggled by the UI layer
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_EMPTY: &str = "is-empty";
pub const CLASS_PLAYING: &str = "is-playing";
pub const CLASS_MEMORY: &str = "memory";
pub const CLASS_MEMORY_NOTE: &str = "memory-note";
pub const CLASS_MEMORY_CJK: &str = "memory-note--cjk";
pub const CLASS_METER_BAR: &str = "meter-bar";

// Dandelion ink
pub const SEED_COLOR: &str = "#5d4037";
pub const STEM_LINE_WIDTH: f64 = 0.8;
pub const FLUFF_LINE_WIDTH: f64 = 0.5;

// Console verbosity
pub const LOG_LEVEL: log::Level = log::Level::Info;

#[inline]
pub fn tape_element_id(tape_id: u32, part: Option<&str>) -> String {
    match part {
        Some(p) => format!("tape-{}-{}", tape_id, p),
        None => format!("tape-{}", tape_id),
    }
}
