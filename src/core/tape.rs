//! Cassette tapes and the shelf that holds them.

use crate::core::constants::{EMPTY_TAPE_TITLE, UPLOADED_ARTIST};

pub type TapeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapeColor {
    Amber,
    Olive,
    Burgundy,
}

impl TapeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TapeColor::Amber => "amber",
            TapeColor::Olive => "olive",
            TapeColor::Burgundy => "burgundy",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tape {
    pub id: TapeId,
    pub color: TapeColor,
    pub title: String,
    pub artist: String,
    /// Playable source handed to the media element (an object URL on the web).
    pub audio: Option<String>,
    pub file_name: Option<String>,
}

impl Tape {
    pub fn new(id: TapeId, color: TapeColor, title: &str, artist: &str) -> Self {
        Self {
            id,
            color,
            title: title.to_string(),
            artist: artist.to_string(),
            audio: None,
            file_name: None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.audio.is_none()
    }
}

/// Ordered collection of tapes; ids are unique and stable.
#[derive(Clone, Debug)]
pub struct TapeShelf {
    tapes: Vec<Tape>,
}

impl Default for TapeShelf {
    fn default() -> Self {
        Self::new(vec![
            Tape::new(1, TapeColor::Amber, "Summer Breeze", "Unknown"),
            Tape::new(2, TapeColor::Olive, "Acoustic Soul", "Anonymous"),
            Tape::new(3, TapeColor::Burgundy, "Late Night", "The Band"),
        ])
    }
}

impl TapeShelf {
    pub fn new(tapes: Vec<Tape>) -> Self {
        Self { tapes }
    }

    pub fn tapes(&self) -> &[Tape] {
        &self.tapes
    }

    pub fn get(&self, id: TapeId) -> Option<&Tape> {
        self.tapes.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TapeId) -> Option<&mut Tape> {
        self.tapes.iter_mut().find(|t| t.id == id)
    }

    /// Load audio onto a tape. Returns the source it replaced, if any, so the
    /// caller can release it.
    pub fn load(&mut self, id: TapeId, file_name: &str, source: String) -> Option<String> {
        let tape = self.get_mut(id)?;
        tape.title = file_stem(file_name).to_string();
        tape.artist = UPLOADED_ARTIST.to_string();
        tape.file_name = Some(file_name.to_string());
        tape.audio.replace(source)
    }

    pub fn update_meta(&mut self, id: TapeId, title: &str, artist: &str) -> bool {
        match self.get_mut(id) {
            Some(tape) => {
                tape.title = title.to_string();
                tape.artist = artist.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a tape's audio and reset its label. Returns the released source.
    pub fn clear(&mut self, id: TapeId) -> Option<String> {
        let tape = self.get_mut(id)?;
        tape.title = EMPTY_TAPE_TITLE.to_string();
        tape.artist.clear();
        tape.file_name = None;
        tape.audio.take()
    }
}

/// File name without its final extension; names without one are kept whole.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if !file_name[dot + 1..].is_empty() && !file_name[dot + 1..].contains('/') => {
            &file_name[..dot]
        }
        _ => file_name,
    }
}

const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "m4a", "aac", "ogg", "oga", "opus", "wav", "flac", "webm", "weba",
];

/// Whether an upload looks like something the media element can decode.
pub fn is_audio_file(file_name: &str, mime: &str) -> bool {
    if mime.starts_with("audio/") {
        return true;
    }
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
