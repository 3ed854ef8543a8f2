//! Photos and notes, and the scheduler that floats them over the deck.

use crate::core::constants::*;
use crate::core::particles::Viewport;
use fnv::FnvHashSet;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemoryContent {
    /// Image source (an object URL on the web).
    Image(String),
    Text(String),
}

impl MemoryContent {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, MemoryContent::Text(_))
    }
}

/// User-supplied photos and notes for this session.
#[derive(Clone, Debug, Default)]
pub struct MemoryBank {
    images: Vec<String>,
    texts: Vec<String>,
}

impl MemoryBank {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.texts.is_empty()
    }

    /// Append images in order until the cap is reached. Returns the ones that
    /// did not fit so the caller can release them.
    pub fn add_images<I>(&mut self, sources: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut overflow = Vec::new();
        for src in sources {
            if self.images.len() < MAX_MEMORY_IMAGES {
                self.images.push(src);
            } else {
                overflow.push(src);
            }
        }
        if !overflow.is_empty() {
            log::info!("[memories] dropped {} images over the cap", overflow.len());
        }
        overflow
    }

    /// Store a note, cut to the character cap. Blank notes are ignored.
    pub fn add_note(&mut self, note: &str) -> Option<&str> {
        if note.trim().is_empty() {
            return None;
        }
        let text: String = note.chars().take(MAX_NOTE_CHARS).collect();
        self.texts.push(text);
        self.texts.last().map(String::as_str)
    }
}

/// True when the text contains Han, kana or Hangul characters.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c as u32,
            0x3040..=0x30FF       // hiragana, katakana
            | 0x3400..=0x4DBF     // CJK extension A
            | 0x4E00..=0x9FFF     // CJK unified ideographs
            | 0xAC00..=0xD7AF     // hangul syllables
            | 0x1100..=0x11FF     // hangul jamo
            | 0xF900..=0xFAFF     // compatibility ideographs
            | 0xFF00..=0xFFEF     // halfwidth and fullwidth forms
        )
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingMemory {
    pub id: u64,
    pub content: MemoryContent,
    /// Percent of viewport width.
    pub x: f32,
    /// Percent of viewport height.
    pub y: f32,
    /// Degrees at the start, middle and end of the float.
    pub rotation: [f32; 3],
    pub size: f32,
    pub duration_sec: f32,
    pub cjk: bool,
}

impl FloatingMemory {
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        (self.duration_sec * 1000.0).round() as u32
    }
}

/// Size table as (base, variance) pairs.
#[derive(Clone, Debug)]
pub struct SpawnParams {
    pub interval_ms: u32,
    pub duration_sec: (f32, f32),
    pub image_mobile: (f32, f32),
    pub image_desktop: (f32, f32),
    pub text_mobile: (f32, f32),
    pub text_desktop: (f32, f32),
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            interval_ms: SPAWN_INTERVAL_MS,
            duration_sec: (MEMORY_DURATION_MIN_SEC, MEMORY_DURATION_MAX_SEC),
            image_mobile: IMAGE_SIZE_MOBILE,
            image_desktop: IMAGE_SIZE_DESKTOP,
            text_mobile: TEXT_SIZE_MOBILE,
            text_desktop: TEXT_SIZE_DESKTOP,
        }
    }
}

impl SpawnParams {
    fn size_range(&self, text: bool, viewport: Viewport) -> (f32, f32) {
        match (text, viewport.is_mobile()) {
            (false, true) => self.image_mobile,
            (false, false) => self.image_desktop,
            (true, true) => self.text_mobile,
            (true, false) => self.text_desktop,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Started,
    Stopped,
    Unchanged,
}

pub struct MemoryScheduler {
    pub params: SpawnParams,
    memories: Vec<FloatingMemory>,
    active: bool,
    next_id: u64,
    rng: StdRng,
}

impl MemoryScheduler {
    pub fn new(params: SpawnParams, seed: u64) -> Self {
        Self {
            params,
            memories: Vec::new(),
            active: false,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn memories(&self) -> &[FloatingMemory] {
        &self.memories
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Gate the scheduler on playback and available content. Stopping drops
    /// every floating memory at once.
    pub fn sync(&mut self, playing: bool, bank: &MemoryBank) -> Gate {
        let want = playing && !bank.is_empty();
        if want == self.active {
            return Gate::Unchanged;
        }
        self.active = want;
        if want {
            Gate::Started
        } else {
            self.memories.clear();
            Gate::Stopped
        }
    }

    /// One timer cycle. Returns the new memory, or None when inactive or when
    /// everything in the bank is already on screen.
    pub fn spawn(&mut self, bank: &MemoryBank, viewport: Viewport) -> Option<&FloatingMemory> {
        if !self.active {
            return None;
        }
        let mut shown_images: FnvHashSet<&str> = FnvHashSet::default();
        let mut shown_texts: FnvHashSet<&str> = FnvHashSet::default();
        for m in &self.memories {
            match &m.content {
                MemoryContent::Image(s) => shown_images.insert(s.as_str()),
                MemoryContent::Text(s) => shown_texts.insert(s.as_str()),
            };
        }
        let images: Vec<&String> = bank
            .images()
            .iter()
            .filter(|s| !shown_images.contains(s.as_str()))
            .collect();
        let texts: Vec<&String> = bank
            .texts()
            .iter()
            .filter(|s| !shown_texts.contains(s.as_str()))
            .collect();

        let pick_text = match (images.is_empty(), texts.is_empty()) {
            (true, true) => return None,
            (true, false) => true,
            (false, true) => false,
            (false, false) => self.rng.gen_bool(0.5),
        };
        let content = if pick_text {
            MemoryContent::Text((*texts.choose(&mut self.rng)?).clone())
        } else {
            MemoryContent::Image((*images.choose(&mut self.rng)?).clone())
        };

        let memory = self.roll(content, viewport);
        log::debug!("[memories] spawn #{} for {:.1}s", memory.id, memory.duration_sec);
        self.memories.push(memory);
        self.memories.last()
    }

    /// Removal callback for an expired memory. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.memories.len();
        self.memories.retain(|m| m.id != id);
        self.memories.len() != before
    }

    fn roll(&mut self, content: MemoryContent, viewport: Viewport) -> FloatingMemory {
        let rng = &mut self.rng;
        let (base, variance) = self.params.size_range(content.is_text(), viewport);
        let (dur_min, dur_max) = self.params.duration_sec;
        let cjk = match &content {
            MemoryContent::Text(t) => contains_cjk(t),
            MemoryContent::Image(_) => false,
        };
        let id = self.next_id;
        self.next_id += 1;
        FloatingMemory {
            id,
            x: rng.gen_range(MEMORY_X_PCT.0..=MEMORY_X_PCT.1),
            y: rng.gen_range(MEMORY_Y_PCT.0..=MEMORY_Y_PCT.1),
            rotation: [
                rng.gen_range(-ROTATION_START_DEG..=ROTATION_START_DEG),
                rng.gen_range(-ROTATION_MID_DEG..=ROTATION_MID_DEG),
                rng.gen_range(-ROTATION_END_DEG..=ROTATION_END_DEG),
            ],
            size: base + rng.gen::<f32>() * variance,
            duration_sec: rng.gen_range(dur_min..=dur_max),
            cjk,
            content,
        }
    }
}
