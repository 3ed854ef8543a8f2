//! Application state for one page session.
//!
//! Ties the tape shelf, the transport and the memory bank together so the
//! UI layer only ever calls one method per user intent. Methods that retire
//! a media source return it, letting the caller free object URLs.

use crate::core::media::{MediaBackend, MediaEvent};
use crate::core::memories::MemoryBank;
use crate::core::playback::{PlaybackController, PlaybackState, PlayerState};
use crate::core::tape::{Tape, TapeId, TapeShelf};

pub struct Session<M: MediaBackend> {
    pub shelf: TapeShelf,
    pub memories: MemoryBank,
    player: PlaybackController<M>,
}

impl<M: MediaBackend> Session<M> {
    pub fn new(media: M) -> Self {
        Self::with_shelf(TapeShelf::default(), media)
    }

    pub fn with_shelf(shelf: TapeShelf, media: M) -> Self {
        Self {
            shelf,
            memories: MemoryBank::default(),
            player: PlaybackController::new(media),
        }
    }

    pub fn player(&self) -> &PlaybackController<M> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackController<M> {
        &mut self.player
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn state(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn snapshot(&self) -> PlayerState {
        self.player.snapshot()
    }

    pub fn current_tape(&self) -> Option<&Tape> {
        self.player.current_tape().and_then(|id| self.shelf.get(id))
    }

    /// Put a file on a tape. If that tape is in the deck, playback stops and
    /// the new audio is cued at the start.
    pub fn upload(&mut self, id: TapeId, file_name: &str, source: String) -> Option<String> {
        if self.shelf.get(id).is_none() {
            return Some(source);
        }
        let replaced = self.shelf.load(id, file_name, source);
        if self.player.current_tape() == Some(id) {
            if let Some(src) = self.shelf.get(id).and_then(|t| t.audio.as_deref()) {
                self.player.reload(src);
            }
        }
        log::info!("[deck] tape {} <- {}", id, file_name);
        replaced
    }

    pub fn update_meta(&mut self, id: TapeId, title: &str, artist: &str) -> bool {
        let loaded = self.shelf.get(id).is_some_and(|t| !t.is_empty());
        loaded && self.shelf.update_meta(id, title, artist)
    }

    pub fn clear_tape(&mut self, id: TapeId) -> Option<String> {
        if self.player.current_tape() == Some(id) {
            self.player.eject();
        }
        self.shelf.clear(id)
    }

    pub fn select_tape(&mut self, id: TapeId) -> bool {
        let Some(source) = self.shelf.get(id).and_then(|t| t.audio.as_deref()) else {
            return false;
        };
        self.player.select(id, source)
    }

    pub fn toggle_play(&mut self) {
        self.player.toggle();
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn seek(&mut self, time_sec: f64) {
        self.player.seek(time_sec);
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        self.player.handle_event(event);
    }

    pub fn add_images<I>(&mut self, sources: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        self.memories.add_images(sources)
    }

    pub fn add_note(&mut self, note: &str) -> bool {
        self.memories.add_note(note).is_some()
    }
}
