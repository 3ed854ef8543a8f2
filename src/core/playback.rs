//! Transport state machine for the deck.
//!
//! The controller owns the media backend exclusively. Every user intent maps
//! to at most one transition, and each transition issues the matching
//! backend command. Progress notifications flow back in through
//! [`PlaybackController::handle_event`].

use crate::core::media::{MediaBackend, MediaEvent, PlayOutcome};
use crate::core::tape::TapeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Empty,
    Paused,
    Playing,
}

/// Snapshot handed to the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub is_playing: bool,
    pub current_tape: Option<TapeId>,
    pub current_time: f64,
    pub duration: f64,
}

pub struct PlaybackController<M: MediaBackend> {
    media: M,
    current: Option<TapeId>,
    playing: bool,
    play_pending: bool,
    // Attempt number of the latest play; older play results are stale.
    play_seq: u64,
    current_time: f64,
    duration: f64,
}

impl<M: MediaBackend> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            current: None,
            playing: false,
            play_pending: false,
            play_seq: 0,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (self.current, self.playing) {
            (None, _) => PlaybackState::Empty,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    pub fn snapshot(&self) -> PlayerState {
        PlayerState {
            is_playing: self.playing,
            current_tape: self.current,
            current_time: self.current_time,
            duration: self.duration,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn is_play_pending(&self) -> bool {
        self.play_pending
    }

    /// Number of the most recent play attempt.
    #[inline]
    pub fn play_attempt(&self) -> u64 {
        self.play_seq
    }

    #[inline]
    pub fn current_tape(&self) -> Option<TapeId> {
        self.current
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Put a tape in the deck. Returns false when it was already there.
    pub fn select(&mut self, id: TapeId, source: &str) -> bool {
        if self.current == Some(id) {
            return false;
        }
        self.stop();
        self.current = Some(id);
        self.duration = 0.0;
        self.media.load(source);
        log::info!("[player] loaded tape {}", id);
        true
    }

    /// Swap the audio under the current tape; the deck stays loaded and paused.
    pub fn reload(&mut self, source: &str) {
        if self.current.is_none() {
            return;
        }
        self.stop();
        self.duration = 0.0;
        self.media.load(source);
    }

    /// Take the current tape out of the deck.
    pub fn eject(&mut self) {
        if let Some(id) = self.current.take() {
            self.pause_media();
            self.current_time = 0.0;
            self.duration = 0.0;
            log::info!("[player] ejected tape {}", id);
        }
    }

    pub fn toggle(&mut self) {
        if self.current.is_none() {
            return;
        }
        if self.playing || self.play_pending {
            self.media.pause();
            self.playing = false;
            self.play_pending = false;
            return;
        }
        self.play_seq += 1;
        match self.media.play(self.play_seq) {
            Ok(PlayOutcome::Started) => self.playing = true,
            Ok(PlayOutcome::Pending) => self.play_pending = true,
            Err(e) => log::error!("[player] play failed: {}", e),
        }
    }

    pub fn stop(&mut self) {
        if self.current.is_some() {
            self.media.pause();
            self.media.seek(0.0);
        }
        self.playing = false;
        self.play_pending = false;
        self.current_time = 0.0;
    }

    pub fn seek(&mut self, time_sec: f64) {
        if self.current.is_none() || !time_sec.is_finite() {
            return;
        }
        let upper = if self.duration > 0.0 { self.duration } else { 0.0 };
        let t = time_sec.clamp(0.0, upper);
        self.media.seek(t);
        self.current_time = t;
    }

    /// Apply a media notification. Position updates arriving after an eject
    /// belong to the old source and are dropped.
    pub fn handle_event(&mut self, event: MediaEvent) {
        if self.current.is_none() {
            return;
        }
        match event {
            MediaEvent::TimeUpdate(t) => {
                if t.is_finite() {
                    self.current_time = t;
                }
            }
            MediaEvent::DurationChange(d) => {
                self.duration = if d.is_finite() && d > 0.0 { d } else { 0.0 };
            }
            MediaEvent::Ended => {
                self.playing = false;
                self.play_pending = false;
            }
            MediaEvent::PlayConfirmed(attempt) => {
                if self.play_pending && attempt == self.play_seq {
                    self.play_pending = false;
                    self.playing = true;
                }
            }
            MediaEvent::PlayRejected(attempt, reason) => {
                if self.play_pending && attempt == self.play_seq {
                    self.play_pending = false;
                    log::warn!("[player] play rejected: {}", reason);
                }
            }
        }
    }

    fn pause_media(&mut self) {
        self.media.pause();
        self.playing = false;
        self.play_pending = false;
    }
}

/// Elapsed fraction for a progress bar, clamped to [0, 1].
pub fn progress(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 && current_time.is_finite() {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// `MM:SS` clock text.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
