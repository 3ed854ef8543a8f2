//! Contract for the native media element that decodes and plays tapes.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MediaError {
    #[error("play rejected: {0}")]
    Rejected(String),
    #[error("unsupported source: {0}")]
    Unsupported(String),
}

/// What a play command achieved by the time it returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback is running.
    Started,
    /// The backend will answer later with `PlayConfirmed` or `PlayRejected`
    /// carrying the same attempt number.
    Pending,
}

/// Notifications raised by the media element, delivered asynchronously.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    TimeUpdate(f64),
    DurationChange(f64),
    Ended,
    /// Result of a pending play, tagged with the attempt it answers.
    PlayConfirmed(u64),
    PlayRejected(u64, String),
}

pub trait MediaBackend {
    fn load(&mut self, source: &str);
    fn play(&mut self, attempt: u64) -> Result<PlayOutcome, MediaError>;
    fn pause(&mut self);
    fn seek(&mut self, time_sec: f64);
}
