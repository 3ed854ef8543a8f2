// Test double for the media element: records every command it receives.

use crate::core::{MediaBackend, MediaError, PlayOutcome};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load(String),
    Play,
    Pause,
    Seek(f64),
}

pub struct RecordingMedia {
    pub commands: Vec<Command>,
    pub play_result: Result<PlayOutcome, MediaError>,
    /// Attempt number passed to the latest `play`.
    pub last_attempt: Option<u64>,
}

impl Default for RecordingMedia {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            play_result: Ok(PlayOutcome::Started),
            last_attempt: None,
        }
    }
}

impl RecordingMedia {
    pub fn deferred() -> Self {
        Self {
            play_result: Ok(PlayOutcome::Pending),
            ..Self::default()
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            play_result: Err(MediaError::Unsupported(reason.to_string())),
            ..Self::default()
        }
    }

    pub fn count(&self, cmd: &Command) -> usize {
        self.commands.iter().filter(|c| *c == cmd).count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl MediaBackend for RecordingMedia {
    fn load(&mut self, source: &str) {
        self.commands.push(Command::Load(source.to_string()));
    }

    fn play(&mut self, attempt: u64) -> Result<PlayOutcome, MediaError> {
        self.commands.push(Command::Play);
        self.last_attempt = Some(attempt);
        self.play_result.clone()
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn seek(&mut self, time_sec: f64) {
        self.commands.push(Command::Seek(time_sec));
    }
}
