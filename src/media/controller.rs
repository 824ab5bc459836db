use thiserror::Error;

/// Transport status reported by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Paused,
    Playing,
    /// Anything the player reports that we don't recognise.
    Unknown(isize),
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("{0} is not running")]
    NotRunning(String),
    #[error("{player} did not answer: {reason}")]
    Unresponsive { player: String, reason: String },
    #[error("player control is not supported on this platform")]
    Unsupported,
}

/// Narrow control surface over the target media player.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerController {
    /// Human readable player name used in status messages
    fn name(&self) -> String;

    fn playback_state(&self) -> Result<PlaybackState, PlayerError>;

    fn pause(&mut self) -> Result<(), PlayerError>;

    fn play(&mut self) -> Result<(), PlayerError>;
}
