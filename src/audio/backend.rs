use super::session::AudioSession;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to initialize audio backend: {0}")]
    InitFailed(String),
    #[error("audio session query failed: {0}")]
    QueryFailed(String),
    #[error("audio session monitoring is not supported on this platform")]
    Unsupported,
}

#[cfg_attr(test, mockall::automock)]
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self) -> Result<(), AudioError>;

    /// Snapshot every audio session on the default output device
    fn get_sessions(&self) -> Result<Vec<AudioSession>, AudioError>;
}
