use crate::audio::{AudioBackend, AudioError, AudioSession};

/// Backend for platforms without a per-process session API.
pub struct UnsupportedBackend;

impl UnsupportedBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for UnsupportedBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log::warn!("Audio session monitoring is only implemented for Windows");
        Ok(())
    }

    fn get_sessions(&self) -> Result<Vec<AudioSession>, AudioError> {
        Err(AudioError::Unsupported)
    }
}
