#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

use super::backend::AudioBackend;

pub fn create_backend() -> Box<dyn AudioBackend> {
    #[cfg(target_os = "windows")]
    return Box::new(windows::WasapiBackend::new());

    #[cfg(not(target_os = "windows"))]
    return Box::new(unsupported::UnsupportedBackend::new());
}

impl<T: AudioBackend + ?Sized> AudioBackend for Box<T> {
    fn initialize(&mut self) -> Result<(), super::AudioError> {
        (**self).initialize()
    }

    fn get_sessions(&self) -> Result<Vec<super::AudioSession>, super::AudioError> {
        (**self).get_sessions()
    }
}
