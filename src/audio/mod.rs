//! Audio activity detection over the platform's per-process audio sessions.
//!
//! Uses platform-specific APIs:
//! - Windows: `windows` crate (WASAPI session manager + peak meters)
//! - Others: no session API, sampling reports `Unsupported`

mod backend;
pub mod peak_detector;
pub mod platform;
pub mod sampler;
mod session;

pub use backend::{AudioBackend, AudioError};
#[cfg(test)]
pub use backend::MockAudioBackend;
pub use platform::create_backend;
pub use sampler::{ActivitySampler, ActivitySnapshot};
pub use session::AudioSession;
