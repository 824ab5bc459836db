//! Media player control for pausing/resuming the target player.
//!
//! Uses platform-specific APIs:
//! - Windows: `windows` crate (AIMP remote-control window messages)
//! - Others: every call reports `Unsupported`

mod aimp;
mod controller;

pub use aimp::AimpController;
#[cfg(test)]
pub use controller::MockPlayerController;
pub use controller::{PlaybackState, PlayerController, PlayerError};

/// Build the controller for the configured player.
pub fn create_player(config: &crate::config::MonitorConfig) -> AimpController {
    AimpController::new(config.player_timeout)
}
