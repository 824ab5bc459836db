pub mod audio;
pub mod config;
pub mod control_loop;
pub mod media;
pub mod notifier;
pub mod state_machine;
mod utils;

#[cfg(test)]
mod tests;

use audio::{create_backend, ActivitySampler, AudioBackend, AudioError};
use config::MonitorConfig;
use control_loop::ControlLoop;
use media::create_player;
use notifier::Notifier;

pub use utils::logger::init_logging;

/// Start monitoring. Only returns if the audio backend cannot be initialized.
pub fn run() -> Result<(), AudioError> {
    init_logging();

    let config = MonitorConfig::from_env();
    log::info!("Starting audioyield with {:?}", config);

    let mut backend = create_backend();
    backend.initialize()?;

    let sampler = ActivitySampler::new(backend, config.player_process.clone());
    let player = create_player(&config);
    let mut control = ControlLoop::new(sampler, player, Notifier::stdout(), config.poll_interval);

    control.run()
}
