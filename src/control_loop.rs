use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::audio::{ActivitySampler, ActivitySnapshot, AudioBackend};
use crate::media::{PlayerController, PlayerError};
use crate::notifier::Notifier;
use crate::state_machine::{Command, Decision, YieldStateMachine};

/// Result of one sample-decide-act cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Paused,
    Resumed,
    Held,
    /// The player could not be reached; nothing changed this tick.
    PlayerUnavailable,
    /// Audio sessions could not be enumerated; the tick was skipped.
    SamplingFailed,
}

pub fn active_sessions_message(snapshot: &ActivitySnapshot) -> String {
    format!("Active sessions: {}", snapshot)
}

pub fn paused_message(player: &str) -> String {
    format!("{} paused due to active session.", player)
}

pub fn resumed_message(player: &str) -> String {
    format!("{} resumed as no active session found.", player)
}

/// Owns all mutable state of the monitor. One instance per process.
pub struct ControlLoop<B: AudioBackend, P: PlayerController, W: Write> {
    sampler: ActivitySampler<B>,
    player: P,
    machine: YieldStateMachine,
    notifier: Notifier<W>,
    interval: Duration,
    last_sampling_error: Option<String>,
}

impl<B: AudioBackend, P: PlayerController, W: Write> ControlLoop<B, P, W> {
    pub fn new(
        sampler: ActivitySampler<B>,
        player: P,
        notifier: Notifier<W>,
        interval: Duration,
    ) -> Self {
        Self {
            sampler,
            player,
            machine: YieldStateMachine::new(),
            notifier,
            interval,
            last_sampling_error: None,
        }
    }

    pub fn machine(&self) -> &YieldStateMachine {
        &self.machine
    }

    pub fn notifier(&self) -> &Notifier<W> {
        &self.notifier
    }

    /// Tick forever, sleeping `interval` between ticks. Ends only with the process.
    pub fn run(&mut self) -> ! {
        log::info!(
            "🎵 Watching audio sessions for {} (ignoring {}), every {}ms",
            self.player.name(),
            self.sampler.player_process(),
            self.interval.as_millis()
        );

        loop {
            let outcome = self.evaluate_tick();
            log::trace!("Tick finished: {:?}", outcome);
            thread::sleep(self.interval);
        }
    }

    /// Run exactly one sample-decide-act cycle.
    pub fn evaluate_tick(&mut self) -> TickOutcome {
        let snapshot = match self.sampler.sample() {
            Ok(snapshot) => {
                if self.last_sampling_error.take().is_some() {
                    log::info!("Audio session sampling recovered");
                }
                snapshot
            }
            Err(e) => {
                self.report_sampling_error(e.to_string());
                return TickOutcome::SamplingFailed;
            }
        };

        if !snapshot.is_empty() {
            self.notifier.show(&active_sessions_message(&snapshot));
        }

        let playback = match self.player.playback_state() {
            Ok(state) => state,
            Err(e) => {
                log_player_error("query playback state", &e);
                return TickOutcome::PlayerUnavailable;
            }
        };

        let decision = self.machine.decide(playback, !snapshot.is_empty());
        log::debug!(
            "Playback {:?}, {} other audible, last command {:?} -> {:?}",
            playback,
            snapshot.len(),
            self.machine.last_command(),
            decision
        );

        match decision {
            Decision::Pause => match self.player.pause() {
                Ok(()) => {
                    self.machine.record(Command::Pause);
                    self.notifier.show(&paused_message(&self.player.name()));
                    TickOutcome::Paused
                }
                Err(e) => {
                    log_player_error("pause", &e);
                    TickOutcome::PlayerUnavailable
                }
            },
            Decision::Resume => match self.player.play() {
                Ok(()) => {
                    self.machine.record(Command::Play);
                    self.notifier.show(&resumed_message(&self.player.name()));
                    TickOutcome::Resumed
                }
                Err(e) => {
                    log_player_error("resume", &e);
                    TickOutcome::PlayerUnavailable
                }
            },
            Decision::Hold => TickOutcome::Held,
        }
    }

    fn report_sampling_error(&mut self, error: String) {
        if self.last_sampling_error.as_deref() == Some(error.as_str()) {
            log::debug!("Audio session sampling still failing: {}", error);
        } else {
            log::warn!("⚠️ Audio session sampling failed, skipping tick: {}", error);
            self.last_sampling_error = Some(error);
        }
    }
}

fn log_player_error(action: &str, error: &PlayerError) {
    match error {
        PlayerError::NotRunning(_) => log::debug!("Cannot {}: {}", action, error),
        PlayerError::Unresponsive { .. } => log::debug!("Failed to {}: {}", action, error),
        PlayerError::Unsupported => log::trace!("Cannot {}: {}", action, error),
    }
}
