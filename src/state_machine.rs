use crate::media::PlaybackState;

/// Last transport command this process sent to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
}

/// What one tick should do to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pause,
    Resume,
    Hold,
}

/// Two-state machine layered on the player's own playback state.
///
/// Only tracks what *we* asked for. If the user pauses the player by hand,
/// `last_command` stays `Play` and the player is never resumed behind their back.
pub struct YieldStateMachine {
    last_command: Command,
}

impl Default for YieldStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldStateMachine {
    pub fn new() -> Self {
        Self {
            last_command: Command::Play,
        }
    }

    pub fn last_command(&self) -> Command {
        self.last_command
    }

    /// True while the player is paused because of us.
    pub fn paused_by_us(&self) -> bool {
        self.last_command == Command::Pause
    }

    pub fn decide(&self, playback: PlaybackState, other_audio_active: bool) -> Decision {
        match (playback.is_playing(), other_audio_active) {
            (true, true) => Decision::Pause,
            (false, false) if self.paused_by_us() => Decision::Resume,
            _ => Decision::Hold,
        }
    }

    /// Remember a command once the player accepted it.
    pub fn record(&mut self, command: Command) {
        if command != self.last_command {
            log::info!("[FLOW] Last command: {:?} -> {:?}", self.last_command, command);
        }
        self.last_command = command;
    }
}
