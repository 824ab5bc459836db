use std::collections::BTreeSet;
use std::fmt;

use super::backend::{AudioBackend, AudioError};
use super::peak_detector::is_audible;

/// Processes other than the target player that were audible in one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    processes: BTreeSet<String>,
}

impl ActivitySnapshot {
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn contains(&self, process_name: &str) -> bool {
        self.processes.contains(process_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.processes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ActivitySnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders as `chrome.exe - discord.exe`.
impl fmt::Display for ActivitySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{}", names.join(" - "))
    }
}

/// Turns raw audio sessions into the set of audible processes, ignoring the player itself.
pub struct ActivitySampler<B: AudioBackend> {
    backend: B,
    player_process: String,
}

impl<B: AudioBackend> ActivitySampler<B> {
    pub fn new(backend: B, player_process: impl Into<String>) -> Self {
        Self {
            backend,
            player_process: player_process.into(),
        }
    }

    pub fn player_process(&self) -> &str {
        &self.player_process
    }

    pub fn sample(&self) -> Result<ActivitySnapshot, AudioError> {
        let sessions = self.backend.get_sessions()?;
        let total = sessions.len();

        let snapshot: ActivitySnapshot = sessions
            .into_iter()
            .filter(is_audible)
            .filter_map(|session| session.process_name)
            .filter(|name| !self.is_player(name))
            .collect();

        log::debug!(
            "Sampled {} audio sessions, {} other audible processes",
            total,
            snapshot.len()
        );
        Ok(snapshot)
    }

    fn is_player(&self, process_name: &str) -> bool {
        process_name.eq_ignore_ascii_case(&self.player_process)
    }
}
