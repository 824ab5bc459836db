use std::time::Duration;

/// Executable of the player we pause and resume
pub const DEFAULT_PLAYER_PROCESS: &str = "AIMP.exe";

/// Delay between two ticks of the control loop
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Lower bound on the tick interval, keeps a typo from spinning the CPU
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Longest a single player window message may block a tick
pub const DEFAULT_PLAYER_TIMEOUT_MS: u64 = 500;

pub const ENV_PLAYER_PROCESS: &str = "AUDIOYIELD_PLAYER_PROCESS";
pub const ENV_POLL_INTERVAL_MS: &str = "AUDIOYIELD_POLL_INTERVAL_MS";
pub const ENV_PLAYER_TIMEOUT_MS: &str = "AUDIOYIELD_PLAYER_TIMEOUT_MS";

/// Runtime settings, configurable via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub player_process: String,
    pub poll_interval: Duration,
    pub player_timeout: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            player_process: DEFAULT_PLAYER_PROCESS.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            player_timeout: Duration::from_millis(DEFAULT_PLAYER_TIMEOUT_MS),
        }
    }
}

impl MonitorConfig {
    pub fn from_env() -> Self {
        let player_process = std::env::var(ENV_PLAYER_PROCESS)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_PROCESS.to_string());

        let poll_interval_ms = millis_from_env(ENV_POLL_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS)
            .max(MIN_POLL_INTERVAL_MS);
        let player_timeout_ms = millis_from_env(ENV_PLAYER_TIMEOUT_MS, DEFAULT_PLAYER_TIMEOUT_MS);

        Self {
            player_process,
            poll_interval: Duration::from_millis(poll_interval_ms),
            player_timeout: Duration::from_millis(player_timeout_ms),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                log::warn!(
                    "Ignoring invalid {}={:?}, using default {}ms",
                    key,
                    value,
                    default
                );
                default
            }
        },
        Err(_) => default,
    }
}
