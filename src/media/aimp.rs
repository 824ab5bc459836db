//! AIMP control through its remote-access window.
//!
//! AIMP registers a hidden `AIMP2_RemoteInfo` window that answers property
//! queries and transport commands sent as window messages.

use std::time::Duration;

use super::controller::{PlaybackState, PlayerController, PlayerError};

pub const PLAYER_NAME: &str = "AIMP";

// Remote-access protocol constants
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
mod remote {
    pub const WINDOW_CLASS: &str = "AIMP2_RemoteInfo";
    /// `WM_USER + 0x75`
    pub const WM_AIMP_COMMAND: u32 = 0x0400 + 0x75;
    /// `WM_USER + 0x77`
    pub const WM_AIMP_PROPERTY: u32 = 0x0400 + 0x77;

    pub const PROPVALUE_GET: usize = 0;
    pub const PROPERTY_PLAYER_STATE: usize = 0x40;

    pub const CMD_BASE: usize = 10;
    pub const CMD_PLAY: usize = CMD_BASE + 3;
    /// Toggle; never sent, resuming must not pause a player the user just started.
    pub const CMD_PLAYPAUSE: usize = CMD_BASE + 4;
    pub const CMD_PAUSE: usize = CMD_BASE + 5;

    pub const STATE_STOPPED: isize = 0;
    pub const STATE_PAUSED: isize = 1;
    pub const STATE_PLAYING: isize = 2;
}

/// Map the raw player-state property value onto [`PlaybackState`].
pub fn playback_state_from_raw(raw: isize) -> PlaybackState {
    match raw {
        remote::STATE_STOPPED => PlaybackState::Stopped,
        remote::STATE_PAUSED => PlaybackState::Paused,
        remote::STATE_PLAYING => PlaybackState::Playing,
        other => PlaybackState::Unknown(other),
    }
}

/// Controller for the AIMP player.
pub struct AimpController {
    /// Upper bound on how long a single window message may block the loop
    timeout: Duration,
}

impl AimpController {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl PlayerController for AimpController {
    fn name(&self) -> String {
        PLAYER_NAME.to_string()
    }

    fn playback_state(&self) -> Result<PlaybackState, PlayerError> {
        let raw = self.send_message(
            remote::WM_AIMP_PROPERTY,
            remote::PROPERTY_PLAYER_STATE | remote::PROPVALUE_GET,
        )?;
        Ok(playback_state_from_raw(raw))
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.send_message(remote::WM_AIMP_COMMAND, remote::CMD_PAUSE)?;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.send_message(remote::WM_AIMP_COMMAND, remote::CMD_PLAY)?;
        Ok(())
    }
}

// ============================================
// Windows Implementation (window messages)
// ============================================
#[cfg(target_os = "windows")]
impl AimpController {
    fn remote_window(&self) -> Result<windows::Win32::Foundation::HWND, PlayerError> {
        use windows::core::{HSTRING, PCWSTR};
        use windows::Win32::UI::WindowsAndMessaging::FindWindowW;

        let class = HSTRING::from(remote::WINDOW_CLASS);
        let hwnd = unsafe { FindWindowW(&class, PCWSTR::null()) }
            .map_err(|_| PlayerError::NotRunning(PLAYER_NAME.to_string()))?;

        if hwnd.is_invalid() {
            return Err(PlayerError::NotRunning(PLAYER_NAME.to_string()));
        }
        Ok(hwnd)
    }

    fn send_message(&self, msg: u32, wparam: usize) -> Result<isize, PlayerError> {
        use windows::Win32::Foundation::{LPARAM, WPARAM};
        use windows::Win32::UI::WindowsAndMessaging::{
            SendMessageTimeoutW, SMTO_ABORTIFHUNG, SMTO_BLOCK,
        };

        let hwnd = self.remote_window()?;
        let timeout_ms = self.timeout.as_millis().min(u32::MAX as u128) as u32;
        let mut result: usize = 0;

        let sent = unsafe {
            SendMessageTimeoutW(
                hwnd,
                msg,
                WPARAM(wparam),
                LPARAM(0),
                SMTO_ABORTIFHUNG | SMTO_BLOCK,
                timeout_ms,
                Some(&mut result),
            )
        };

        if sent.0 == 0 {
            return Err(PlayerError::Unresponsive {
                player: PLAYER_NAME.to_string(),
                reason: format!("no reply within {}ms", timeout_ms),
            });
        }
        Ok(result as isize)
    }
}

#[cfg(not(target_os = "windows"))]
impl AimpController {
    fn send_message(&self, _msg: u32, _wparam: usize) -> Result<isize, PlayerError> {
        Err(PlayerError::Unsupported)
    }
}
