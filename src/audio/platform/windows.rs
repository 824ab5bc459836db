use crate::audio::{AudioBackend, AudioError, AudioSession};
use crate::utils::process_names::process_name;
use windows::core::Interface;
use windows::Win32::Media::Audio::Endpoints::IAudioMeterInformation;
use windows::Win32::Media::Audio::*;
use windows::Win32::System::Com::*;

fn query_failed(context: &str, err: windows::core::Error) -> AudioError {
    AudioError::QueryFailed(format!("{}: {}", context, err))
}

/// WASAPI sessions on the default render endpoint, with their peak meters.
pub struct WasapiBackend {
    com_initialized: bool,
}

impl WasapiBackend {
    pub fn new() -> Self {
        Self {
            com_initialized: false,
        }
    }
}

impl Default for WasapiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for WasapiBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        if !self.com_initialized {
            unsafe {
                CoInitializeEx(None, COINIT_MULTITHREADED)
                    .ok()
                    .map_err(|e| AudioError::InitFailed(format!("CoInitializeEx: {}", e)))?;
            }
            self.com_initialized = true;
            log::debug!("COM initialized for WASAPI session monitoring");
        }
        Ok(())
    }

    fn get_sessions(&self) -> Result<Vec<AudioSession>, AudioError> {
        unsafe {
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)
                    .map_err(|e| query_failed("MMDeviceEnumerator", e))?;

            let device = enumerator
                .GetDefaultAudioEndpoint(eRender, eConsole)
                .map_err(|e| query_failed("GetDefaultAudioEndpoint", e))?;

            let session_manager: IAudioSessionManager2 = device
                .Activate(CLSCTX_ALL, None)
                .map_err(|e| query_failed("IAudioSessionManager2", e))?;

            let session_enumerator = session_manager
                .GetSessionEnumerator()
                .map_err(|e| query_failed("GetSessionEnumerator", e))?;

            let count = session_enumerator
                .GetCount()
                .map_err(|e| query_failed("GetCount", e))?;

            let mut sessions = Vec::with_capacity(count.max(0) as usize);

            for i in 0..count {
                // Sessions can disappear between GetCount and GetSession.
                let Ok(session_control) = session_enumerator.GetSession(i) else {
                    continue;
                };

                let process_id = session_control
                    .cast::<IAudioSessionControl2>()
                    .and_then(|control| control.GetProcessId())
                    .unwrap_or(0);

                let peak_level = session_control
                    .cast::<IAudioMeterInformation>()
                    .and_then(|meter| meter.GetPeakValue())
                    .ok();

                sessions.push(AudioSession::new(
                    process_id,
                    process_name(process_id),
                    peak_level,
                ));
            }

            Ok(sessions)
        }
    }
}

impl Drop for WasapiBackend {
    fn drop(&mut self) {
        if self.com_initialized {
            unsafe { CoUninitialize() };
        }
    }
}
