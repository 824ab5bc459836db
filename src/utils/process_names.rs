use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Process table shared across sampling passes; only requested pids get refreshed.
static SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| Mutex::new(System::new()));

/// Executable name (e.g. `chrome.exe`) of a running process.
///
/// Returns `None` for pid 0 and for processes that have already exited.
pub fn process_name(pid: u32) -> Option<String> {
    if pid == 0 {
        return None;
    }

    let mut system = match SYSTEM.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::error!("Process table lock poisoned, recovering");
            poisoned.into_inner()
        }
    };

    let pid = Pid::from_u32(pid);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    let name = system
        .process(pid)
        .map(|process| process.name().to_string_lossy().into_owned())
        .filter(|name| !name.is_empty());

    if name.is_none() {
        log::debug!("No running process for pid {}", pid);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_pid_has_no_name() {
        assert_eq!(process_name(0), None);
    }

    #[test]
    fn test_current_process_resolves() {
        let name = process_name(std::process::id());
        assert!(name.is_some_and(|n| !n.is_empty()));
    }

    #[test]
    fn test_missing_process_resolves_to_none() {
        assert_eq!(process_name(u32::MAX - 1), None);
    }
}
