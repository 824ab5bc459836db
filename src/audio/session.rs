/// One OS audio stream observed during a single sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSession {
    pub process_id: u32,
    /// Executable name of the owning process, `None` if it could not be resolved
    /// (system sounds, or the process exited mid-pass).
    pub process_name: Option<String>,
    /// Peak amplitude in `0.0..=1.0` read during this pass.
    pub peak_level: Option<f32>,
}

impl AudioSession {
    pub fn new(process_id: u32, process_name: Option<String>, peak_level: Option<f32>) -> Self {
        Self {
            process_id,
            process_name,
            peak_level,
        }
    }
}
