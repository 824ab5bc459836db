use super::session::AudioSession;

/// Peak amplitude a session must exceed to count as audible.
/// Separates true digital silence from any real signal, not a loudness level.
pub const PEAK_THRESHOLD: f32 = 0.00001;

/// Whether the session was producing sound when it was sampled.
pub fn is_audible(session: &AudioSession) -> bool {
    session.peak_level.is_some_and(exceeds_threshold)
}

fn exceeds_threshold(peak: f32) -> bool {
    peak > PEAK_THRESHOLD
}
