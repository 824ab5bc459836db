/// Multi-tick scenarios for the control loop
///
/// These walk the loop through realistic sequences of audio activity and
/// player state changes, checking commands sent and lines printed.

#[cfg(test)]
mod yield_scenarios {
    use std::time::Duration;

    use super::super::test_data_helpers::*;
    use crate::audio::ActivitySampler;
    use crate::control_loop::{ControlLoop, TickOutcome};
    use crate::media::PlaybackState;
    use crate::notifier::Notifier;
    use crate::state_machine::Command;

    type TestLoop = ControlLoop<ScriptedBackend, FakePlayer, Vec<u8>>;

    fn build(ticks: Vec<Vec<crate::audio::AudioSession>>, player: FakePlayer) -> TestLoop {
        ControlLoop::new(
            ActivitySampler::new(ScriptedBackend::new(ticks), "AIMP.exe"),
            player,
            Notifier::new(Vec::new()),
            Duration::from_millis(1000),
        )
    }

    fn printed(control: &TestLoop) -> Vec<String> {
        String::from_utf8_lossy(control.notifier().output())
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_pause_then_resume_walkthrough() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(
            vec![
                vec![],
                vec![audible("chrome.exe")],
                vec![audible("chrome.exe")],
                vec![],
            ],
            player,
        );

        // tick 1: nothing else is playing
        assert_eq!(control.evaluate_tick(), TickOutcome::Held);
        assert_eq!(handle.pause_calls(), 0);

        // tick 2: chrome starts
        assert_eq!(control.evaluate_tick(), TickOutcome::Paused);
        assert_eq!(handle.pause_calls(), 1);
        assert_eq!(handle.state(), PlaybackState::Paused);
        assert_eq!(control.machine().last_command(), Command::Pause);

        // tick 3: chrome still playing, player already paused
        assert_eq!(control.evaluate_tick(), TickOutcome::Held);
        assert_eq!(handle.pause_calls(), 1);
        assert_eq!(handle.play_calls(), 0);

        // tick 4: chrome went quiet
        assert_eq!(control.evaluate_tick(), TickOutcome::Resumed);
        assert_eq!(handle.play_calls(), 1);
        assert_eq!(handle.state(), PlaybackState::Playing);
        assert_eq!(control.machine().last_command(), Command::Play);

        let lines = printed(&control);
        assert_eq!(
            lines
                .iter()
                .filter(|l| *l == "AIMP paused due to active session.")
                .count(),
            1
        );
        assert_eq!(
            lines
                .iter()
                .filter(|l| *l == "AIMP resumed as no active session found.")
                .count(),
            1
        );
        assert_eq!(lines.last().map(String::as_str), Some("AIMP resumed as no active session found."));
    }

    #[test]
    fn test_user_pause_is_left_alone() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(vec![vec![], vec![], vec![silent("chrome.exe")]], player);

        handle.set_state(PlaybackState::Paused);
        for _ in 0..3 {
            assert_eq!(control.evaluate_tick(), TickOutcome::Held);
        }

        assert_eq!(handle.play_calls(), 0);
        assert_eq!(handle.state(), PlaybackState::Paused);
        assert!(printed(&control).is_empty());
    }

    #[test]
    fn test_user_resume_while_other_audio_is_paused_again() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(
            vec![vec![audible("discord.exe")], vec![audible("discord.exe")]],
            player,
        );

        assert_eq!(control.evaluate_tick(), TickOutcome::Paused);
        handle.set_state(PlaybackState::Playing);
        assert_eq!(control.evaluate_tick(), TickOutcome::Paused);
        assert_eq!(handle.pause_calls(), 2);
    }

    #[test]
    fn test_user_stop_after_our_pause_still_resumes() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(vec![vec![audible("chrome.exe")], vec![]], player);

        assert_eq!(control.evaluate_tick(), TickOutcome::Paused);
        handle.set_state(PlaybackState::Stopped);
        assert_eq!(control.evaluate_tick(), TickOutcome::Resumed);
        assert_eq!(handle.play_calls(), 1);
    }

    #[test]
    fn test_player_only_audio_never_pauses_itself() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(
            vec![vec![audible("AIMP.exe")], vec![audible("AIMP.exe"), silent("chrome.exe")]],
            player,
        );

        assert_eq!(control.evaluate_tick(), TickOutcome::Held);
        assert_eq!(control.evaluate_tick(), TickOutcome::Held);
        assert_eq!(handle.pause_calls(), 0);
    }

    #[test]
    fn test_player_closed_then_reopened() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(
            vec![
                vec![audible("chrome.exe")],
                vec![],
                vec![],
            ],
            player,
        );

        assert_eq!(control.evaluate_tick(), TickOutcome::Paused);

        handle.set_running(false);
        assert_eq!(control.evaluate_tick(), TickOutcome::PlayerUnavailable);
        assert_eq!(control.machine().last_command(), Command::Pause);

        handle.set_running(true);
        assert_eq!(control.evaluate_tick(), TickOutcome::Resumed);
        assert_eq!(handle.play_calls(), 1);
    }

    #[test]
    fn test_ignored_pause_is_retried_every_tick() {
        let (player, handle) = FakePlayer::new(PlaybackState::Playing);
        let player = player.ignoring_pause();
        let mut control = build(
            vec![
                vec![audible("chrome.exe")],
                vec![audible("chrome.exe")],
                vec![audible("chrome.exe")],
            ],
            player,
        );

        for _ in 0..3 {
            assert_eq!(control.evaluate_tick(), TickOutcome::Paused);
        }
        assert_eq!(handle.pause_calls(), 3);
        assert_eq!(handle.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_active_sessions_line_repeats_after_pause_line() {
        let (player, _handle) = FakePlayer::new(PlaybackState::Playing);
        let mut control = build(
            vec![
                vec![audible("chrome.exe"), audible("discord.exe")],
                vec![audible("discord.exe"), audible("chrome.exe")],
                vec![audible("chrome.exe"), audible("discord.exe")],
            ],
            player,
        );

        for _ in 0..3 {
            control.evaluate_tick();
        }

        assert_eq!(
            printed(&control),
            vec![
                "Active sessions: chrome.exe - discord.exe",
                "AIMP paused due to active session.",
                "Active sessions: chrome.exe - discord.exe",
            ]
        );
    }
}
