//! Playback policy for page videos.
//!
//! Everything here is a pure decision function over [`PlaybackState`] and
//! [`PlaybackFlags`]; `controller` owns the DOM side and applies the
//! returned [`PlaybackAction`] to the real media element.

pub mod controller;

/// Where a tracked video currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Before the first autoplay attempt.
    Idle,
    PlayingMuted,
    PlayingWithSound,
    Paused,
    /// Autoplay was rejected; waiting for a user gesture.
    AwaitingInteraction,
}

/// Sticky per-video flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackFlags {
    /// Set only by the explicit sound toggle; survives visibility churn
    /// for the rest of the page session.
    pub user_unmuted: bool,
    /// Muted for autoplay compliance rather than by user choice.
    pub muted_by_policy: bool,
}

/// What the DOM driver should do to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    PlayMuted,
    PlayWithSound,
    Pause,
    None,
}

/// Resolves the initial autoplay attempt.
pub fn initial_attempt_result(play_succeeded: bool) -> PlaybackState {
    if play_succeeded {
        PlaybackState::PlayingMuted
    } else {
        PlaybackState::AwaitingInteraction
    }
}

/// Decides the transition for one viewport check. Leaving the viewport
/// pauses without touching mute flags; entering resumes with sound only
/// if the user asked for it. A rejected autoplay is retried on every
/// in-viewport check, so `AwaitingInteraction` is not a dead end.
pub fn visibility_decision(
    state: PlaybackState,
    flags: PlaybackFlags,
    fully_in_viewport: bool,
) -> (PlaybackAction, PlaybackState) {
    if !fully_in_viewport {
        if state == PlaybackState::AwaitingInteraction {
            // Nothing is playing; keep waiting for a gesture.
            return (PlaybackAction::None, state);
        }
        return (PlaybackAction::Pause, PlaybackState::Paused);
    }
    if flags.user_unmuted {
        (PlaybackAction::PlayWithSound, PlaybackState::PlayingWithSound)
    } else {
        (PlaybackAction::PlayMuted, PlaybackState::PlayingMuted)
    }
}

/// Flips the mute preference from the explicit toggle. Unmuting is the
/// only path that sets `user_unmuted`; re-muting clears it.
pub fn toggle_sound(flags: PlaybackFlags) -> PlaybackFlags {
    if flags.user_unmuted {
        PlaybackFlags {
            user_unmuted: false,
            muted_by_policy: false,
        }
    } else {
        PlaybackFlags {
            user_unmuted: true,
            muted_by_policy: false,
        }
    }
}

/// Tab went hidden: everything pauses, flags untouched.
pub fn page_hidden_state(_state: PlaybackState) -> PlaybackState {
    PlaybackState::Paused
}

/// Whether a generic page click should retry playback for this entry.
pub fn should_retry_on_interaction(state: PlaybackState, fully_in_viewport: bool) -> bool {
    state == PlaybackState::AwaitingInteraction && fully_in_viewport
}

/// Storage key for the playback checkpoint of `source`.
pub fn checkpoint_key(source: &str) -> String {
    format!("video-{source}-time")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_outcome_maps_to_state() {
        assert_eq!(initial_attempt_result(true), PlaybackState::PlayingMuted);
        assert_eq!(
            initial_attempt_result(false),
            PlaybackState::AwaitingInteraction
        );
    }

    #[test]
    fn in_viewport_without_consent_plays_muted() {
        let (action, state) =
            visibility_decision(PlaybackState::Paused, PlaybackFlags::default(), true);
        assert_eq!(action, PlaybackAction::PlayMuted);
        assert_eq!(state, PlaybackState::PlayingMuted);
    }

    #[test]
    fn leaving_viewport_pauses_and_preserves_flags() {
        let flags = PlaybackFlags {
            user_unmuted: true,
            muted_by_policy: false,
        };
        let (action, state) = visibility_decision(PlaybackState::PlayingWithSound, flags, false);
        assert_eq!(action, PlaybackAction::Pause);
        assert_eq!(state, PlaybackState::Paused);
        // The decision never rewrites flags; the caller keeps them as-is.
        assert!(flags.user_unmuted);
    }

    #[test]
    fn consent_restores_sound_on_reentry() {
        let flags = toggle_sound(PlaybackFlags::default());
        assert!(flags.user_unmuted);
        let (action, state) = visibility_decision(PlaybackState::Paused, flags, true);
        assert_eq!(action, PlaybackAction::PlayWithSound);
        assert_eq!(state, PlaybackState::PlayingWithSound);
    }

    #[test]
    fn remuting_clears_consent() {
        let unmuted = toggle_sound(PlaybackFlags::default());
        let remuted = toggle_sound(unmuted);
        assert!(!remuted.user_unmuted);
        let (action, _) = visibility_decision(PlaybackState::Paused, remuted, true);
        assert_eq!(action, PlaybackAction::PlayMuted);
    }

    #[test]
    fn rejected_autoplay_retries_when_scrolled_into_view() {
        let (action, state) = visibility_decision(
            PlaybackState::AwaitingInteraction,
            PlaybackFlags::default(),
            true,
        );
        assert_eq!(action, PlaybackAction::PlayMuted);
        assert_eq!(state, PlaybackState::PlayingMuted);
    }

    #[test]
    fn rejected_autoplay_stays_parked_out_of_view() {
        let (action, state) = visibility_decision(
            PlaybackState::AwaitingInteraction,
            PlaybackFlags::default(),
            false,
        );
        assert_eq!(action, PlaybackAction::None);
        assert_eq!(state, PlaybackState::AwaitingInteraction);
    }

    #[test]
    fn hidden_page_pauses_every_state() {
        for state in [
            PlaybackState::Idle,
            PlaybackState::PlayingMuted,
            PlaybackState::PlayingWithSound,
            PlaybackState::Paused,
            PlaybackState::AwaitingInteraction,
        ] {
            assert_eq!(page_hidden_state(state), PlaybackState::Paused);
        }
    }

    #[test]
    fn shown_page_recheck_restores_viewport_state() {
        // After a hide/show cycle the entry is Paused; the regular
        // visibility decision puts it back where membership dictates.
        let flags = PlaybackFlags {
            user_unmuted: true,
            muted_by_policy: false,
        };
        let (_, in_view) = visibility_decision(PlaybackState::Paused, flags, true);
        assert_eq!(in_view, PlaybackState::PlayingWithSound);
        let (_, out_of_view) = visibility_decision(PlaybackState::Paused, flags, false);
        assert_eq!(out_of_view, PlaybackState::Paused);
    }

    #[test]
    fn interaction_retry_requires_viewport_membership() {
        assert!(should_retry_on_interaction(
            PlaybackState::AwaitingInteraction,
            true
        ));
        assert!(!should_retry_on_interaction(
            PlaybackState::AwaitingInteraction,
            false
        ));
        assert!(!should_retry_on_interaction(PlaybackState::Paused, true));
    }

    #[test]
    fn checkpoint_key_embeds_source() {
        assert_eq!(
            checkpoint_key("/assets/serenia-demo.mp4"),
            "video-/assets/serenia-demo.mp4-time"
        );
    }
}
