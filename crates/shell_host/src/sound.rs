//! Sound-notifier contract and no-op adapter.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// UI transitions the shell reports to the sound notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundEvent {
    /// Startup chime, played once when the boot sequence completes.
    BootChime,
    /// General UI click (desktop icon select).
    Click,
    /// Button press (dock click, window traffic-light buttons).
    ButtonPress,
    /// Hover tick feedback.
    Hover,
    /// A window opened or was restored.
    WindowOpen,
    /// A window closed.
    WindowClose,
    /// A window minimized.
    WindowMinimize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Playback failure reported by a sound adapter.
pub enum SoundError {
    /// The underlying audio backend rejected the play request.
    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Fire-and-forget sound notifier.
///
/// Implementations must return quickly; actual playback happens in the
/// background. Callers never propagate the error into window state.
pub trait SoundService {
    /// Plays the effect mapped to `event`, honoring the mute flag.
    fn play(&self, event: SoundEvent) -> Result<(), SoundError>;

    /// Globally mutes or unmutes effect playback.
    fn set_muted(&self, muted: bool);

    /// Returns whether playback is currently muted.
    fn muted(&self) -> bool;
}

#[derive(Debug, Default)]
/// No-op sound adapter for targets without an audio backend.
pub struct NoopSoundService {
    muted: Cell<bool>,
}

impl SoundService for NoopSoundService {
    fn play(&self, _event: SoundEvent) -> Result<(), SoundError> {
        Ok(())
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_service_tracks_mute_state() {
        let service = NoopSoundService::default();
        assert!(!service.muted());
        service.set_muted(true);
        assert!(service.muted());
        assert_eq!(service.play(SoundEvent::Click), Ok(()));
    }
}
