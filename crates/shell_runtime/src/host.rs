//! Host-side service bundle and browser environment queries for the shell.
//!
//! Keeps collaborator access behind a typed boundary so components never
//! talk to `web_sys` or the sound adapter directly, and so tests can inject
//! the no-op adapters.

use std::rc::Rc;

use leptos::logging;
use shell_host::{SoundEvent, SoundService};
use shell_host_web::WebAudioSoundService;

use crate::model::Viewport;

#[derive(Clone)]
/// Host services the desktop shell consumes best-effort.
pub struct DesktopHostContext {
    sound: Rc<dyn SoundService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            sound: Rc::new(WebAudioSoundService::default()),
        }
    }
}

impl DesktopHostContext {
    /// Builds a context around a specific sound adapter.
    pub fn with_sound(sound: Rc<dyn SoundService>) -> Self {
        Self { sound }
    }

    /// Fire-and-forget sound notification. Failures are logged and dropped;
    /// window state never depends on the notifier.
    pub fn notify_sound(&self, event: SoundEvent) {
        if let Err(err) = self.sound.play(event) {
            logging::warn!("sound effect {event:?} skipped: {err}");
        }
    }

    /// Globally mutes or unmutes sound feedback.
    pub fn set_sound_muted(&self, muted: bool) {
        self.sound.set_muted(muted);
    }

    /// Returns whether sound feedback is muted.
    pub fn sound_muted(&self) -> bool {
        self.sound.muted()
    }

    /// Current browser viewport dimensions, with a fixed fallback for
    /// non-browser targets.
    pub fn desktop_viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(1280.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(800.0);
                return Viewport {
                    width: width as i32,
                    height: height as i32,
                };
            }
        }

        Viewport {
            width: 1280,
            height: 800,
        }
    }
}
