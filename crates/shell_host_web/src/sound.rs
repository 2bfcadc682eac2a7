//! Sound adapter backed by `HtmlAudioElement`.

use std::cell::Cell;

use shell_host::{SoundError, SoundEvent, SoundService};

struct EffectSource {
    url: &'static str,
    volume: f64,
}

fn effect_source(event: SoundEvent) -> EffectSource {
    match event {
        SoundEvent::BootChime => EffectSource {
            url: "/assets/sfx/startup.mp3",
            volume: 0.6,
        },
        SoundEvent::Click => EffectSource {
            url: "/assets/sfx/click.mp3",
            volume: 0.5,
        },
        SoundEvent::ButtonPress => EffectSource {
            url: "/assets/sfx/button-down.mp3",
            volume: 0.4,
        },
        SoundEvent::Hover => EffectSource {
            url: "/assets/sfx/button-up.mp3",
            volume: 0.25,
        },
        SoundEvent::WindowOpen => EffectSource {
            url: "/assets/sfx/window-open.mp3",
            volume: 0.5,
        },
        SoundEvent::WindowClose => EffectSource {
            url: "/assets/sfx/window-close.mp3",
            volume: 0.5,
        },
        SoundEvent::WindowMinimize => EffectSource {
            url: "/assets/sfx/window-collapse.mp3",
            volume: 0.45,
        },
    }
}

#[derive(Debug, Default)]
/// Browser sound adapter.
///
/// Each play spins up a fresh `HtmlAudioElement` so overlapping effects mix
/// instead of cutting each other off. Playback is started and forgotten;
/// autoplay rejections surface as [`SoundError::Playback`] for the caller to
/// swallow.
pub struct WebAudioSoundService {
    muted: Cell<bool>,
}

impl SoundService for WebAudioSoundService {
    fn play(&self, event: SoundEvent) -> Result<(), SoundError> {
        if self.muted.get() {
            return Ok(());
        }

        #[cfg(target_arch = "wasm32")]
        {
            let source = effect_source(event);
            let audio = web_sys::HtmlAudioElement::new_with_src(source.url)
                .map_err(|err| SoundError::Playback(format!("{err:?}")))?;
            audio.set_volume(source.volume);
            let _ = audio
                .play()
                .map_err(|err| SoundError::Playback(format!("{err:?}")))?;
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = effect_source(event);
            Ok(())
        }
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }
}
