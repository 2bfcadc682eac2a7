//! Boot splash shown before the desktop mounts.

use super::*;

/// How long the fake boot sequence runs before completing.
const BOOT_DURATION: Duration = Duration::from_millis(2500);
/// Fade-out time between "done" and unmounting.
const BOOT_FADE_OUT: Duration = Duration::from_millis(500);

#[component]
/// Fake boot animation with logo and progress bar. Plays the startup chime
/// when the sequence finishes, waits for the fade-out, then invokes
/// `on_complete` exactly once.
pub fn BootScreen(
    /// Invoked when the boot sequence has finished and faded out.
    on_complete: Callback<()>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let done = create_rw_signal(false);

    set_timeout(
        move || {
            done.set(true);
            runtime.host.get_value().notify_sound(SoundEvent::BootChime);
            set_timeout(move || on_complete.call(()), BOOT_FADE_OUT);
        },
        BOOT_DURATION,
    );

    view! {
        <div class=move || if done.get() { "boot-screen done" } else { "boot-screen" }>
            <div class="boot-logo">
                <span>"ayaz"</span>
                <span class="boot-logo-accent">"OS"</span>
            </div>
            <p class="boot-tagline">"Loading workspace..."</p>
            <div class="boot-progress">
                <div class="boot-progress-fill"></div>
            </div>
            <p class="boot-footer">"v1.0.0"</p>
        </div>
    }
}
