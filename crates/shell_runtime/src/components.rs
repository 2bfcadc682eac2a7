//! Desktop shell UI composition and interaction surfaces.

mod boot;
mod dock;
mod icons;
mod window;

use std::time::Duration;

use leptos::*;
use shell_host::SoundEvent;

use self::{dock::Dock, icons::DesktopIcon, window::DesktopWindow};
use crate::{
    apps,
    model::{PointerPosition, WindowRecord},
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

pub use boot::BootScreen;

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary-button press check shared by the drag and resize surfaces. Mouse
/// input must use the left button; touch/pen input must be the primary
/// contact.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn visible_windows(windows: &[WindowRecord]) -> Vec<WindowRecord> {
    let mut visible: Vec<WindowRecord> = windows.iter().filter(|w| !w.minimized).cloned().collect();
    // DOM order tracks paint order so tab focus follows the stack.
    visible.sort_by_key(|w| w.z_index);
    visible
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let sessions = runtime.interaction.get_untracked();
    if sessions.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
    if sessions.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn cancel_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let sessions = runtime.interaction.get_untracked();
    if sessions.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::CancelDrag);
    }
    if sessions.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::CancelResize);
    }
}

#[component]
/// Renders the full desktop: icon column, visible windows in paint order,
/// dock, and status clock. Owns the global keyboard and pointer listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Escape closes the active window. The listener lives for the shell's
    // lifetime and is removed on teardown.
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.get_untracked().active_window_id().is_some() {
            runtime
                .host
                .get_value()
                .notify_sound(SoundEvent::WindowClose);
        }
        runtime.dispatch_action(DesktopAction::CloseActive);
    });
    on_cleanup(move || escape_listener.remove());

    // Shell teardown mid-drag must release the session without committing.
    on_cleanup(move || cancel_active_pointer_interaction(runtime));

    // Move/up/cancel listeners sit on the shell root for the whole session;
    // pointer capture on the pressed element keeps events flowing here even
    // when the pointer leaves the window bounds.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let sessions = runtime.interaction.get_untracked();
        if sessions.dragging.is_none() && sessions.resizing.is_none() {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        if sessions.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateDrag { pointer });
        }
        if sessions.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);
    let on_pointer_cancel = move |_| cancel_active_pointer_interaction(runtime);

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_cancel
        >
            <div class="desktop-icon-grid">
                <For
                    each=move || apps::app_registry().to_vec()
                    key=|descriptor| descriptor.app
                    let:descriptor
                >
                    <DesktopIcon descriptor=descriptor />
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || visible_windows(&state.get().windows)
                    key=|win| win.app
                    let:win
                >
                    <DesktopWindow app=win.app />
                </For>
            </div>

            <Dock />
            <StatusClock />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        snapshot.year, snapshot.month, snapshot.day
    )
}

#[component]
fn StatusClock() -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());

    let tick = set_interval_with_handle(
        move || now.set(ClockSnapshot::now()),
        Duration::from_secs(30),
    );
    on_cleanup(move || {
        if let Ok(handle) = tick {
            handle.clear();
        }
    });

    view! {
        <div class="status-clock" aria-hidden="true">
            <div class="status-clock-time">{move || format_clock_time(now.get())}</div>
            <div class="status-clock-date">{move || format_clock_date(now.get())}</div>
        </div>
    }
}
