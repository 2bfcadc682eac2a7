use super::*;
use crate::model::AppId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(app: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || state.get().windows.into_iter().find(|w| w.app == app));
    let is_active = Signal::derive(move || state.get().active_window_id() == Some(app));

    // While a session for this window is tracking, the live value wins over
    // the committed rect; otherwise the committed rect is authoritative.
    let display_position = Signal::derive(move || match runtime.interaction.get().dragging {
        Some(session) if session.app == app => Some(session.live),
        _ => window.get().map(|w| w.position),
    });
    let display_size = Signal::derive(move || match runtime.interaction.get().resizing {
        Some(session) if session.app == app => Some(session.live),
        _ => window.get().map(|w| w.size),
    });

    let focus = move |_| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::Focus { app });
        }
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime
            .host
            .get_value()
            .notify_sound(SoundEvent::WindowClose);
        runtime.dispatch_action(DesktopAction::Close { app });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime
            .host
            .get_value()
            .notify_sound(SoundEvent::WindowMinimize);
        runtime.dispatch_action(DesktopAction::Minimize { app });
    };

    // Title-bar press begins the drag. The event is allowed to bubble so the
    // window root's focus handler still runs.
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            app,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let position = display_position.get().unwrap_or(win.position);
                let size = display_size.get().unwrap_or(win.size);
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    position.x, position.y, size.width, size.height, win.z_index
                );
                let active_class = if is_active.get() { " active" } else { "" };

                view! {
                    <section
                        class=format!("desktop-window{}", active_class)
                        style=style
                        role="dialog"
                        aria-label=win.title.clone()
                        on:pointerdown=focus
                    >
                        <header class="titlebar" on:pointerdown=begin_drag>
                            <div class="titlebar-controls">
                                <button
                                    class="window-btn window-btn-close"
                                    title="Close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=close
                                ></button>
                                <button
                                    class="window-btn window-btn-minimize"
                                    title="Minimize"
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=minimize
                                ></button>
                                <span class="window-btn window-btn-inert" aria-hidden="true"></span>
                            </div>
                            <div class="titlebar-title">
                                <img class="titlebar-icon" src=win.icon.clone() alt="" />
                                <span>{win.title.clone()}</span>
                            </div>
                            <span class="titlebar-spacer" aria-hidden="true"></span>
                        </header>
                        <div class="window-body">
                            {apps::render_window_contents(app)}
                        </div>
                        <div
                            class="resize-handle"
                            aria-hidden="true"
                            on:pointerdown=begin_resize
                        ></div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}
