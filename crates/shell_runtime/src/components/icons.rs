use super::*;
use crate::apps::AppDescriptor;

/// How long a single click keeps the icon highlighted before it deselects.
const ICON_DESELECT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub(super) fn DesktopIcon(descriptor: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_rw_signal(false);

    let on_click = move |_| {
        runtime.host.get_value().notify_sound(SoundEvent::Click);
        selected.set(true);
        set_timeout(move || selected.set(false), ICON_DESELECT_DELAY);
    };
    let on_double_click = move |_| {
        selected.set(false);
        let host = runtime.host.get_value();
        host.notify_sound(SoundEvent::WindowOpen);
        runtime.dispatch_action(DesktopAction::Open {
            request: apps::open_request(descriptor.app),
            viewport: host.desktop_viewport(),
        });
    };

    view! {
        <button
            class=move || {
                if selected.get() {
                    "desktop-icon selected"
                } else {
                    "desktop-icon"
                }
            }
            title=format!("Open {}", descriptor.title)
            on:click=on_click
            on:dblclick=on_double_click
        >
            <span class="desktop-icon-image">
                <img src=descriptor.icon alt=descriptor.title />
            </span>
            <span class="desktop-icon-label">{descriptor.title}</span>
        </button>
    }
}
