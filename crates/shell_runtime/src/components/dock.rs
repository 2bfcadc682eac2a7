use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Dock">
            <For
                each=move || apps::app_registry().to_vec()
                key=|descriptor| descriptor.app
                let:descriptor
            >
                {
                    let is_open = Signal::derive(move || {
                        state.get().windows.iter().any(|w| w.app == descriptor.app)
                    });
                    let on_click = move |_| {
                        let host = runtime.host.get_value();
                        host.notify_sound(SoundEvent::ButtonPress);
                        runtime.dispatch_action(DesktopAction::Toggle {
                            request: apps::open_request(descriptor.app),
                            viewport: host.desktop_viewport(),
                        });
                    };
                    let on_hover = move |_| {
                        runtime.host.get_value().notify_sound(SoundEvent::Hover);
                    };

                    view! {
                        <button
                            class="dock-item"
                            title=descriptor.title
                            on:click=on_click
                            on:pointerenter=on_hover
                        >
                            <img src=descriptor.icon alt=descriptor.title />
                            <Show when=move || is_open.get() fallback=|| ()>
                                <span class="dock-indicator" aria-hidden="true"></span>
                            </Show>
                        </button>
                    }
                }
            </For>
        </nav>
    }
}
