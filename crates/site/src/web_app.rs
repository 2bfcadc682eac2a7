use leptos::*;
use leptos_meta::*;
use shell_runtime::{BootScreen, DesktopProvider, DesktopShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ayazOS" />
        <Meta
            name="description"
            content="A desktop operating-system shell in the browser, doubling as a personal portfolio."
        />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
/// Shows the boot animation first, then swaps in the desktop. The provider
/// wraps both so the boot chime can use the shared host services.
pub fn DesktopEntry() -> impl IntoView {
    let booted = create_rw_signal(false);

    view! {
        <DesktopProvider>
            <Show
                when=move || booted.get()
                fallback=move || {
                    view! { <BootScreen on_complete=Callback::new(move |_| booted.set(true)) /> }
                }
            >
                <DesktopShell />
            </Show>
        </DesktopProvider>
    }
}
