//! Runtime provider and context wiring for the desktop shell.
//!
//! [`DesktopProvider`] owns the reducer container: the desktop session's
//! window list and interaction sessions live in its signals and are created
//! when the provider mounts, reset only on a full reload. Consumers receive
//! the context handle explicitly; there are no module-level singletons.

use leptos::*;

use crate::{
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching
/// [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for sound feedback and viewport queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop window state.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/resize interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Host service bundle; defaults to the browser adapters.
    #[prop(optional)]
    host_context: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_context.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut sessions = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_sessions = sessions;

        reduce_desktop(&mut desktop, &mut sessions, action);

        // Only touch the signals that actually changed, so drag-move bursts
        // do not re-render the whole window list.
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if sessions != previous_sessions {
            interaction.set(sessions);
        }
    });

    provide_context(DesktopRuntimeContext {
        host,
        state,
        interaction,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
