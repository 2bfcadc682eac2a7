//! Desktop shell runtime: the window-management state machine, pointer
//! interaction sessions, and the Leptos components that render them.
//!
//! State transitions flow one way: UI events dispatch a [`DesktopAction`]
//! through [`DesktopProvider`], the reducer mutates the owned
//! [`DesktopState`]/[`InteractionState`], and components re-render from the
//! updated signals. Nothing outside the reducer mutates window state.

pub mod apps;
pub mod components;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::{BootScreen, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
