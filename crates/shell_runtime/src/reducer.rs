//! Reducer actions and the single dispatch point for desktop state
//! transitions.

use crate::interaction;
use crate::model::{
    AppId, DesktopState, InteractionState, OpenWindowRequest, PointerPosition, Position, Size,
    Viewport,
};
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`] and
/// [`InteractionState`].
///
/// Every action is total: referencing an app with no matching window is a
/// defined no-op, never an error.
pub enum DesktopAction {
    /// Open a window, or restore and raise it when already open.
    Open {
        /// App identity plus presentation metadata.
        request: OpenWindowRequest,
        /// Viewport used for default placement.
        viewport: Viewport,
    },
    /// Close a window.
    Close {
        /// Window to close.
        app: AppId,
    },
    /// Minimize a window, preserving its geometry and z-index.
    Minimize {
        /// Window to minimize.
        app: AppId,
    },
    /// Raise a window to the top and clear `minimized`.
    Focus {
        /// Window to focus.
        app: AppId,
    },
    /// Dock-click semantics: open, restore, minimize-if-active, or raise.
    Toggle {
        /// App identity plus presentation metadata.
        request: OpenWindowRequest,
        /// Viewport used for default placement when opening.
        viewport: Viewport,
    },
    /// Replace a window's committed position.
    UpdatePosition {
        /// Window to reposition.
        app: AppId,
        /// New top-left position.
        position: Position,
    },
    /// Replace a window's committed size.
    UpdateSize {
        /// Window to resize.
        app: AppId,
        /// New dimensions, already clamped by the caller.
        size: Size,
    },
    /// Close the active window (Escape shortcut).
    CloseActive,
    /// Begin a title-bar drag session.
    BeginDrag {
        /// Window being dragged.
        app: AppId,
        /// Pointer position at press time.
        pointer: PointerPosition,
    },
    /// Update the in-flight drag from the current pointer position.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the drag, committing the final live position.
    EndDrag,
    /// Abandon the drag without committing.
    CancelDrag,
    /// Begin a resize session from the south-east handle.
    BeginResize {
        /// Window being resized.
        app: AppId,
        /// Pointer position at press time.
        pointer: PointerPosition,
    },
    /// Update the in-flight resize from the current pointer position.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the resize, committing the final live size.
    EndResize,
    /// Abandon the resize without committing.
    CancelResize,
}

/// Applies a [`DesktopAction`] to the desktop state.
///
/// This is the authoritative transition engine: all window-list and
/// interaction-session mutations funnel through here, synchronously and
/// atomically from the caller's perspective.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) {
    match action {
        DesktopAction::Open { request, viewport } => {
            window_manager::open_window(state, request, viewport);
        }
        DesktopAction::Close { app } => {
            window_manager::close_window(state, app);
        }
        DesktopAction::Minimize { app } => {
            window_manager::minimize_window(state, app);
        }
        DesktopAction::Focus { app } => {
            window_manager::focus_window(state, app);
        }
        DesktopAction::Toggle { request, viewport } => {
            window_manager::toggle_window(state, request, viewport);
        }
        DesktopAction::UpdatePosition { app, position } => {
            window_manager::update_position(state, app, position);
        }
        DesktopAction::UpdateSize { app, size } => {
            window_manager::update_size(state, app, size);
        }
        DesktopAction::CloseActive => {
            window_manager::close_active_window(state);
        }
        DesktopAction::BeginDrag { app, pointer } => {
            interaction::begin_drag(interaction, state, app, pointer);
        }
        DesktopAction::UpdateDrag { pointer } => {
            interaction::update_drag(interaction, pointer);
        }
        DesktopAction::EndDrag => {
            interaction::end_drag(interaction, state);
        }
        DesktopAction::CancelDrag => {
            interaction::cancel_drag(interaction);
        }
        DesktopAction::BeginResize { app, pointer } => {
            interaction::begin_resize(interaction, state, app, pointer);
        }
        DesktopAction::UpdateResize { pointer } => {
            interaction::update_resize(interaction, pointer);
        }
        DesktopAction::EndResize => {
            interaction::end_resize(interaction, state);
        }
        DesktopAction::CancelResize => {
            interaction::cancel_resize(interaction);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    fn dispatch(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action);
    }

    fn request(app: AppId) -> OpenWindowRequest {
        OpenWindowRequest::new(app, "Window", "/assets/icons/window.png")
    }

    #[test]
    fn full_drag_sequence_through_the_reducer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::About),
                viewport: VIEWPORT,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePosition {
                app: AppId::About,
                position: Position { x: 100, y: 100 },
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app: AppId::About,
                pointer: PointerPosition { x: 150, y: 150 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 150, y: 40 },
            },
        );

        // The committed position does not move while tracking.
        assert_eq!(
            state.window(AppId::About).unwrap().position,
            Position { x: 100, y: 100 }
        );

        dispatch(&mut state, &mut interaction, DesktopAction::EndDrag);
        assert_eq!(
            state.window(AppId::About).unwrap().position,
            Position { x: 100, y: 0 }
        );
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn cancel_drag_discards_the_live_value() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::Projects),
                viewport: VIEWPORT,
            },
        );
        let committed = state.window(AppId::Projects).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                app: AppId::Projects,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::CancelDrag);

        assert_eq!(state.window(AppId::Projects).unwrap().position, committed);
    }

    #[test]
    fn resize_sequence_commits_the_clamped_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::Resume),
                viewport: VIEWPORT,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app: AppId::Resume,
                pointer: PointerPosition { x: 600, y: 600 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 100, y: 100 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndResize);

        assert_eq!(
            state.window(AppId::Resume).unwrap().size,
            Size {
                width: 360,
                height: 280,
            }
        );
    }

    #[test]
    fn escape_close_active_tolerates_an_empty_desktop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, DesktopAction::CloseActive);
        assert_eq!(state, DesktopState::default());

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::Contact),
                viewport: VIEWPORT,
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::CloseActive);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn focus_scenario_raises_a_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::About),
                viewport: VIEWPORT,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Open {
                request: request(AppId::Projects),
                viewport: VIEWPORT,
            },
        );
        let b_z = state.window(AppId::Projects).unwrap().z_index;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::Focus { app: AppId::About },
        );

        assert!(state.window(AppId::About).unwrap().z_index > b_z);
        assert_eq!(state.window(AppId::Projects).unwrap().z_index, b_z);
        assert_eq!(state.active_window_id(), Some(AppId::About));
    }
}
