//! Pointer-tracking sessions for window drag and resize.
//!
//! Each session is a small idle -> tracking -> idle machine. Tracking starts
//! on a primary-button press (enforced where the pointer event arrives, in
//! the component layer), recomputes a session-local live value on every
//! pointer move, and ends one of two ways: release commits the final live
//! value to the window manager exactly once, cancellation (pointer-cancel or
//! shell teardown) discards it. Either way the authoritative state only ever
//! reflects explicit commits.

use crate::model::{AppId, DesktopState, InteractionState, PointerPosition, Position, Size};
use crate::window_manager;

/// Starts a drag session for `app`, capturing the pointer and the committed
/// window position. No-op when the window does not exist or a drag is
/// already in flight.
pub fn begin_drag(
    interaction: &mut InteractionState,
    state: &DesktopState,
    app: AppId,
    pointer: PointerPosition,
) {
    if interaction.dragging.is_some() {
        return;
    }
    let Some(window) = state.window(app) else {
        return;
    };
    interaction.dragging = Some(crate::model::DragSession {
        app,
        pointer_start: pointer,
        origin: window.position,
        live: window.position,
    });
}

/// Recomputes the live drag position from the pointer delta. The vertical
/// axis clamps at the desktop top edge; the horizontal axis is unclamped.
pub fn update_drag(interaction: &mut InteractionState, pointer: PointerPosition) {
    if let Some(session) = interaction.dragging.as_mut() {
        let dx = pointer.x - session.pointer_start.x;
        let dy = pointer.y - session.pointer_start.y;
        session.live = Position {
            x: session.origin.x + dx,
            y: (session.origin.y + dy).max(0),
        };
    }
}

/// Commits the final drag position and returns to idle.
pub fn end_drag(interaction: &mut InteractionState, state: &mut DesktopState) {
    if let Some(session) = interaction.dragging.take() {
        window_manager::update_position(state, session.app, session.live);
    }
}

/// Drops the drag session without committing. The window keeps whatever
/// position was last committed.
pub fn cancel_drag(interaction: &mut InteractionState) {
    interaction.dragging = None;
}

/// Starts a resize session for `app`, capturing the pointer and the
/// committed window size. No-op when the window does not exist or a resize
/// is already in flight.
pub fn begin_resize(
    interaction: &mut InteractionState,
    state: &DesktopState,
    app: AppId,
    pointer: PointerPosition,
) {
    if interaction.resizing.is_some() {
        return;
    }
    let Some(window) = state.window(app) else {
        return;
    };
    interaction.resizing = Some(crate::model::ResizeSession {
        app,
        pointer_start: pointer,
        size_start: window.size,
        live: window.size,
    });
}

/// Recomputes the live size from the pointer delta, floor-clamped to the
/// window minimum. There is no maximum clamp.
pub fn update_resize(interaction: &mut InteractionState, pointer: PointerPosition) {
    if let Some(session) = interaction.resizing.as_mut() {
        let dx = pointer.x - session.pointer_start.x;
        let dy = pointer.y - session.pointer_start.y;
        session.live = Size {
            width: session.size_start.width + dx,
            height: session.size_start.height + dy,
        }
        .clamped_min();
    }
}

/// Commits the final size and returns to idle.
pub fn end_resize(interaction: &mut InteractionState, state: &mut DesktopState) {
    if let Some(session) = interaction.resizing.take() {
        window_manager::update_size(state, session.app, session.live);
    }
}

/// Drops the resize session without committing.
pub fn cancel_resize(interaction: &mut InteractionState) {
    interaction.resizing = None;
}
