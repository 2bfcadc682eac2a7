//! Window-manager transition helpers used by the desktop reducer.
//!
//! Every helper is total: operations that reference an app with no matching
//! window are no-ops, never errors. Stale UI events (a close click racing
//! the Escape shortcut, a late dock toggle) are expected input.

use crate::model::{
    AppId, DesktopState, OpenWindowRequest, Position, Size, Viewport, WindowRecord,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, DOCK_RESERVED_PX, MOBILE_BREAKPOINT_PX,
};

/// Computes where a newly opened window goes and how big it starts.
///
/// Narrow viewports get a full-screen window above the dock strip. Desktop
/// viewports get a cascading stagger keyed on the number of windows open at
/// creation time, wrapping every five so the cascade never walks off screen.
pub fn default_placement(viewport: Viewport, open_count: usize) -> (Position, Size) {
    if viewport.width < MOBILE_BREAKPOINT_PX {
        return (
            Position { x: 0, y: 0 },
            Size {
                width: viewport.width,
                height: viewport.height - DOCK_RESERVED_PX,
            },
        );
    }

    let offset = ((open_count % 5) as i32) * 30;
    (
        Position {
            x: 120 + offset,
            y: 60 + offset,
        },
        Size {
            width: DEFAULT_WINDOW_WIDTH.min(viewport.width - 40),
            height: DEFAULT_WINDOW_HEIGHT.min(viewport.height - 120),
        },
    )
}

/// Opens `request.app`, or restores and raises it when already open.
///
/// Re-opening always takes a fresh top z-index, even when the window is
/// already on top.
pub fn open_window(state: &mut DesktopState, request: OpenWindowRequest, viewport: Viewport) {
    if state.windows.iter().any(|w| w.app == request.app) {
        focus_window(state, request.app);
        return;
    }

    let (position, size) = default_placement(viewport, state.windows.len());
    let z_index = state.next_z();
    state.windows.push(WindowRecord {
        app: request.app,
        title: request.title,
        icon: request.icon,
        position,
        size,
        z_index,
        minimized: false,
    });
}

/// Removes the window owned by `app`. Closing twice is a no-op the second
/// time.
pub fn close_window(state: &mut DesktopState, app: AppId) {
    state.windows.retain(|w| w.app != app);
}

/// Hides the window from the visible set while preserving its position,
/// size, and z-index for later restoration.
pub fn minimize_window(state: &mut DesktopState, app: AppId) {
    if let Some(window) = find_window_mut(state, app) {
        window.minimized = true;
    }
}

/// Raises the window to a fresh top z-index and clears `minimized`.
pub fn focus_window(state: &mut DesktopState, app: AppId) {
    if state.windows.iter().any(|w| w.app == app) {
        let z_index = state.next_z();
        if let Some(window) = find_window_mut(state, app) {
            window.z_index = z_index;
            window.minimized = false;
        }
    }
}

/// Dock-click semantics: open when absent, restore when minimized, minimize
/// when already the active window, otherwise raise to the top.
///
/// The "already on top" check is scoped to visible windows (it compares
/// against [`DesktopState::active_window_id`]), so a minimized window
/// holding a stale top z-index never blocks the raise branch.
pub fn toggle_window(state: &mut DesktopState, request: OpenWindowRequest, viewport: Viewport) {
    let Some(existing) = state.windows.iter().find(|w| w.app == request.app) else {
        open_window(state, request, viewport);
        return;
    };

    if existing.minimized {
        focus_window(state, request.app);
    } else if state.active_window_id() == Some(request.app) {
        minimize_window(state, request.app);
    } else {
        focus_window(state, request.app);
    }
}

/// Replaces the committed position. Used by the drag session on release.
pub fn update_position(state: &mut DesktopState, app: AppId, position: Position) {
    if let Some(window) = find_window_mut(state, app) {
        window.position = position;
    }
}

/// Replaces the committed size. The resize session pre-clamps to the window
/// minimum; no re-validation happens here.
pub fn update_size(state: &mut DesktopState, app: AppId, size: Size) {
    if let Some(window) = find_window_mut(state, app) {
        window.size = size;
    }
}

/// Closes the active window, if any. Bound to the Escape shortcut.
pub fn close_active_window(state: &mut DesktopState) {
    if let Some(app) = state.active_window_id() {
        close_window(state, app);
    }
}

fn find_window_mut(state: &mut DesktopState, app: AppId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.app == app)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    fn request(app: AppId) -> OpenWindowRequest {
        OpenWindowRequest::new(app, "Window", "/assets/icons/window.png")
    }

    fn open(state: &mut DesktopState, app: AppId) {
        open_window(state, request(app), VIEWPORT);
    }

    fn z_of(state: &DesktopState, app: AppId) -> u32 {
        state.window(app).expect("window").z_index
    }

    #[test]
    fn open_creates_single_visible_window_on_top() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);

        assert_eq!(state.windows.len(), 1);
        assert!(!state.windows[0].minimized);
        assert_eq!(state.active_window_id(), Some(AppId::About));
    }

    #[test]
    fn reopening_does_not_duplicate_but_still_raises() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        let first_z = z_of(&state, AppId::About);

        open(&mut state, AppId::About);

        assert_eq!(state.windows.len(), 1);
        assert!(z_of(&state, AppId::About) > first_z);
    }

    #[test]
    fn reopening_restores_a_minimized_window() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Blog);
        minimize_window(&mut state, AppId::Blog);

        open(&mut state, AppId::Blog);

        assert!(!state.window(AppId::Blog).unwrap().minimized);
        assert_eq!(state.active_window_id(), Some(AppId::Blog));
    }

    #[test]
    fn z_indices_stay_unique_across_operation_sequences() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);
        open(&mut state, AppId::Blog);
        focus_window(&mut state, AppId::About);
        minimize_window(&mut state, AppId::Projects);
        toggle_window(&mut state, request(AppId::Projects), VIEWPORT);
        open(&mut state, AppId::Blog);
        close_window(&mut state, AppId::About);
        open(&mut state, AppId::Contact);

        let zs: HashSet<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(zs.len(), state.windows.len());
    }

    #[test]
    fn focus_raises_without_touching_other_windows() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);
        let projects_z = z_of(&state, AppId::Projects);

        focus_window(&mut state, AppId::About);

        assert!(z_of(&state, AppId::About) > projects_z);
        assert_eq!(z_of(&state, AppId::Projects), projects_z);
        assert_eq!(state.active_window_id(), Some(AppId::About));
    }

    #[test]
    fn active_window_ignores_minimized_windows() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);

        minimize_window(&mut state, AppId::Projects);
        assert_eq!(state.active_window_id(), Some(AppId::About));

        minimize_window(&mut state, AppId::About);
        assert_eq!(state.active_window_id(), None);
    }

    #[test]
    fn double_close_is_a_noop_the_second_time() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Resume);

        close_window(&mut state, AppId::Resume);
        let after_first = state.clone();
        close_window(&mut state, AppId::Resume);

        assert_eq!(state, after_first);
    }

    #[test]
    fn operations_on_unknown_apps_are_noops() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        let before = state.clone();

        minimize_window(&mut state, AppId::Blog);
        focus_window(&mut state, AppId::Blog);
        update_position(&mut state, AppId::Blog, Position { x: 5, y: 5 });
        update_size(
            &mut state,
            AppId::Blog,
            Size {
                width: 500,
                height: 500,
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_cycles_open_minimize_restore() {
        let mut state = DesktopState::default();

        toggle_window(&mut state, request(AppId::Blog), VIEWPORT);
        let opened = state.window(AppId::Blog).unwrap().clone();
        assert!(!opened.minimized);
        let z1 = opened.z_index;

        // Top-most and visible: dock click minimizes, geometry untouched.
        toggle_window(&mut state, request(AppId::Blog), VIEWPORT);
        let minimized = state.window(AppId::Blog).unwrap();
        assert!(minimized.minimized);
        assert_eq!(minimized.position, opened.position);
        assert_eq!(minimized.size, opened.size);

        toggle_window(&mut state, request(AppId::Blog), VIEWPORT);
        let restored = state.window(AppId::Blog).unwrap();
        assert!(!restored.minimized);
        assert!(restored.z_index > z1);
    }

    #[test]
    fn toggle_raises_a_visible_non_top_window_without_minimizing() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);

        toggle_window(&mut state, request(AppId::About), VIEWPORT);

        let about = state.window(AppId::About).unwrap();
        assert!(!about.minimized);
        assert_eq!(state.active_window_id(), Some(AppId::About));
    }

    #[test]
    fn toggle_ignores_stale_top_z_held_by_a_minimized_window() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);
        // Projects holds the overall maximum z-index but is minimized.
        minimize_window(&mut state, AppId::Projects);

        // About is the active window, so toggling it minimizes.
        toggle_window(&mut state, request(AppId::About), VIEWPORT);
        assert!(state.window(AppId::About).unwrap().minimized);
    }

    #[test]
    fn close_active_closes_top_most_visible_window_only() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::About);
        open(&mut state, AppId::Projects);

        close_active_window(&mut state);
        assert!(state.window(AppId::Projects).is_none());
        assert_eq!(state.active_window_id(), Some(AppId::About));

        close_active_window(&mut state);
        close_active_window(&mut state);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn desktop_placement_cascades_and_wraps_every_five() {
        let (first, size) = default_placement(VIEWPORT, 0);
        assert_eq!(first, Position { x: 120, y: 60 });
        assert_eq!(
            size,
            Size {
                width: 680,
                height: 480,
            }
        );

        let (third, _) = default_placement(VIEWPORT, 2);
        assert_eq!(third, Position { x: 180, y: 120 });

        let (wrapped, _) = default_placement(VIEWPORT, 5);
        assert_eq!(wrapped, first);
    }

    #[test]
    fn small_viewports_shrink_the_default_size() {
        let (_, size) = default_placement(
            Viewport {
                width: 900,
                height: 540,
            },
            0,
        );
        assert_eq!(
            size,
            Size {
                width: 680,
                height: 420,
            }
        );
    }

    #[test]
    fn mobile_placement_fills_viewport_above_the_dock() {
        let viewport = Viewport {
            width: 420,
            height: 900,
        };
        let (position, size) = default_placement(viewport, 3);

        assert_eq!(position, Position { x: 0, y: 0 });
        assert_eq!(
            size,
            Size {
                width: 420,
                height: 830,
            }
        );
    }
}
