use serde::{Deserialize, Serialize};

/// Value of the z-index counter before the first window opens.
pub const Z_COUNTER_START: u32 = 10;
/// Minimum width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 360;
/// Minimum height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 280;
/// Widest a freshly opened desktop window starts out.
pub const DEFAULT_WINDOW_WIDTH: i32 = 680;
/// Tallest a freshly opened desktop window starts out.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;
/// Viewports narrower than this get the full-screen mobile layout.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;
/// Vertical strip reserved for the dock in the mobile layout.
pub const DOCK_RESERVED_PX: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Stable identifier for a registered app.
///
/// Doubles as the window id: the shell keeps at most one window per app, so
/// opening an already-open app restores and raises it instead of duplicating.
pub enum AppId {
    /// About page.
    About,
    /// Project gallery.
    Projects,
    /// Blog index.
    Blog,
    /// Contact card.
    Contact,
    /// Resume viewer.
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-left anchored pixel position.
pub struct Position {
    /// Horizontal offset from the desktop left edge.
    pub x: i32,
    /// Vertical offset from the desktop top edge.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pixel dimensions of a window.
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Floor-clamps both axes to the global window minimum.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop viewport dimensions at the time of a layout decision.
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One open application window.
pub struct WindowRecord {
    /// Owning app; unique within the window list.
    pub app: AppId,
    /// Title-bar label.
    pub title: String,
    /// Icon asset reference, passed through to the render layer unchanged.
    pub icon: String,
    /// Committed top-left position.
    pub position: Position,
    /// Committed dimensions.
    pub size: Size,
    /// Paint-order key; unique across all open windows.
    pub z_index: u32,
    /// Minimized windows stay in the list but leave the visible set.
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Payload for opening (or dock-toggling) a window.
pub struct OpenWindowRequest {
    /// App to open.
    pub app: AppId,
    /// Title-bar label.
    pub title: String,
    /// Icon asset reference.
    pub icon: String,
}

impl OpenWindowRequest {
    /// Builds a request for `app` with the given presentation metadata.
    pub fn new(app: AppId, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            app,
            title: title.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative window list plus the monotonic z-index source.
pub struct DesktopState {
    /// Open windows, including minimized ones.
    pub windows: Vec<WindowRecord>,
    /// Last z-index handed out. Only [`DesktopState::next_z`] advances it.
    pub(crate) z_counter: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            z_counter: Z_COUNTER_START,
        }
    }
}

impl DesktopState {
    /// Hands out the next paint-order key. Values are never reused, which is
    /// what keeps z-indices unique across every operation.
    pub(crate) fn next_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    /// The top-most non-minimized window, or `None` when every window is
    /// minimized or closed. Recomputed on each call, never stored.
    pub fn active_window_id(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.app)
    }

    /// Looks up the window owned by `app`.
    pub fn window(&self, app: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app == app)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer coordinates in viewport space.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-flight title-bar drag. `live` stays session-local until commit.
pub struct DragSession {
    /// Window being dragged.
    pub app: AppId,
    /// Pointer position captured at press time.
    pub pointer_start: PointerPosition,
    /// Window position captured at press time.
    pub origin: Position,
    /// Current live position, updated on every pointer move.
    pub live: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-flight resize from the south-east handle.
pub struct ResizeSession {
    /// Window being resized.
    pub app: AppId,
    /// Pointer position captured at press time.
    pub pointer_start: PointerPosition,
    /// Window size captured at press time.
    pub size_start: Size,
    /// Current live size, updated on every pointer move.
    pub live: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Transient pointer-interaction state. At most one session of each kind
/// exists at a time; both `None` means idle.
pub struct InteractionState {
    /// Active drag session, if any.
    pub dragging: Option<DragSession>,
    /// Active resize session, if any.
    pub resizing: Option<ResizeSession>,
}
