//! Shared numeric constants for the canvas crate.

// ── Gestures ────────────────────────────────────────────────────

/// Pointer displacement in device pixels that promotes a press into a drag.
///
/// Below this a pointer-down/up pair reads as a click (select, or the
/// prelude to a double-click edit), never as a move.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Stacking order applied to the element being dragged, cleared on release.
pub const DRAG_Z_INDEX: &str = "100";

// ── Overlay ─────────────────────────────────────────────────────

/// Interval between overlay geometry polls, in milliseconds (~60 Hz).
pub const OVERLAY_POLL_INTERVAL_MS: u64 = 16;

/// Radius of the overlay's corner handles, in screen pixels.
pub const OVERLAY_HANDLE_RADIUS_PX: f64 = 6.0;

// ── Stage ───────────────────────────────────────────────────────

/// Width of the 16:9 slide stage in CSS pixels.
pub const STAGE_WIDTH_PX: f64 = 960.0;

/// Height of the 16:9 slide stage in CSS pixels.
pub const STAGE_HEIGHT_PX: f64 = 540.0;
