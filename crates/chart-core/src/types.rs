// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Font size used for tick and legend labels.
pub const FONT_SIZE: f32 = 12.0;
/// Gap between tick labels and the plot area.
pub const TICK_PADDING: f32 = 8.0;
/// Legend box geometry.
pub const LEGEND_BOX_WIDTH: f32 = 40.0;
pub const LEGEND_PADDING: f32 = 10.0;
/// Stroke width of the dataset line.
pub const LINE_WIDTH: f32 = 3.0;
/// Stroke width of the point outline.
pub const POINT_BORDER_WIDTH: f32 = 1.0;

/// Outer layout padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(10)
    }
}
