// File: crates/chart-core/src/axis.rs
// Summary: Per-axis options (tick styling, visibility) for the x and y scales.

use serde::{Deserialize, Serialize};

/// Default text color for ticks and legend labels.
pub const DEFAULT_TEXT_COLOR: &str = "#666";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOptions {
    pub color: String,
    pub display: bool,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self { color: DEFAULT_TEXT_COLOR.to_string(), display: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub ticks: TickOptions,
}

impl AxisOptions {
    pub fn with_tick_color(color: impl Into<String>) -> Self {
        Self { ticks: TickOptions { color: color.into(), ..TickOptions::default() } }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalesOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}
