// File: crates/chart-core/src/lib.rs
// Summary: Chart engine entry point; exports the config model and the headless renderer.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod theme;
pub mod types;

pub use axis::{AxisOptions, ScalesOptions, TickOptions};
pub use chart::{Chart, Frame, RenderOptions};
pub use color::parse_css_color;
pub use config::{ChartConfig, ChartOptions, ChartType, LegendOptions, LineData, LineDataset};
pub use error::ChartError;
pub use theme::Theme;
