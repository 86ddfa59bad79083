// File: crates/feature-chart/src/lib.rs
// Summary: Feature chart entry point; renders one feature's values over time into the `featureChart` element.

pub mod config;
pub mod data;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod page;
pub mod renderer;

pub use config::RenderConfig;
pub use data::{ChartData, PageContext};
pub use error::{InputError, RenderError};
pub use labels::{format_timestamp, format_timestamp_in, timestamp_labels, timestamp_labels_in};
pub use metrics::MetricsTable;
pub use page::{Element, Page, PageSettings};
pub use renderer::{
    feature_chart_config, feature_chart_config_in, render_feature_chart, render_feature_chart_in,
    ChartHandle, FEATURE_CHART_ELEMENT_ID,
};
