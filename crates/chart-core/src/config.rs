// File: crates/chart-core/src/config.rs
// Summary: `{type, data, options}` chart configuration model.
// Notes:
// - Field names serialize in camelCase (`borderColor`, `pointRadius`, ...) so a
//   config can be dumped or loaded as the familiar JSON chart description.
// - Colors stay as CSS strings here; they are parsed once in `Chart::new`.

use serde::{Deserialize, Serialize};

use crate::axis::{ScalesOptions, DEFAULT_TEXT_COLOR};

const DEFAULT_DATASET_COLOR: &str = "rgba(0,0,0,0.1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    /// Bezier curve tension; 0 draws straight segments.
    pub tension: f64,
    pub point_radius: f64,
    /// Fill the area between the line and the bottom of the plot.
    #[serde(default, skip_serializing_if = "is_false")]
    pub fill: bool,
}

fn is_false(v: &bool) -> bool { !*v }

impl LineDataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: DEFAULT_DATASET_COLOR.to_string(),
            background_color: DEFAULT_DATASET_COLOR.to_string(),
            tension: 0.0,
            point_radius: 3.0,
            fill: false,
        }
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    /// X axis category labels, paired positionally with dataset values.
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLabels {
    pub color: String,
}

impl Default for LegendLabels {
    fn default() -> Self {
        Self { color: DEFAULT_TEXT_COLOR.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub display: bool,
    pub labels: LegendLabels,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { display: true, labels: LegendLabels::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Re-render when the hosting element is resized.
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: ScalesOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { responsive: true, plugins: PluginOptions::default(), scales: ScalesOptions::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: LineData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn line(data: LineData, options: ChartOptions) -> Self {
        Self { chart_type: ChartType::Line, data, options }
    }

    /// Number of x positions: the label count, or the longest dataset if longer.
    pub fn category_count(&self) -> usize {
        self.data
            .datasets
            .iter()
            .map(|d| d.data.len())
            .fold(self.data.labels.len(), usize::max)
    }
}
