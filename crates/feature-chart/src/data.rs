// File: crates/feature-chart/src/data.rs
// Summary: Chart inputs (timestamps + values) and the page context that carries them.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InputError, RenderError};
use crate::page::Page;
use crate::renderer::{render_feature_chart, ChartHandle};

/// Feature values over time. `timestamps` are Unix epoch seconds.
/// Contract: both sequences have the same length; checked before rendering.
/// A missing sample is `NaN` (JSON `null`) and leaves a gap in the line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub timestamps: Vec<f64>,
    #[serde(deserialize_with = "values_with_gaps")]
    pub values: Vec<f64>,
}

fn values_with_gaps<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let samples = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(samples.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

impl ChartData {
    pub fn new(timestamps: Vec<f64>, values: Vec<f64>) -> Self {
        Self { timestamps, values }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty() && self.values.is_empty()
    }

    pub fn check_aligned(&self) -> Result<(), RenderError> {
        if self.timestamps.len() != self.values.len() {
            return Err(RenderError::LengthMismatch {
                timestamps: self.timestamps.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }
}

/// Inputs a host page hands over before rendering: `{"chartData": ..., "selectedFeature": ...}`.
/// Either key may be missing or null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    #[serde(default)]
    pub chart_data: Option<ChartData>,
    #[serde(default)]
    pub selected_feature: Option<String>,
}

impl PageContext {
    pub fn new(chart_data: Option<ChartData>, selected_feature: Option<String>) -> Self {
        Self { chart_data, selected_feature }
    }

    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(InputError::io(path))?;
        Self::from_json_str(&text)
    }

    /// Render the feature chart once if both inputs are present; otherwise do nothing.
    pub fn render_if_present(&self, page: &mut Page) -> Result<Option<ChartHandle>, RenderError> {
        match (&self.chart_data, &self.selected_feature) {
            (Some(data), Some(feature)) => render_feature_chart(page, Some(data), feature),
            (data, feature) => {
                debug!(
                    "page context incomplete (chart data: {}, selected feature: {}); nothing to render",
                    data.is_some(),
                    feature.is_some()
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_context() {
        let ctx = PageContext::from_json_str(
            r#"{"chartData": {"timestamps": [1700000000, 1700003600], "values": [10, 20.5]}, "selectedFeature": "cpu_usage"}"#,
        )
        .unwrap();
        let data = ctx.chart_data.unwrap();
        assert_eq!(data.timestamps, vec![1_700_000_000.0, 1_700_003_600.0]);
        assert_eq!(data.values, vec![10.0, 20.5]);
        assert_eq!(ctx.selected_feature.as_deref(), Some("cpu_usage"));
    }

    #[test]
    fn null_samples_become_gaps() {
        let ctx = PageContext::from_json_str(
            r#"{"chartData": {"timestamps": [1, 2, 3], "values": [12.5, null, 7]}, "selectedFeature": "cpu_usage"}"#,
        )
        .unwrap();
        let values = ctx.chart_data.unwrap().values;
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 12.5);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 7.0);

        let data = ChartData::new(vec![1.0, 2.0], vec![f64::NAN, 3.0]);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"timestamps":[1.0,2.0],"values":[null,3.0]}"#);
    }

    #[test]
    fn null_and_missing_keys_are_absent() {
        let ctx = PageContext::from_json_str(r#"{"chartData": null}"#).unwrap();
        assert_eq!(ctx, PageContext::default());
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        assert!(matches!(
            PageContext::from_json_str(r#"{"chartData": {"timestamps": "soon"}}"#),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn alignment_check_reports_both_lengths() {
        assert!(ChartData::new(vec![1.0], vec![2.0]).check_aligned().is_ok());
        let err = ChartData::new(vec![1.0, 2.0], vec![3.0]).check_aligned().unwrap_err();
        assert!(matches!(err, RenderError::LengthMismatch { timestamps: 2, values: 1 }));
    }
}
