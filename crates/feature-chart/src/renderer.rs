// File: crates/feature-chart/src/renderer.rs
// Summary: Builds the fixed-style feature line chart and binds it to the `featureChart` element.

use std::fmt::Display;

use chart_core::{AxisOptions, Chart, ChartConfig, ChartOptions, LineData, LineDataset};
use chrono::{Local, TimeZone};
use log::debug;

use crate::data::ChartData;
use crate::error::RenderError;
use crate::labels::timestamp_labels_in;
use crate::page::Page;

/// Id of the page element the feature chart renders into.
pub const FEATURE_CHART_ELEMENT_ID: &str = "featureChart";

pub const LINE_COLOR: &str = "#7ecfff";
pub const FILL_COLOR: &str = "rgba(126,207,255,0.2)";
pub const LINE_TENSION: f64 = 0.2;
pub const POINT_RADIUS: f64 = 2.0;
/// Legend and tick label color.
pub const TEXT_COLOR: &str = "#eee";

/// What was rendered, and where.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartHandle {
    pub element_id: String,
    pub config: ChartConfig,
}

/// Chart config for `selected_feature`, labels in the host's local timezone.
pub fn feature_chart_config(data: &ChartData, selected_feature: &str) -> Result<ChartConfig, RenderError> {
    feature_chart_config_in(data, selected_feature, &Local)
}

pub fn feature_chart_config_in<Tz>(
    data: &ChartData,
    selected_feature: &str,
    tz: &Tz,
) -> Result<ChartConfig, RenderError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    data.check_aligned()?;

    let dataset = LineDataset::new(selected_feature, data.values.clone())
        .border_color(LINE_COLOR)
        .background_color(FILL_COLOR)
        .tension(LINE_TENSION)
        .point_radius(POINT_RADIUS);

    let mut options = ChartOptions { responsive: true, ..ChartOptions::default() };
    options.plugins.legend.labels.color = TEXT_COLOR.to_string();
    options.scales.x = AxisOptions::with_tick_color(TEXT_COLOR);
    options.scales.y = AxisOptions::with_tick_color(TEXT_COLOR);

    Ok(ChartConfig::line(
        LineData { labels: timestamp_labels_in(&data.timestamps, tz), datasets: vec![dataset] },
        options,
    ))
}

/// Draw `selected_feature` over time into the page's `featureChart` element.
/// Absent `chart_data` is a silent no-op and leaves the page untouched.
pub fn render_feature_chart(
    page: &mut Page,
    chart_data: Option<&ChartData>,
    selected_feature: &str,
) -> Result<Option<ChartHandle>, RenderError> {
    render_feature_chart_in(page, chart_data, selected_feature, &Local)
}

pub fn render_feature_chart_in<Tz>(
    page: &mut Page,
    chart_data: Option<&ChartData>,
    selected_feature: &str,
    tz: &Tz,
) -> Result<Option<ChartHandle>, RenderError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(data) = chart_data else {
        debug!("no chart data for '{selected_feature}'; skipping render");
        return Ok(None);
    };

    // Fail before building anything if there is nowhere to draw.
    if page.element(FEATURE_CHART_ELEMENT_ID).is_none() {
        return Err(RenderError::ElementNotFound(FEATURE_CHART_ELEMENT_ID.to_string()));
    }

    let config = feature_chart_config_in(data, selected_feature, tz)?;
    let chart = Chart::new(config.clone())?;
    page.bind_chart(FEATURE_CHART_ELEMENT_ID, chart)?;

    Ok(Some(ChartHandle { element_id: FEATURE_CHART_ELEMENT_ID.to_string(), config }))
}
