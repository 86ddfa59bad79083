// File: crates/feature-chart/tests/render.rs
// Purpose: End-to-end feature chart rendering against an in-memory page.

use chart_core::Frame;
use chrono::Utc;
use feature_chart::{
    feature_chart_config, format_timestamp, render_feature_chart, render_feature_chart_in, ChartData, Page,
    PageContext, PageSettings, RenderError, FEATURE_CHART_ELEMENT_ID,
};

fn page() -> Page {
    let settings = PageSettings { draw_labels: false, ..PageSettings::default() };
    Page::with_settings(settings).with_element(FEATURE_CHART_ELEMENT_ID, 240, 160)
}

fn cpu_data() -> ChartData {
    ChartData::new(vec![1_700_000_000.0, 1_700_003_600.0], vec![10.0, 20.0])
}

/// Columns below the legend that contain a pixel of the `#7ecfff` line color.
fn line_columns(frame: &Frame) -> Vec<u32> {
    let near = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 12;
    (0..frame.width)
        .filter(|&x| {
            (60..frame.height).any(|y| {
                frame
                    .pixel(x, y)
                    .map(|[r, g, b, _]| near(r, 126) && near(g, 207) && near(b, 255))
                    .unwrap_or(false)
            })
        })
        .collect()
}

fn widest_gap(columns: &[u32]) -> u32 {
    columns.windows(2).map(|w| w[1] - w[0]).max().unwrap_or(0)
}

#[test]
fn absent_data_is_a_silent_no_op() {
    let mut page = page();
    let handle = render_feature_chart(&mut page, None, "cpu_usage").expect("no error");
    assert!(handle.is_none());

    let el = page.element(FEATURE_CHART_ELEMENT_ID).unwrap();
    assert!(el.chart().is_none());
    assert!(el.frame().is_none());
}

#[test]
fn cpu_usage_scenario() {
    let mut page = page();
    let handle = render_feature_chart(&mut page, Some(&cpu_data()), "cpu_usage")
        .expect("render")
        .expect("chart bound");

    assert_eq!(handle.element_id, "featureChart");
    let data = &handle.config.data;
    assert_eq!(data.datasets.len(), 1);
    assert_eq!(data.datasets[0].label, "cpu_usage");
    assert_eq!(data.datasets[0].data, vec![10.0, 20.0]);
    assert_eq!(data.labels, vec![format_timestamp(1_700_000_000.0), format_timestamp(1_700_003_600.0)]);

    let el = page.element(FEATURE_CHART_ELEMENT_ID).unwrap();
    assert_eq!(el.chart().map(|c| c.config()), Some(&handle.config));
    let frame = el.frame().expect("frame rendered");
    assert_eq!((frame.width, frame.height), (240, 160));
}

#[test]
fn labels_follow_timestamps_in_utc() {
    let mut page = page();
    let handle = render_feature_chart_in(&mut page, Some(&cpu_data()), "cpu_usage", &Utc)
        .unwrap()
        .unwrap();
    assert_eq!(handle.config.data.labels, vec!["11/14/2023, 10:13:20 PM", "11/14/2023, 11:13:20 PM"]);
}

#[test]
fn n_points_give_n_labels_and_values_in_order() {
    for n in [1usize, 3, 17] {
        let timestamps: Vec<f64> = (0..n).map(|i| 1_600_000_000.0 + (n - i) as f64 * 60.0).collect();
        let values: Vec<f64> = (0..n).map(|i| (i * i) as f64 - 4.0).collect();
        let cfg = feature_chart_config(&ChartData::new(timestamps.clone(), values.clone()), "f").unwrap();

        assert_eq!(cfg.data.labels.len(), n);
        assert_eq!(cfg.data.datasets[0].data, values);
        let expected: Vec<String> = timestamps.iter().map(|t| format_timestamp(*t)).collect();
        assert_eq!(cfg.data.labels, expected);
    }
}

#[test]
fn styling_is_fixed_regardless_of_input() {
    let inputs = [
        (ChartData::default(), "empty"),
        (cpu_data(), "cpu_usage"),
        (ChartData::new(vec![0.0; 50], vec![-1e6; 50]), "load_15m"),
    ];
    for (data, feature) in &inputs {
        let cfg = feature_chart_config(data, feature).unwrap();
        let ds = &cfg.data.datasets[0];
        assert_eq!(ds.border_color, "#7ecfff");
        assert_eq!(ds.background_color, "rgba(126,207,255,0.2)");
        assert_eq!(ds.tension, 0.2);
        assert_eq!(ds.point_radius, 2.0);
        assert!(cfg.options.responsive);
        assert_eq!(cfg.options.plugins.legend.labels.color, "#eee");
        assert_eq!(cfg.options.scales.x.ticks.color, "#eee");
        assert_eq!(cfg.options.scales.y.ticks.color, "#eee");
    }
}

#[test]
fn config_serializes_as_chart_description() {
    let cfg = feature_chart_config(&cpu_data(), "cpu_usage").unwrap();
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["type"], "line");
    assert_eq!(v["data"]["datasets"][0]["label"], "cpu_usage");
    assert_eq!(v["data"]["datasets"][0]["borderColor"], "#7ecfff");
    assert_eq!(v["data"]["datasets"][0]["backgroundColor"], "rgba(126,207,255,0.2)");
    assert_eq!(v["data"]["datasets"][0]["tension"], 0.2);
    assert_eq!(v["data"]["datasets"][0]["pointRadius"], 2.0);
    assert_eq!(v["options"]["plugins"]["legend"]["labels"]["color"], "#eee");
    assert_eq!(v["options"]["scales"]["x"]["ticks"]["color"], "#eee");
}

#[test]
fn empty_series_renders_without_crashing() {
    let mut page = page();
    let handle = render_feature_chart(&mut page, Some(&ChartData::default()), "idle")
        .unwrap()
        .unwrap();
    assert!(handle.config.data.labels.is_empty());
    assert!(handle.config.data.datasets[0].data.is_empty());
    assert!(page.element(FEATURE_CHART_ELEMENT_ID).unwrap().frame().is_some());
}

#[test]
fn missing_element_is_reported() {
    let mut page = Page::new().with_element("otherChart", 100, 100);
    let err = render_feature_chart(&mut page, Some(&cpu_data()), "cpu_usage").unwrap_err();
    assert!(matches!(err, RenderError::ElementNotFound(id) if id == "featureChart"));
    assert!(page.element("otherChart").unwrap().chart().is_none());
}

#[test]
fn length_mismatch_fails_fast_and_binds_nothing() {
    let mut page = page();
    let data = ChartData::new(vec![1.0, 2.0, 3.0], vec![1.0]);
    let err = render_feature_chart(&mut page, Some(&data), "cpu_usage").unwrap_err();
    assert!(matches!(err, RenderError::LengthMismatch { timestamps: 3, values: 1 }));
    assert!(page.element(FEATURE_CHART_ELEMENT_ID).unwrap().chart().is_none());
}

#[test]
fn second_render_replaces_the_bound_chart() {
    let mut page = page();
    render_feature_chart(&mut page, Some(&cpu_data()), "cpu_usage").unwrap();
    render_feature_chart(&mut page, Some(&ChartData::new(vec![0.0], vec![1.0])), "load_1m").unwrap();

    let chart = page.element(FEATURE_CHART_ELEMENT_ID).unwrap().chart().unwrap();
    assert_eq!(chart.config().data.datasets.len(), 1);
    assert_eq!(chart.config().data.datasets[0].label, "load_1m");
}

#[test]
fn responsive_chart_follows_element_size() {
    let mut page = page();
    render_feature_chart(&mut page, Some(&cpu_data()), "cpu_usage").unwrap();

    assert!(page.resize(FEATURE_CHART_ELEMENT_ID, 400, 120).unwrap());
    let frame = page.element(FEATURE_CHART_ELEMENT_ID).unwrap().frame().unwrap();
    assert_eq!((frame.width, frame.height), (400, 120));

    assert!(matches!(page.resize("nope", 1, 1), Err(RenderError::ElementNotFound(_))));
}

#[test]
fn page_context_renders_only_when_complete() {
    let mut page = page();

    let partial = PageContext::new(Some(cpu_data()), None);
    assert!(partial.render_if_present(&mut page).unwrap().is_none());
    let partial = PageContext::new(None, Some("cpu_usage".into()));
    assert!(partial.render_if_present(&mut page).unwrap().is_none());
    assert!(page.element(FEATURE_CHART_ELEMENT_ID).unwrap().chart().is_none());

    let full = PageContext::new(Some(cpu_data()), Some("cpu_usage".into()));
    let handle = full.render_if_present(&mut page).unwrap().unwrap();
    assert_eq!(handle.config.data.datasets[0].label, "cpu_usage");
}

#[test]
fn extreme_finite_values_render() {
    let mut page = page();
    let data = ChartData::new(vec![0.0, 60.0, 120.0], vec![-1e308, 0.0, 1e308]);
    let handle = render_feature_chart(&mut page, Some(&data), "uptime_sec").unwrap();
    assert!(handle.is_some());
    let frame = page.element(FEATURE_CHART_ELEMENT_ID).unwrap().frame().unwrap();
    assert_eq!((frame.width, frame.height), (240, 160));
}

#[test]
fn null_sample_breaks_the_line() {
    let render = |values: &str| {
        let json = format!(
            r#"{{"chartData": {{"timestamps": [0, 60, 120, 180, 240], "values": {values}}}, "selectedFeature": "cpu_usage"}}"#
        );
        let mut page = page();
        PageContext::from_json_str(&json).unwrap().render_if_present(&mut page).unwrap().unwrap();
        let frame = page.element(FEATURE_CHART_ELEMENT_ID).unwrap().frame().unwrap().clone();
        frame
    };

    let solid = line_columns(&render("[1, 2, 2.5, 3, 4]"));
    assert!(!solid.is_empty());
    assert!(widest_gap(&solid) < 8, "continuous line has a hole");

    let gapped = line_columns(&render("[1, 2, null, 3, 4]"));
    assert!(!gapped.is_empty());
    assert!(widest_gap(&gapped) > 40, "line was drawn across the missing sample");
}

#[test]
fn failed_resize_keeps_the_previous_size_and_frame() {
    let mut page = page();
    render_feature_chart(&mut page, Some(&cpu_data()), "cpu_usage").unwrap();

    let err = page.resize(FEATURE_CHART_ELEMENT_ID, 100_000, 100_000).unwrap_err();
    assert!(matches!(err, RenderError::Chart(_)));

    let el = page.element(FEATURE_CHART_ELEMENT_ID).unwrap();
    assert_eq!((el.width(), el.height()), (240, 160));
    let frame = el.frame().unwrap();
    assert_eq!((frame.width, frame.height), (240, 160));
}
