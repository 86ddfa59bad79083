// File: crates/demo/src/main.rs
// Summary: Host for the feature chart: loads inputs, makes the explicit render call, writes the element to PNG.
// Usage: feature-chart-demo <context.json | metrics.csv> [feature] [--config <path>] [--out <path>]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use feature_chart::{MetricsTable, PageContext, RenderConfig, FEATURE_CHART_ELEMENT_ID};
use log::info;

const DEFAULT_CONFIG_PATH: &str = "storage/configs/render.json";

struct Args {
    input: PathBuf,
    feature: Option<String>,
    config: PathBuf,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = RenderConfig::load_or_init(&args.config)
        .with_context(|| format!("failed to load config '{}'", args.config.display()))?;

    let context = load_context(&args.input, args.feature.as_deref())?;
    let mut page = config.page();

    let Some(handle) = context.render_if_present(&mut page)? else {
        println!("Nothing to render (chart data or selected feature missing).");
        return Ok(());
    };

    let frame = page
        .element(&handle.element_id)
        .and_then(|el| el.frame())
        .with_context(|| format!("element '{FEATURE_CHART_ELEMENT_ID}' has no rendered frame"))?;
    let out = args.out.unwrap_or_else(|| config.output_path());
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, frame.to_png_bytes()?)
        .with_context(|| format!("failed to write '{}'", out.display()))?;

    let points = handle.config.data.labels.len();
    info!("rendered {points} point(s) into '{}'", handle.element_id);
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut feature = None;
    let mut config = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut out = None;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => config = it.next().map(PathBuf::from).context("--config needs a path")?,
            "--out" => out = Some(it.next().map(PathBuf::from).context("--out needs a path")?),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if feature.is_none() => feature = Some(arg),
            _ => anyhow::bail!("unexpected argument '{arg}'"),
        }
    }

    let input = input.context(
        "usage: feature-chart-demo <context.json | metrics.csv> [feature] [--config <path>] [--out <path>]",
    )?;
    Ok(Args { input, feature, config, out })
}

/// Page context from a JSON file, or built from one feature of a metrics CSV.
fn load_context(input: &Path, feature: Option<&str>) -> Result<PageContext> {
    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "json" => {
            let mut ctx = PageContext::from_json_file(input)
                .with_context(|| format!("failed to load page context '{}'", input.display()))?;
            if let Some(f) = feature {
                ctx.selected_feature = Some(f.to_string());
            }
            Ok(ctx)
        }
        "csv" => {
            let table = MetricsTable::from_path(input)
                .with_context(|| format!("failed to load metrics '{}'", input.display()))?;
            println!("Loaded {} samples from {}", table.len(), input.display());
            let Some(feature) = feature else {
                anyhow::bail!("pick a feature to chart; available: {}", table.features().join(", "));
            };
            let data = table.chart_data(feature)?;
            Ok(PageContext::new(Some(data), Some(feature.to_string())))
        }
        other => anyhow::bail!("unsupported input type '{other}' (expected .json or .csv)"),
    }
}
