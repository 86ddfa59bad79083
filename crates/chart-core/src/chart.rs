// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;

use skia_safe as skia;

use crate::color::parse_css_color;
use crate::config::{ChartConfig, LineDataset};
use crate::curve::{cap_to_area, spline_controls};
use crate::error::ChartError;
use crate::geometry::PlotArea;
use crate::scale::{data_range, format_tick, nice_ticks, CategoryScale, LinearTicks, ValueScale};
use crate::theme::Theme;
use crate::types::{
    Insets, FONT_SIZE, HEIGHT, LEGEND_BOX_WIDTH, LEGEND_PADDING, LINE_WIDTH, POINT_BORDER_WIDTH,
    TICK_PADDING, WIDTH,
};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick and legend text. Disable for pixel-exact snapshots.
    pub draw_labels: bool,
    pub device_pixel_ratio: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            device_pixel_ratio: 1.0,
        }
    }
}

impl RenderOptions {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

/// Rendered RGBA8 (unpremultiplied) pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl Frame {
    /// RGBA of one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ChartError> {
        let mut out = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut out,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        Ok(out.into_inner())
    }
}

struct DatasetPaint {
    border: skia::Color,
    background: skia::Color,
}

struct ResolvedStyle {
    legend_text: skia::Color,
    x_ticks: skia::Color,
    y_ticks: skia::Color,
    datasets: Vec<DatasetPaint>,
}

/// A validated chart: the config plus its parsed colors.
pub struct Chart {
    config: ChartConfig,
    style: ResolvedStyle,
}

impl Chart {
    /// Validate `config` and resolve its colors.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let mut datasets = Vec::with_capacity(config.data.datasets.len());
        for ds in &config.data.datasets {
            if !ds.tension.is_finite() || ds.tension < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "dataset '{}' has invalid tension {}",
                    ds.label, ds.tension
                )));
            }
            if !ds.point_radius.is_finite() || ds.point_radius < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "dataset '{}' has invalid point radius {}",
                    ds.label, ds.point_radius
                )));
            }
            datasets.push(DatasetPaint {
                border: parse_css_color(&ds.border_color)?,
                background: parse_css_color(&ds.background_color)?,
            });
        }
        let opts = &config.options;
        let style = ResolvedStyle {
            legend_text: parse_css_color(&opts.plugins.legend.labels.color)?,
            x_ticks: parse_css_color(&opts.scales.x.ticks.color)?,
            y_ticks: parse_css_color(&opts.scales.y.ticks.color)?,
            datasets,
        };
        Ok(Self { config, style })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn is_responsive(&self) -> bool {
        self.config.options.responsive
    }

    /// Render into an RGBA8 buffer using a CPU raster surface.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Frame, ChartError> {
        let dpr = if opts.device_pixel_ratio.is_finite() && opts.device_pixel_ratio > 0.0 {
            opts.device_pixel_ratio
        } else {
            1.0
        };
        let width = ((opts.width.max(1) as f32) * dpr).round() as i32;
        let height = ((opts.height.max(1) as f32) * dpr).round() as i32;

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            canvas.save();
            canvas.scale((dpr, dpr));
            self.draw(canvas, opts, opts.width.max(1) as f32, opts.height.max(1) as f32);
            canvas.restore();
        }

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(Frame { pixels, width: width as u32, height: height as u32, stride })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        self.render_to_rgba8(opts)?.to_png_bytes()
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, w: f32, h: f32) {
        let mut font = skia::Font::default();
        font.set_size(FONT_SIZE);
        let labels = opts.draw_labels;

        let mut top = opts.insets.top as f32;
        let left = opts.insets.left as f32;
        let right = w - opts.insets.right as f32;
        let bottom = h - opts.insets.bottom as f32;

        let legend = &self.config.options.plugins.legend;
        if legend.display && !self.config.data.datasets.is_empty() {
            top = self.draw_legend(canvas, &font, labels, left, right, top);
        }

        // Y ticks decide the left gutter width.
        let plot_h_guess = (bottom - top).max(1.0);
        let max_ticks = ((plot_h_guess / 40.0).floor() as usize).clamp(2, 11);
        let ticks = self.y_ticks(max_ticks);
        let y_tick_text: Vec<String> = ticks.values.iter().map(|v| format_tick(*v, ticks.step)).collect();
        let show_y = labels && self.config.options.scales.y.ticks.display;
        let show_x = labels && self.config.options.scales.x.ticks.display;
        let y_gutter = if show_y {
            y_tick_text.iter().map(|t| measure(&font, t)).fold(0.0, f32::max) + TICK_PADDING
        } else {
            TICK_PADDING
        };
        let x_gutter = if show_x { FONT_SIZE + TICK_PADDING * 2.0 } else { TICK_PADDING };

        let area = PlotArea::from_ltrb(
            left + y_gutter,
            top + FONT_SIZE * 0.5,
            (right - FONT_SIZE * 0.5).max(left + y_gutter + 1.0),
            (bottom - x_gutter).max(top + FONT_SIZE * 0.5 + 1.0),
        );
        let xs = CategoryScale::new(area.left, area.right, self.config.category_count());
        let ys = ValueScale::new_linear(area.top, area.bottom, ticks.min, ticks.max);

        let x_label_step = if show_x { self.x_label_step(&font, &xs) } else { 1 };
        draw_grid(canvas, opts.theme.grid, &area, &xs, &ys, &ticks, x_label_step);
        draw_axes(canvas, opts.theme.axis_line, &area);

        if show_y {
            let mut paint = fill_paint(self.style.y_ticks);
            paint.set_anti_alias(true);
            for (v, text) in ticks.values.iter().zip(&y_tick_text) {
                let tw = measure(&font, text);
                let y = ys.to_px(*v) + FONT_SIZE * 0.35;
                canvas.draw_str(text, (area.left - TICK_PADDING - tw, y), &font, &paint);
            }
        }
        if show_x {
            let mut paint = fill_paint(self.style.x_ticks);
            paint.set_anti_alias(true);
            for (i, text) in self.config.data.labels.iter().enumerate().step_by(x_label_step) {
                let tw = measure(&font, text);
                let x = xs.to_px(i) - tw * 0.5;
                canvas.draw_str(text, (x, area.bottom + TICK_PADDING + FONT_SIZE), &font, &paint);
            }
        }

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(area.left - 4.0, area.top - 4.0, area.right + 4.0, area.bottom + 4.0),
            skia::ClipOp::Intersect,
            true,
        );
        for (ds, paint) in self.config.data.datasets.iter().zip(&self.style.datasets) {
            draw_line_dataset(canvas, &area, &xs, &ys, ds, paint);
        }
        canvas.restore();
    }

    /// Draw legend entries centered across the top. Returns the new top edge.
    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        font: &skia::Font,
        labels: bool,
        left: f32,
        right: f32,
        top: f32,
    ) -> f32 {
        let entry_width = |ds: &LineDataset| {
            let text = if labels { measure(font, &ds.label) } else { 0.0 };
            LEGEND_BOX_WIDTH + LEGEND_PADDING * 0.5 + text
        };
        let total: f32 = self.config.data.datasets.iter().map(entry_width).sum::<f32>()
            + LEGEND_PADDING * (self.config.data.datasets.len().saturating_sub(1)) as f32;
        let mut x = left + ((right - left) - total).max(0.0) * 0.5;
        let box_top = top + LEGEND_PADDING;

        let mut text_paint = fill_paint(self.style.legend_text);
        text_paint.set_anti_alias(true);
        for (ds, paint) in self.config.data.datasets.iter().zip(&self.style.datasets) {
            let rect = skia::Rect::from_xywh(x, box_top, LEGEND_BOX_WIDTH, FONT_SIZE);
            canvas.draw_rect(rect, &fill_paint(paint.background));
            canvas.draw_rect(rect, &stroke_paint(paint.border, LINE_WIDTH.min(2.0)));
            if labels {
                let tx = x + LEGEND_BOX_WIDTH + LEGEND_PADDING * 0.5;
                canvas.draw_str(&ds.label, (tx, box_top + FONT_SIZE * 0.85), font, &text_paint);
            }
            x += entry_width(ds) + LEGEND_PADDING;
        }
        box_top + FONT_SIZE + LEGEND_PADDING
    }

    fn y_ticks(&self, max_ticks: usize) -> LinearTicks {
        let values = self.config.data.datasets.iter().flat_map(|d| d.data.iter().copied());
        let (min, max) = data_range(values).unwrap_or((0.0, 1.0));
        nice_ticks(min, max, max_ticks)
    }

    /// Every how many x labels one is drawn so that neighbours never overlap.
    fn x_label_step(&self, font: &skia::Font, xs: &CategoryScale) -> usize {
        let widest = self
            .config
            .data
            .labels
            .iter()
            .map(|l| measure(font, l))
            .fold(0.0, f32::max);
        let spacing = xs.spacing().max(1.0);
        (((widest + TICK_PADDING) / spacing).ceil() as usize).max(1)
    }
}

// ---- helpers ----------------------------------------------------------------

fn measure(font: &skia::Font, text: &str) -> f32 {
    font.measure_str(text, None).0
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    color: skia::Color,
    area: &PlotArea,
    xs: &CategoryScale,
    ys: &ValueScale,
    ticks: &LinearTicks,
    x_step: usize,
) {
    let paint = stroke_paint(color, 1.0);
    for x in xs.positions().into_iter().step_by(x_step) {
        canvas.draw_line((x, area.top), (x, area.bottom), &paint);
    }
    for v in &ticks.values {
        let y = ys.to_px(*v);
        canvas.draw_line((area.left, y), (area.right, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, color: skia::Color, area: &PlotArea) {
    let paint = stroke_paint(color, 1.5);
    canvas.draw_line((area.left, area.bottom), (area.right, area.bottom), &paint);
    canvas.draw_line((area.left, area.top), (area.left, area.bottom), &paint);
}

fn draw_line_dataset(
    canvas: &skia::Canvas,
    area: &PlotArea,
    xs: &CategoryScale,
    ys: &ValueScale,
    ds: &LineDataset,
    paint: &DatasetPaint,
) {
    // Non-finite values break the line into separate runs.
    let mut runs: Vec<Vec<(f32, f32)>> = Vec::new();
    let mut current = Vec::new();
    for (i, v) in ds.data.iter().enumerate() {
        if v.is_finite() {
            current.push((xs.to_px(i), ys.to_px(*v)));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let stroke = stroke_paint(paint.border, LINE_WIDTH);
    for run in &runs {
        if run.len() < 2 {
            continue;
        }
        let path = run_path(run, ds.tension as f32, area);
        if ds.fill {
            let mut area_path = path.clone();
            if let (Some(first), Some(last)) = (run.first(), run.last()) {
                area_path.line_to((last.0, area.bottom));
                area_path.line_to((first.0, area.bottom));
                area_path.close();
            }
            let mut fill = fill_paint(paint.background);
            fill.set_anti_alias(true);
            canvas.draw_path(&area_path, &fill);
        }
        canvas.draw_path(&path, &stroke);
    }

    let radius = ds.point_radius as f32;
    if radius > 0.0 {
        let mut point_fill = fill_paint(paint.background);
        point_fill.set_anti_alias(true);
        let point_stroke = stroke_paint(paint.border, POINT_BORDER_WIDTH);
        for &p in runs.iter().flatten() {
            canvas.draw_circle(p, radius, &point_fill);
            canvas.draw_circle(p, radius, &point_stroke);
        }
    }
}

fn run_path(run: &[(f32, f32)], tension: f32, area: &PlotArea) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to(run[0]);
    if tension > 0.0 {
        let mut controls = spline_controls(run, tension);
        cap_to_area(&mut controls, area);
        for i in 1..run.len() {
            path.cubic_to(controls[i - 1].next, controls[i].prev, run[i]);
        }
    } else {
        for &p in &run[1..] {
            path.line_to(p);
        }
    }
    path
}
