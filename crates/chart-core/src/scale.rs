// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and linear value (Y) scales plus "nice" tick generation.

use crate::grid::linspace;

/// Horizontal category scale: evenly spaced positions, first and last on the edges.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count <= 1 {
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + (self.right_px - self.left_px) * index as f32 / (self.count - 1) as f32
    }

    /// Pixel distance between neighbouring categories.
    pub fn spacing(&self) -> f32 {
        if self.count <= 1 { return self.right_px - self.left_px; }
        (self.right_px - self.left_px) / (self.count - 1) as f32
    }

    pub fn positions(&self) -> Vec<f32> {
        match self.count {
            0 => Vec::new(),
            1 => vec![self.to_px(0)],
            n => linspace(self.left_px as f64, self.right_px as f64, n)
                .into_iter()
                .map(|x| x as f32)
                .collect(),
        }
    }
}

/// Vertical value scale mapping a data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    /// Half of `vmax - vmin`; halving first keeps the span finite for any finite range.
    #[inline]
    fn half_span(&self) -> f64 {
        (self.vmax / 2.0 - self.vmin / 2.0).max(0.5e-12)
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let t = (y / 2.0 - self.vmin / 2.0) / self.half_span();
        self.bottom_px - t as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let t = ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64;
        self.vmin + t * self.half_span() * 2.0
    }
}

/// Evenly stepped tick values covering a data range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearTicks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub values: Vec<f64>,
}

/// Min/max over the finite values, `None` when there are none.
pub fn data_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Round `range` up to 1, 2 or 5 times a power of ten.
pub fn nice_num(range: f64) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let rounded = range.round();
    let range = if (range - rounded).abs() < 1e-9 * range.max(1.0) { rounded } else { range };
    let magnitude = 10f64.powf(range.log10().floor());
    let fraction = range / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn step_decimals(step: f64) -> usize {
    if step >= 1.0 || step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10() - 1e-9).ceil().max(0.0) as usize
}

/// Build nice ticks for `[min, max]` using at most `max_ticks` labels.
/// A degenerate range is widened by 5% (or by 1 around zero). A range wider than
/// `f64` can step through gets just its two bounds as ticks.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> LinearTicks {
    let (mut min, mut max) = (min, max);
    if (max - min).abs() < f64::EPSILON {
        let offset = if max == 0.0 { 1.0 } else { (max * 0.05).abs() };
        max += offset;
        min -= offset;
    }

    let max_spaces = max_ticks.saturating_sub(1).max(1) as f64;
    let mut step = nice_num((max - min) / max_spaces);
    let mut spaces = ((max / step).ceil() - (min / step).floor()).round();
    if spaces > max_spaces {
        step = nice_num(spaces * step / max_spaces);
        spaces = ((max / step).ceil() - (min / step).floor()).round();
    }
    let bounds_only = || LinearTicks { min, max, step: f64::MAX, values: vec![min, max] };
    if !step.is_finite() || !spaces.is_finite() {
        return bounds_only();
    }

    let factor = 10f64.powi(step_decimals(step) as i32);
    let round = |v: f64| (v * factor).round() / factor;
    let nice_min = round((min / step).floor() * step);
    let values: Vec<f64> = (0..=spaces as usize).map(|i| round(nice_min + step * i as f64)).collect();
    if values.iter().any(|v| !v.is_finite()) {
        return bounds_only();
    }
    let nice_max = values.last().copied().unwrap_or(nice_min);

    LinearTicks { min: nice_min, max: nice_max, step, values }
}

/// Values beyond this magnitude are printed in scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e15;

/// Format a tick value with just enough decimals for its step.
pub fn format_tick(value: f64, step: f64) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    if v.abs() > SCIENTIFIC_ABOVE {
        return format!("{v:e}");
    }
    let decimals = step_decimals(step);
    format!("{v:.decimals$}")
}
