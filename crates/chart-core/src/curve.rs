// File: crates/chart-core/src/curve.rs
// Summary: Spline control points for smoothed line series.

use crate::geometry::PlotArea;

pub type Pt = (f32, f32);

/// Incoming (`prev`) and outgoing (`next`) bezier handles of one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub prev: Pt,
    pub next: Pt,
}

fn dist(a: Pt, b: Pt) -> f32 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

/// Handles for `mid`, pulled along the `before -> after` direction and scaled by
/// the relative length of each neighbouring segment.
pub fn spline_curve(before: Pt, mid: Pt, after: Pt, tension: f32) -> ControlPoints {
    let d01 = dist(before, mid);
    let d12 = dist(mid, after);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = after.0 - before.0;
    let dy = after.1 - before.1;
    ControlPoints {
        prev: (mid.0 - fa * dx, mid.1 - fa * dy),
        next: (mid.0 + fb * dx, mid.1 + fb * dy),
    }
}

/// Control points for a run of connected points. End points use themselves as
/// the missing neighbour.
pub fn spline_controls(points: &[Pt], tension: f32) -> Vec<ControlPoints> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let mid = points[i];
            let before = if i > 0 { points[i - 1] } else { mid };
            let after = if i + 1 < n { points[i + 1] } else { mid };
            spline_curve(before, mid, after, tension)
        })
        .collect()
}

/// Keep handles inside the plot so curves never overshoot the axes.
pub fn cap_to_area(controls: &mut [ControlPoints], area: &PlotArea) {
    for cp in controls {
        cp.prev = area.clamp_point(cp.prev);
        cp.next = area.clamp_point(cp.next);
    }
}
