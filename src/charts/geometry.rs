use serde::Serialize;

/// Pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The region inside the axes where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Canvas of `width` x `height` with the given padding on each side.
    pub fn inset(width: f32, height: f32, pad: Padding) -> Self {
        Self::new(
            pad.left,
            pad.top,
            width - pad.left - pad.right,
            height - pad.top - pad.bottom,
        )
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Horizontal position at a fraction of the width.
    pub fn x_at(&self, fraction: f32) -> f32 {
        self.left + self.width * fraction
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Linear map from a value range onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub start: f32,
    pub end: f32,
}

impl LinearScale {
    pub fn map(&self, value: f64) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return self.start;
        }
        let t = ((value - self.min) / span) as f32;
        self.start + (self.end - self.start) * t
    }
}

fn nice_num(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(exponent)
}

/// Evenly spaced "nice" tick values covering `[min, max]`.
///
/// When `fixed_max` is set the last tick is exactly that value.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize, fixed_max: Option<f64>) -> Vec<f64> {
    let max = fixed_max.unwrap_or(max);
    let max_ticks = max_ticks.max(2);
    if !(max > min) {
        return vec![min, min + 1.0];
    }
    let range = nice_num(max - min, false);
    let step = nice_num(range / (max_ticks - 1) as f64, true);
    let lo = (min / step).floor() * step;
    let hi = match fixed_max {
        Some(m) => m,
        None => (max / step).ceil() * step,
    };
    // Round every tick to the step's precision so 0.1 * 3 prints as 0.3.
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let factor = 10f64.powi(decimals);
    let count = ((hi - lo) / step).round() as usize;
    (0..=count)
        .map(|i| ((lo + step * i as f64) * factor).round() / factor)
        .map(|v| v.min(hi))
        .collect()
}

fn to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

/// Point at `angle` degrees, measured clockwise from 12 o'clock.
pub fn polar(cx: f32, cy: f32, r: f32, angle: f32) -> (f32, f32) {
    let rad = to_rad(angle - 90.0);
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed SVG path for a pie slice (`inner == 0`) or a ring segment.
pub fn arc_slice_path(cx: f32, cy: f32, outer: f32, inner: f32, a0: f32, a1: f32) -> String {
    let sweep = (a1 - a0).abs();
    if sweep >= 359.99 {
        // A single arc cannot describe a full circle; draw two halves.
        let mid = a0 + 180.0;
        return format!(
            "{} {}",
            arc_slice_path(cx, cy, outer, inner, a0, mid),
            arc_slice_path(cx, cy, outer, inner, mid, a0 + 360.0)
        );
    }
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, a0);
    let (ox1, oy1) = polar(cx, cy, outer, a1);
    if inner <= 0.0 {
        format!(
            "M {cx:.3} {cy:.3} L {ox0:.3} {oy0:.3} A {outer:.3} {outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} Z"
        )
    } else {
        let (ix0, iy0) = polar(cx, cy, inner, a0);
        let (ix1, iy1) = polar(cx, cy, inner, a1);
        format!(
            "M {ox0:.3} {oy0:.3} A {outer:.3} {outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} L {ix1:.3} {iy1:.3} A {inner:.3} {inner:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
        )
    }
}

/// Cubic Bézier path through `points`. Control points follow the
/// neighbouring points scaled by `tension`; zero tension yields straight
/// segments.
pub fn smooth_path(points: &[(f32, f32)], tension: f32) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut d = format!("M {x0:.3} {y0:.3}");
    if tension <= 0.0 || points.len() < 3 {
        for &(x, y) in &points[1..] {
            d.push_str(&format!(" L {x:.3} {y:.3}"));
        }
        return d;
    }

    let controls: Vec<((f32, f32), (f32, f32))> = (0..points.len())
        .map(|i| {
            let cur = points[i];
            let prev = if i == 0 { cur } else { points[i - 1] };
            let next = if i + 1 == points.len() { cur } else { points[i + 1] };
            spline_controls(prev, cur, next, tension)
        })
        .collect();

    for i in 1..points.len() {
        let (_, c1) = controls[i - 1];
        let (c2, _) = controls[i];
        let (x, y) = points[i];
        d.push_str(&format!(
            " C {:.3} {:.3} {:.3} {:.3} {x:.3} {y:.3}",
            c1.0, c1.1, c2.0, c2.1
        ));
    }
    d
}

/// Returns (incoming, outgoing) control points for `cur`.
fn spline_controls(
    prev: (f32, f32),
    cur: (f32, f32),
    next: (f32, f32),
    tension: f32,
) -> ((f32, f32), (f32, f32)) {
    let dist = |a: (f32, f32), b: (f32, f32)| ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
    let d01 = dist(prev, cur);
    let d12 = dist(cur, next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    (
        (cur.0 - fa * (next.0 - prev.0), cur.1 - fa * (next.1 - prev.1)),
        (cur.0 + fb * (next.0 - prev.0), cur.1 + fb * (next.1 - prev.1)),
    )
}

/// Vertices of a regular polygon (radar grid ring or data outline).
pub fn radar_points(cx: f32, cy: f32, radii: &[f32]) -> Vec<(f32, f32)> {
    let n = radii.len().max(1) as f32;
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| polar(cx, cy, *r, 360.0 * i as f32 / n))
        .collect()
}

pub fn points_attr(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.3},{y:.3}"))
        .collect::<Vec<_>>()
        .join(" ")
}
