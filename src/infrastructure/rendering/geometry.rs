//! Pure layout math for the canvas renderer.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Share of a category slot a bar occupies (category 0.8 × bar 0.9)
pub const BAR_FILL_RATIO: f64 = 0.72;
/// Number of y-axis ticks aimed for
pub const TARGET_TICKS: usize = 6;

/// Rectangle of the canvas the data is plotted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn inset(canvas_width: f64, canvas_height: f64, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: (canvas_width - left - right).max(0.0),
            height: (canvas_height - top - bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Start/end angles of each pie slice, clockwise from twelve o'clock.
/// Empty when nothing can be apportioned.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|&value| {
            let sweep = if value > 0.0 { value / total * TAU } else { 0.0 };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Data range for the value axis
pub fn value_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (mut min, mut max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 1.0);
    }
    if begin_at_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        min -= pad;
        max += pad;
    }
    (min, max)
}

/// 1, 2, 2.5 or 5 times a power of ten, at least `raw`
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper bound on ticks; degenerate ranges fall back to the bare endpoints
const MAX_TICKS: usize = 1000;

/// Evenly stepped tick values covering `[min, max]`
pub fn tick_values(min: f64, max: f64) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return vec![min, max];
    }
    let step = nice_step(span / (TARGET_TICKS - 1) as f64);
    let first = (min / step).floor() * step;
    let last = (max / step).ceil() * step;
    let steps = (last - first) / step;
    if !steps.is_finite() || steps > MAX_TICKS as f64 {
        return vec![min, max];
    }
    let count = steps.round() as usize;
    // Snap float noise such as 0.30000000000000004 to the step's precision
    let decimals = (-step.log10().floor()).max(0.0) + 1.0;
    let precision = 10f64.powf(decimals);
    (0..=count)
        .map(|i| {
            let tick = first + step * i as f64;
            let snapped = (tick * precision).round() / precision;
            if snapped.is_finite() { snapped } else { tick }
        })
        .collect()
}

/// Maps data values onto canvas y coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ValueScale {
    /// Scale spanning the ticks, so the outermost ticks sit on the plot edges
    pub fn for_ticks(ticks: &[f64], area: &PlotArea) -> Self {
        let min = ticks.first().copied().unwrap_or(0.0);
        let max = ticks.last().copied().unwrap_or(1.0);
        Self { min, max, top: area.y, bottom: area.bottom() }
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return (self.top + self.bottom) / 2.0;
        }
        let normalized = (value - self.min) / range;
        self.bottom - normalized * (self.bottom - self.top)
    }
}

/// Centre of category slot `index`
pub fn category_center(index: usize, len: usize, area: &PlotArea) -> f64 {
    if len == 0 {
        return area.x;
    }
    let slot = area.width / len as f64;
    area.x + slot * (index as f64 + 0.5)
}

/// x of point `index` on a line chart; a single point sits in the middle
pub fn point_x(index: usize, len: usize, area: &PlotArea) -> f64 {
    if len <= 1 {
        return area.x + area.width / 2.0;
    }
    area.x + area.width * index as f64 / (len - 1) as f64
}

/// Bar rectangle `(x, y, width, height)` growing from the zero line
pub fn bar_rect(index: usize, len: usize, value: f64, area: &PlotArea, scale: &ValueScale) -> (f64, f64, f64, f64) {
    let slot = if len == 0 { 0.0 } else { area.width / len as f64 };
    let width = slot * BAR_FILL_RATIO;
    let x = category_center(index, len, area) - width / 2.0;
    let zero_y = scale.value_to_y(0.0_f64.clamp(scale.min, scale.max));
    let value_y = scale.value_to_y(value);
    (x, zero_y.min(value_y), width, (zero_y - value_y).abs())
}

/// Bézier control points `(before, after)` for every point of a smoothed line
pub fn control_points(points: &[(f64, f64)], tension: f64) -> Vec<((f64, f64), (f64, f64))> {
    (0..points.len())
        .map(|i| {
            let current = points[i];
            let previous = if i > 0 { points[i - 1] } else { current };
            let next = points.get(i + 1).copied().unwrap_or(current);

            let d01 = distance(previous, current);
            let d12 = distance(current, next);
            let total = d01 + d12;
            let (s01, s12) = if total == 0.0 { (0.0, 0.0) } else { (d01 / total, d12 / total) };

            let dx = next.0 - previous.0;
            let dy = next.1 - previous.1;
            let before = (current.0 - tension * s01 * dx, current.1 - tension * s01 * dy);
            let after = (current.0 + tension * s12 * dx, current.1 + tension * s12 * dy);
            (before, after)
        })
        .collect()
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}
