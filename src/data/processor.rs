//! Data Processor Module
//! Derived series for charting: week labels, histogram bins and axis ranges.

use std::ops::Range;

/// Number of equal-width bins used for the dry weight histogram.
pub const HISTOGRAM_BINS: usize = 5;

/// Fraction of the data span added on each side of a numeric axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Smallest axis margin relative to the largest magnitude on the axis.
/// Keeps tick spacing above float resolution for large, tightly grouped values.
const MIN_RELATIVE_PAD: f64 = 1e-6;

/// One histogram bar: `[lower, upper)`, except the last bar which also
/// includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Handles the small transformations the charts need.
pub struct DataProcessor;

impl DataProcessor {
    /// "Week 1" .. "Week n".
    pub fn week_labels(n: usize) -> Vec<String> {
        (1..=n).map(|week| format!("Week {}", week)).collect()
    }

    /// Minimum and maximum of the values, `None` when empty.
    pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
        values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }

    /// Split values into `bins` equal-width bins spanning their observed range.
    ///
    /// A zero-width range is widened by `max(|v| * AXIS_MARGIN, 0.5)` on each
    /// side so a single reading still produces the full set of bins. Returns an
    /// empty vector when there are no values or no bins.
    pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
        let Some((mut min, mut max)) = Self::value_range(values) else {
            return Vec::new();
        };
        if bins == 0 {
            return Vec::new();
        }
        if min == max {
            let widen = Self::zero_span_pad(min);
            min = (min - widen).max(f64::MIN);
            max = (max + widen).min(f64::MAX);
        }

        let n = bins as f64;
        let mut result: Vec<Bin> = (0..bins)
            .map(|i| Bin {
                lower: Self::lerp(min, max, i as f64 / n),
                upper: if i + 1 == bins {
                    max
                } else {
                    Self::lerp(min, max, (i + 1) as f64 / n)
                },
                count: 0,
            })
            .collect();

        // halved operands keep `max - min` finite for any finite pair
        let half_span = max / 2.0 - min / 2.0;
        for &v in values {
            let fraction = (v / 2.0 - min / 2.0) / half_span;
            let idx = ((fraction * n).floor() as usize).min(bins - 1);
            result[idx].count += 1;
        }

        result
    }

    /// Axis range around `[min, max]` with a margin on both sides.
    ///
    /// `None` when the padded range is wider than an `f64` can hold, since such
    /// an axis cannot be drawn.
    pub fn padded(min: f64, max: f64) -> Option<Range<f64>> {
        let half_span = max / 2.0 - min / 2.0;
        let magnitude = min.abs().max(max.abs());
        let pad = if half_span > 0.0 {
            (half_span * (2.0 * AXIS_MARGIN)).max(magnitude * MIN_RELATIVE_PAD)
        } else {
            Self::zero_span_pad(min)
        };

        let start = (min - pad).max(f64::MIN);
        let end = (max + pad).min(f64::MAX);
        (end - start).is_finite().then_some(start..end)
    }

    /// Padded axis range for a series, `None` when empty or too wide.
    pub fn padded_range(values: &[f64]) -> Option<Range<f64>> {
        Self::value_range(values).and_then(|(min, max)| Self::padded(min, max))
    }

    fn zero_span_pad(v: f64) -> f64 {
        (v.abs() * AXIS_MARGIN).max(0.5)
    }

    fn lerp(start: f64, end: f64, t: f64) -> f64 {
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            start * (1.0 - t) + end * t
        }
    }
}
