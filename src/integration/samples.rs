use std::borrow::Cow;

use log::debug;

use crate::integration::integrationerror::ShapeError;

/// Paired `(x, f(x))` samples, always held in ascending `x` order.
///
/// Input that is already strictly ascending is borrowed as is; anything else
/// is copied and reordered by `x`, carrying every `f` value with its `x`.
pub struct SampleSeries<'a> {
    x: Cow<'a, [f64]>,
    f: Cow<'a, [f64]>
}

impl<'a> SampleSeries<'a> {
    pub fn new(x: &'a [f64], f: &'a [f64]) -> Result<SampleSeries<'a>, ShapeError> {
        if x.len() != f.len() {
            return Err(ShapeError::LengthMismatch { x_len: x.len(), f_len: f.len() });
        }
        if x.len() < 2 {
            return Err(ShapeError::TooFewSamples(x.len()));
        }

        if is_strictly_ascending(x) {
            return Ok(SampleSeries { x: Cow::Borrowed(x), f: Cow::Borrowed(f) });
        }

        debug!("reordering {} samples by ascending x", x.len());
        let mut order: Vec<usize> = (0..x.len()).collect();
        order.sort_by(|&i, &j| x[i].total_cmp(&x[j]));
        let sorted_x: Vec<f64> = order.iter().map(|&i| x[i]).collect();
        let sorted_f: Vec<f64> = order.iter().map(|&i| f[i]).collect();
        Ok(SampleSeries { x: Cow::Owned(sorted_x), f: Cow::Owned(sorted_f) })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Number of sub-intervals between consecutive samples.
    pub fn interval_count(&self) -> usize {
        self.x.len() - 1
    }

    pub fn is_reordered(&self) -> bool {
        matches!(self.x, Cow::Owned(_))
    }
}

pub fn is_strictly_ascending(x: &[f64]) -> bool {
    x.windows(2).all(|pair| pair[0] < pair[1])
}

/// Reads a flat JSON array of numbers. Nested arrays, objects and
/// non-numeric entries are rejected as not one-dimensional.
pub fn real_vector_from_json(name: &'static str, value: &serde_json::Value) -> Result<Vec<f64>, ShapeError> {
    let array = value.as_array().ok_or(ShapeError::NotOneDimensional(name))?;
    array
        .iter()
        .map(|elem| elem.as_f64().ok_or(ShapeError::NotOneDimensional(name)))
        .collect()
}
