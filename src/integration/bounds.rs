use crate::integration::integrationerror::BoundsError;

/// A value that may stand for one end of an integration interval.
pub trait RealBound {
    fn to_real(&self) -> Option<f64>;

    fn describe(&self) -> String;
}

impl RealBound for f64 {
    fn to_real(&self) -> Option<f64> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RealBound for f32 {
    fn to_real(&self) -> Option<f64> {
        Some(f64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RealBound for i32 {
    fn to_real(&self) -> Option<f64> {
        Some(f64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RealBound for i64 {
    fn to_real(&self) -> Option<f64> {
        Some(*self as f64)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RealBound for str {
    fn to_real(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }

    fn describe(&self) -> String {
        self.to_owned()
    }
}

impl RealBound for String {
    fn to_real(&self) -> Option<f64> {
        self.as_str().to_real()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

/// JSON numbers convert directly, JSON strings are parsed.
impl RealBound for serde_json::Value {
    fn to_real(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(number) => number.as_f64(),
            serde_json::Value::String(text) => text.to_real(),
            _ => None
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T> RealBound for &T where
    T: RealBound + ?Sized {
    fn to_real(&self) -> Option<f64> {
        (**self).to_real()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationInterval
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds `(a, b)` of a definite integral. `a > b` is allowed and flips the
/// sign of the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationInterval {
    a: f64,
    b: f64
}

impl IntegrationInterval {
    pub fn new(a: f64, b: f64) -> IntegrationInterval {
        IntegrationInterval { a, b }
    }

    pub fn from_lims<B>(lims: &[B]) -> Result<IntegrationInterval, BoundsError> where
        B: RealBound {
        if lims.len() != 2 {
            return Err(BoundsError::WrongLength(lims.len()));
        }
        let a = lims[0].to_real().ok_or_else(|| BoundsError::NotReal(lims[0].describe()))?;
        let b = lims[1].to_real().ok_or_else(|| BoundsError::NotReal(lims[1].describe()))?;
        Ok(IntegrationInterval::new(a, b))
    }

    /// Reads `lims` from JSON. Anything other than an array, scalars
    /// included, is rejected before the bounds are converted.
    pub fn from_json(lims: &serde_json::Value) -> Result<IntegrationInterval, BoundsError> {
        match lims {
            serde_json::Value::Array(lims) => IntegrationInterval::from_lims(lims.as_slice()),
            other => Err(BoundsError::NotASequence(other.to_string()))
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    pub fn half_range(&self) -> f64 {
        0.5 * (self.b - self.a)
    }

    /// Maps a node on the reference interval `[-1, 1]` onto `[a, b]`.
    pub fn map_from_reference(&self, x_std: f64) -> f64 {
        self.midpoint() + self.half_range() * x_std
    }
}
