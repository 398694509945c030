use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// ShapeError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("x and f need to be 1D with the same length (got {x_len} and {f_len})")]
    LengthMismatch { x_len: usize, f_len: usize },
    #[error("at least 2 samples are needed to integrate, got {0}")]
    TooFewSamples(usize),
    #[error("'{0}' needs to be a 1D sequence of numbers")]
    NotOneDimensional(&'static str),
}

// ─────────────────────────────────────────────────────────────────────────────
// BoundsError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("lims must have length 2, got {0}")]
    WrongLength(usize),
    #[error("lims must be a sequence of 2 bounds, got {0}")]
    NotASequence(String),
    #[error("bound '{0}' is not convertible to a real number")]
    NotReal(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationError
// ─────────────────────────────────────────────────────────────────────────────

/// Every failure the integration kernel reports. All of them are argument
/// errors detected before any accumulation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("invalid rule '{0}', use 'trap' or 'simp'")]
    InvalidRule(String),
    #[error("integrand '{0}' is not a callable object")]
    NotCallable(String),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error("npts must be in [1, 2, 3, 4, 5], got {0}")]
    UnsupportedOrder(String),
}
