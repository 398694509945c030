//! Numerical integration of tabulated samples and of continuous functions.
//!
//! * [`integration::newtoncotes::integrate_newton`] applies composite
//!   trapezoid or Simpson rules to `(x, f)` samples in any order.
//! * [`integration::gausslegendre::integrate_gauss`] applies a fixed 1 to 5
//!   point Gauss-Legendre rule to a function over `[a, b]`.
//!
//! Both are pure functions; the JSON driven [`configuration::Configuration`]
//! only wires named integrands and jobs around them.

pub mod configuration;

pub mod integrand {
    pub mod integrand;
    pub mod builtinintegrand;
    pub mod integrandmanager;
}

pub mod integration {
    pub mod integrationerror;
    pub mod samples;
    pub mod bounds;
    pub mod newtoncotes;
    pub mod gausslegendre;
    pub mod job;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub use integration::gausslegendre::integrate_gauss;
pub use integration::integrationerror::IntegrationError;
pub use integration::newtoncotes::integrate_newton;
