/// A real function of one real variable that can be shared between threads.
pub trait Integrand: Send + Sync {
    fn value(&self, x: f64) -> f64;
}

impl<F> Integrand for F where
    F: Fn(f64) -> f64 + Send + Sync {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
