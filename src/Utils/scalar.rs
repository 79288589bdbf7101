//! # Scalar Module
//!
//! ## Purpose
//! Numeric value abstraction shared by every kernel of the crate. A kernel is written once,
//! generic over `V: Scalar`, and instantiated either with plain `f64` (fast path) or with
//! `num_dual::Dual64`, in which case the derivative with respect to a seeded input (usually
//! temperature) is carried through the same arithmetic and ends up in the `eps` part of
//! the outputs. This is what the Jacobian assembly of the source terms relies on.
//!
//! ## Rules for kernels
//! - arithmetic with plain constants is written `value op constant` (`x * 1e-3`), since
//!   `DualNum<f64>` provides `Mul<f64>` etc. but not the mirrored impls on `f64`
//! - constants that must become values are lifted with `V::from(c)`
//! - branches (polynomial range selection, sign tests) look only at `value()`, so the
//!   plain and the dual instantiation always take identical paths
//!
//! ```
//! use KiSurf::Utils::scalar::Scalar;
//! use num_dual::Dual64;
//! fn arrhenius<V: Scalar>(t: V) -> V {
//!     (-t.recip() * 1000.0).exp() * 2.0
//! }
//! let k = arrhenius(Dual64::new(500.0, 1.0));
//! assert!((k.value() - arrhenius(500.0_f64)).abs() < 1e-15);
//! ```
use num_dual::{Dual64, DualNum};

/// number usable as a drop-in `f64` with a projection back to the plain value
pub trait Scalar: DualNum<f64> + Copy + Send + Sync + 'static {
    /// plain-scalar projection (real part)
    fn value(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn value(&self) -> f64 {
        *self
    }
}

impl Scalar for Dual64 {
    #[inline]
    fn value(&self) -> f64 {
        self.re
    }
}

/// lifts a slice of plain numbers into any `Scalar` (all derivatives zero)
pub fn lift<V: Scalar>(values: &[f64]) -> Vec<V> {
    values.iter().map(|&x| V::from(x)).collect()
}

/// plain-scalar projection of a slice
pub fn values<V: Scalar>(xs: &[V]) -> Vec<f64> {
    xs.iter().map(|x| x.value()).collect()
}
