use std::fmt;

use num_traits::Float;

use super::{Scale, ScaleKind, util::lit};
use crate::{Error, Result};

const DEFAULT_MAX: f64 = 2.0;

/// Hyperbolic scale: the reciprocal `−1/t` swept over `t ∈ [1/m, m]` and
/// renormalized onto `[0, 1]`, with `m ∈ (1, ∞)`.
///
/// With `c = m²` this reduces to
///
/// ```text
/// convert(x) = c·x / ((1 − x) + c·x)
/// inverse(y) = y / (c·(1 − y) + y)
/// ```
///
/// Larger `m` compresses more of the value range towards `x = 0`. The
/// canonical preset uses `m = 2` and reports [`ScaleKind::Hyperbolic`]; any
/// other `m` reports [`ScaleKind::Custom`].
///
/// # Examples
///
/// ```
/// use rangescale::{Scale, ScaleKind, scale::Hyperbolic};
///
/// let scale = Hyperbolic::<f64>::default();
/// assert_eq!(scale.kind(), ScaleKind::Hyperbolic);
/// assert_eq!(scale.convert(0.5), 0.8);
/// assert!((scale.inverse(0.8) - 0.5).abs() < 1e-12);
///
/// assert!(Hyperbolic::<f64>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperbolic<T = f64> {
    max: T,
}

impl<T: Float> Hyperbolic<T> {
    /// Creates a hyperbolic scale spanning `[1/max, max]`.
    ///
    /// Fails with [`Error::InvalidMax`] unless `max` is finite and greater
    /// than one.
    pub fn new(max: T) -> Result<Self> {
        validate(max)?;
        Ok(Self { max })
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Replaces `m`, leaving the scale untouched on error.
    pub fn set_max(&mut self, max: T) -> Result<()> {
        validate(max)?;
        self.max = max;
        Ok(())
    }

    /// The canonical `m`, `2`.
    pub fn default_max() -> T {
        lit(DEFAULT_MAX)
    }

    pub fn is_preset(&self) -> bool {
        self.max == Self::default_max()
    }

    fn stretch(&self) -> T {
        self.max * self.max
    }
}

impl<T: Float> Default for Hyperbolic<T> {
    fn default() -> Self {
        Self {
            max: Self::default_max(),
        }
    }
}

fn validate<T: Float>(max: T) -> Result<()> {
    if max > T::one() && max.is_finite() {
        return Ok(());
    }
    let max = max.to_f64().unwrap_or(f64::NAN);
    log::debug!("rejected hyperbolic scale max {max}");
    Err(Error::InvalidMax { max })
}

impl<T: Float> Scale<T> for Hyperbolic<T> {
    fn convert(&self, x: T) -> T {
        let c = self.stretch();
        c * x / ((T::one() - x) + c * x)
    }

    fn inverse(&self, y: T) -> T {
        let c = self.stretch();
        y / (c * (T::one() - y) + y)
    }

    fn kind(&self) -> ScaleKind {
        if self.is_preset() {
            ScaleKind::Hyperbolic
        } else {
            ScaleKind::Custom
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Hyperbolic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/x on [1/{0}, {0}]", self.max)
    }
}
