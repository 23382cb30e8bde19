use std::fmt;

use num_traits::{Float, FloatConst};

use super::{Scale, ScaleKind};
use crate::{Error, Result};

/// Power scale: `y = x^p` with `p ∈ (0, ∞)`.
///
/// The canonical preset uses `p = e` and reports [`ScaleKind::Power`]; any
/// other exponent reports [`ScaleKind::Custom`].
///
/// # Examples
///
/// ```
/// use rangescale::{Scale, ScaleKind, scale::Power};
///
/// let preset = Power::<f64>::default();
/// assert_eq!(preset.kind(), ScaleKind::Power);
///
/// let cube = Power::<f64>::new(3.0).unwrap();
/// assert_eq!(cube.kind(), ScaleKind::Custom);
/// assert_eq!(cube.convert(0.5), 0.125);
///
/// assert!(Power::<f64>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power<T = f64> {
    power: T,
}

impl<T: Float> Power<T> {
    /// Creates `y = x^power`.
    ///
    /// Fails with [`Error::InvalidPower`] unless `power` is finite and
    /// strictly positive.
    pub fn new(power: T) -> Result<Self> {
        validate(power)?;
        Ok(Self { power })
    }

    /// The exponent.
    pub fn power(&self) -> T {
        self.power
    }

    /// Replaces the exponent, leaving the scale untouched on error.
    pub fn set_power(&mut self, power: T) -> Result<()> {
        validate(power)?;
        self.power = power;
        Ok(())
    }
}

impl<T: Float + FloatConst> Power<T> {
    /// The canonical exponent, `e`.
    pub fn default_power() -> T {
        T::E()
    }

    pub fn is_preset(&self) -> bool {
        self.power == Self::default_power()
    }
}

impl<T: Float + FloatConst> Default for Power<T> {
    fn default() -> Self {
        Self {
            power: Self::default_power(),
        }
    }
}

fn validate<T: Float>(power: T) -> Result<()> {
    if power > T::zero() && power.is_finite() {
        return Ok(());
    }
    let power = power.to_f64().unwrap_or(f64::NAN);
    log::debug!("rejected power scale exponent {power}");
    Err(Error::InvalidPower { power })
}

impl<T: Float + FloatConst> Scale<T> for Power<T> {
    fn convert(&self, x: T) -> T {
        x.powf(self.power)
    }

    fn inverse(&self, y: T) -> T {
        y.powf(self.power.recip())
    }

    fn kind(&self) -> ScaleKind {
        if self.is_preset() {
            ScaleKind::Power
        } else {
            ScaleKind::Custom
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Power<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x^{}", self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    #[test]
    fn test_power_kind() {
        assert_eq!(Power::<f64>::new(E).unwrap().kind(), ScaleKind::Power);
        assert_eq!(Power::<f64>::default().kind(), ScaleKind::Power);
        assert_eq!(Power::<f64>::new(3.0).unwrap().kind(), ScaleKind::Custom);
    }

    #[test]
    fn test_power_rejects_non_positive() {
        assert!(matches!(
            Power::<f64>::new(0.0),
            Err(Error::InvalidPower { power }) if power == 0.0
        ));
        assert!(matches!(Power::<f64>::new(-1.0), Err(Error::InvalidPower { .. })));
        assert!(Power::<f64>::new(f64::NAN).is_err());
        assert!(Power::<f64>::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_power_convert() {
        let scale = Power::<f64>::new(2.0).unwrap();
        assert_eq!(scale.convert(0.5), 0.25);
        assert_eq!(scale.inverse(0.25), 0.5);
        assert_eq!(scale.convert(0.0), 0.0);
        assert_eq!(scale.convert(1.0), 1.0);
    }

    #[test]
    fn test_set_power_degrades_kind() {
        let mut scale = Power::<f64>::default();
        scale.set_power(0.5).unwrap();
        assert_eq!(scale.kind(), ScaleKind::Custom);
        assert_eq!(scale.convert(0.25), 0.5);

        assert!(scale.set_power(-2.0).is_err());
        assert_eq!(scale.power(), 0.5);

        scale.set_power(E).unwrap();
        assert_eq!(scale.kind(), ScaleKind::Power);
    }

    #[test]
    fn test_display() {
        assert_eq!(Power::<f64>::new(3.0).unwrap().to_string(), "x^3");
    }
}
