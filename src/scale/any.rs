use std::fmt;

use num_traits::{Float, FloatConst};

use super::{Circle, Custom, Hyperbolic, Linear, Power, Root, Scale, ScaleKind, Sine, Square};
use crate::{Error, Result};

/// Any scale the crate knows about, as a single concrete type.
///
/// This is what a range stores: one value that is the single source of
/// truth, with [`kind`](Scale::kind) derived from it on every read. The
/// default is the identity ([`AnyScale::Linear`]).
///
/// # Examples
///
/// ```
/// use rangescale::{AnyScale, Scale, ScaleKind};
///
/// let scale = AnyScale::<f64>::from_kind(ScaleKind::Square).unwrap();
/// assert_eq!(scale.convert(0.5), 0.25);
///
/// // A non-canonical parameter downgrades the reported kind.
/// let scale = AnyScale::<f64>::power(3.0).unwrap();
/// assert_eq!(scale.kind(), ScaleKind::Custom);
///
/// assert!(AnyScale::<f64>::from_kind(ScaleKind::Custom).is_err());
/// ```
#[derive(Debug, Clone)]
pub enum AnyScale<T = f64> {
    Linear,
    Sine,
    Circle,
    Square,
    Root,
    Power(Power<T>),
    Hyperbolic(Hyperbolic<T>),
    Inverse(Box<AnyScale<T>>),
    Custom(Custom<T>),
}

impl<T: Float + FloatConst> AnyScale<T> {
    /// Builds the canonical scale for a preset kind.
    ///
    /// [`ScaleKind::Custom`] has no canonical parameterization and fails
    /// with [`Error::NotPreset`].
    pub fn from_kind(kind: ScaleKind) -> Result<Self> {
        Ok(match kind {
            ScaleKind::Linear => AnyScale::Linear,
            ScaleKind::Sine => AnyScale::Sine,
            ScaleKind::Circle => AnyScale::Circle,
            ScaleKind::Square => AnyScale::Square,
            ScaleKind::Root => AnyScale::Root,
            ScaleKind::Power => AnyScale::Power(Power::default()),
            ScaleKind::Hyperbolic => AnyScale::Hyperbolic(Hyperbolic::default()),
            ScaleKind::Custom => return Err(Error::NotPreset(kind)),
        })
    }

    /// `y = x^power`.
    pub fn power(power: T) -> Result<Self> {
        Power::new(power).map(AnyScale::Power)
    }

    /// Hyperbolic scale spanning `[1/max, max]`.
    pub fn hyperbolic(max: T) -> Result<Self> {
        Hyperbolic::new(max).map(AnyScale::Hyperbolic)
    }

    pub fn custom<F, G>(forward: F, inverse: G) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
        G: Fn(T) -> T + Send + Sync + 'static,
    {
        AnyScale::Custom(Custom::new(forward, inverse))
    }

    /// Swaps the two directions of this scale.
    pub fn invert(self) -> Self {
        AnyScale::Inverse(Box::new(self))
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, AnyScale::Linear)
    }
}

impl<T> Default for AnyScale<T> {
    fn default() -> Self {
        AnyScale::Linear
    }
}

impl<T: Float + FloatConst> Scale<T> for AnyScale<T> {
    fn convert(&self, x: T) -> T {
        match self {
            AnyScale::Linear => Linear.convert(x),
            AnyScale::Sine => Sine.convert(x),
            AnyScale::Circle => Circle.convert(x),
            AnyScale::Square => Square.convert(x),
            AnyScale::Root => Root.convert(x),
            AnyScale::Power(scale) => scale.convert(x),
            AnyScale::Hyperbolic(scale) => scale.convert(x),
            AnyScale::Inverse(scale) => scale.inverse(x),
            AnyScale::Custom(scale) => scale.convert(x),
        }
    }

    fn inverse(&self, y: T) -> T {
        match self {
            AnyScale::Linear => Linear.inverse(y),
            AnyScale::Sine => Sine.inverse(y),
            AnyScale::Circle => Circle.inverse(y),
            AnyScale::Square => Square.inverse(y),
            AnyScale::Root => Root.inverse(y),
            AnyScale::Power(scale) => scale.inverse(y),
            AnyScale::Hyperbolic(scale) => scale.inverse(y),
            AnyScale::Inverse(scale) => scale.convert(y),
            AnyScale::Custom(scale) => scale.inverse(y),
        }
    }

    fn kind(&self) -> ScaleKind {
        match self {
            AnyScale::Linear => ScaleKind::Linear,
            AnyScale::Sine => ScaleKind::Sine,
            AnyScale::Circle => ScaleKind::Circle,
            AnyScale::Square => ScaleKind::Square,
            AnyScale::Root => ScaleKind::Root,
            AnyScale::Power(scale) => scale.kind(),
            AnyScale::Hyperbolic(scale) => scale.kind(),
            AnyScale::Inverse(_) | AnyScale::Custom(_) => ScaleKind::Custom,
        }
    }
}

impl<T> From<Linear> for AnyScale<T> {
    fn from(_: Linear) -> Self {
        AnyScale::Linear
    }
}

impl<T> From<Sine> for AnyScale<T> {
    fn from(_: Sine) -> Self {
        AnyScale::Sine
    }
}

impl<T> From<Circle> for AnyScale<T> {
    fn from(_: Circle) -> Self {
        AnyScale::Circle
    }
}

impl<T> From<Square> for AnyScale<T> {
    fn from(_: Square) -> Self {
        AnyScale::Square
    }
}

impl<T> From<Root> for AnyScale<T> {
    fn from(_: Root) -> Self {
        AnyScale::Root
    }
}

impl<T> From<Power<T>> for AnyScale<T> {
    fn from(scale: Power<T>) -> Self {
        AnyScale::Power(scale)
    }
}

impl<T> From<Hyperbolic<T>> for AnyScale<T> {
    fn from(scale: Hyperbolic<T>) -> Self {
        AnyScale::Hyperbolic(scale)
    }
}

impl<T> From<Custom<T>> for AnyScale<T> {
    fn from(scale: Custom<T>) -> Self {
        AnyScale::Custom(scale)
    }
}

impl<T: Float + fmt::Display> fmt::Display for AnyScale<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyScale::Linear => fmt::Display::fmt(&Linear, f),
            AnyScale::Sine => fmt::Display::fmt(&Sine, f),
            AnyScale::Circle => fmt::Display::fmt(&Circle, f),
            AnyScale::Square => fmt::Display::fmt(&Square, f),
            AnyScale::Root => fmt::Display::fmt(&Root, f),
            AnyScale::Power(scale) => fmt::Display::fmt(scale, f),
            AnyScale::Hyperbolic(scale) => fmt::Display::fmt(scale, f),
            AnyScale::Inverse(scale) => write!(f, "({scale})⁻¹"),
            AnyScale::Custom(scale) => fmt::Display::fmt(scale, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_reports_same_kind() {
        for kind in ScaleKind::PRESETS {
            let scale = AnyScale::<f64>::from_kind(kind).unwrap();
            assert_eq!(scale.kind(), kind);
        }
    }

    #[test]
    fn test_from_kind_custom_fails() {
        assert!(matches!(
            AnyScale::<f64>::from_kind(ScaleKind::Custom),
            Err(Error::NotPreset(ScaleKind::Custom))
        ));
    }

    #[test]
    fn test_default_is_identity() {
        let scale = AnyScale::<f64>::default();
        assert!(scale.is_linear());
        assert_eq!(scale.convert(0.3), 0.3);
        assert_eq!(scale.inverse(0.7), 0.7);
    }

    #[test]
    fn test_kind_derived_from_parameter() {
        assert_eq!(
            AnyScale::<f64>::power(std::f64::consts::E).unwrap().kind(),
            ScaleKind::Power
        );
        assert_eq!(AnyScale::<f64>::power(3.0).unwrap().kind(), ScaleKind::Custom);
        assert_eq!(AnyScale::<f64>::hyperbolic(2.0).unwrap().kind(), ScaleKind::Hyperbolic);
        assert_eq!(AnyScale::<f64>::hyperbolic(5.0).unwrap().kind(), ScaleKind::Custom);
        assert!(AnyScale::<f64>::power(-1.0).is_err());
        assert!(AnyScale::<f64>::hyperbolic(0.5).is_err());
    }

    #[test]
    fn test_invert() {
        let scale = AnyScale::<f64>::Square.invert();
        assert_eq!(scale.kind(), ScaleKind::Custom);
        assert_eq!(scale.convert(0.25), 0.5);
        assert_eq!(scale.inverse(0.5), 0.25);

        let twice = scale.invert();
        assert_eq!(twice.convert(0.5), 0.25);
        assert_eq!(twice.kind(), ScaleKind::Custom);
    }

    #[test]
    fn test_custom_variant() {
        let scale = AnyScale::custom(|x: f64| x * x * x, f64::cbrt);
        assert_eq!(scale.kind(), ScaleKind::Custom);
        assert_eq!(scale.convert(0.5), 0.125);
    }

    #[test]
    fn test_from_concrete() {
        let scale: AnyScale<f64> = Root.into();
        assert_eq!(scale.kind(), ScaleKind::Root);
        let scale: AnyScale<f64> = Hyperbolic::<f64>::new(3.0).unwrap().into();
        assert_eq!(scale.kind(), ScaleKind::Custom);
    }

    #[test]
    fn test_display() {
        assert_eq!(AnyScale::<f64>::Square.invert().to_string(), "(x²)⁻¹");
        assert_eq!(AnyScale::<f64>::power(2.5).unwrap().to_string(), "x^2.5");
    }
}
