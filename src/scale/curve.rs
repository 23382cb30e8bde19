//! Parameterless preset curves.

use std::fmt;

use num_traits::{Float, FloatConst};

use super::{Scale, ScaleKind};

/// Identity scale: `y = x`.
///
/// This is the mapping in effect when no scale is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Linear;

/// Half sine wave: `y = sin(x·π)`, `x = asin(y)/π`.
///
/// Rises from `0` to `1` over `[0, ½]` and falls back to `0` at `x = 1`.
/// `inverse` only returns the rising half, so the round trip
/// `inverse(convert(x)) == x` holds on `[0, ½]` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sine;

/// Lower-right quadrant of the unit circle centred at `(0, 1)`:
/// `y = 1 − √(1 − x²)`.
///
/// Flat near `0`, vertical at `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Circle;

/// `y = x²`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Square;

/// `y = √x`, the inverse of [`Square`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Root;

impl Linear {
    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }
}

impl Sine {
    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Sine
    }
}

impl Circle {
    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Circle
    }
}

impl Square {
    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Square
    }
}

impl Root {
    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Root
    }
}

impl<T: Float> Scale<T> for Linear {
    fn convert(&self, x: T) -> T {
        x
    }

    fn inverse(&self, y: T) -> T {
        y
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }
}

impl<T: Float + FloatConst> Scale<T> for Sine {
    fn convert(&self, x: T) -> T {
        (x * T::PI()).sin()
    }

    fn inverse(&self, y: T) -> T {
        y.asin() / T::PI()
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Sine
    }
}

impl<T: Float> Scale<T> for Circle {
    // 1 − √(1 − x²) rewritten to avoid cancellation near 0.
    fn convert(&self, x: T) -> T {
        let x2 = x * x;
        x2 / (T::one() + (T::one() - x2).sqrt())
    }

    // √(1 − (y − 1)²) == √(y·(2 − y))
    fn inverse(&self, y: T) -> T {
        let two = T::one() + T::one();
        (y * (two - y)).sqrt()
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Circle
    }
}

impl<T: Float> Scale<T> for Square {
    fn convert(&self, x: T) -> T {
        x * x
    }

    fn inverse(&self, y: T) -> T {
        y.sqrt()
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Square
    }
}

impl<T: Float> Scale<T> for Root {
    fn convert(&self, x: T) -> T {
        x.sqrt()
    }

    fn inverse(&self, y: T) -> T {
        y * y
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Root
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("x")
    }
}

impl fmt::Display for Sine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sin(πx)")
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("1 − √(1 − x²)")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("x²")
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("√x")
    }
}
