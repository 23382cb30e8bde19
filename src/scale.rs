//! Invertible nonlinear mappings of the unit interval.
//!
//! A [`Scale`] remaps a normalized slider position `x ∈ [0, 1]` to a
//! normalized value `y ∈ [0, 1]` and back. The built-in scales are
//! monotonically non-decreasing and pin both ends (`convert(0) = 0`,
//! `convert(1) = 1`), so they compose with any linear `[min, max]` range
//! without breaking ordering.
//!
//! Available scales:
//! - [`Linear`] - identity
//! - [`Sine`] - half sine wave
//! - [`Circle`] - lower-right quadrant of the unit circle
//! - [`Square`] / [`Root`] - `x²` and `√x`
//! - [`Power`] - `x^p`, default `p = e`
//! - [`Hyperbolic`] - reciprocal mapping over `[1/m, m]`, default `m = 2`
//! - [`Inverse`] - swaps the two directions of another scale
//! - [`Custom`] - caller-supplied forward/inverse pair
//!
//! [`AnyScale`] is the closed set of all of the above, built from a
//! [`ScaleKind`] with [`AnyScale::from_kind`].

mod any;
mod curve;
mod custom;
mod hyperbolic;
mod inverse;
mod kind;
mod power;
pub mod util;

pub use any::AnyScale;
pub use curve::{Circle, Linear, Root, Sine, Square};
pub use custom::Custom;
pub use hyperbolic::Hyperbolic;
pub use inverse::Inverse;
pub use kind::{ParseScaleKindError, ScaleKind};
pub use power::Power;

use num_traits::Float;

/// A monotonic, invertible transform `[0, 1] → [0, 1]`.
///
/// Both directions are pure functions of their input and the scale's own
/// parameters. Input is expected to be pre-clamped to `[0, 1]`; anything else
/// is not defended against and may come back as NaN. Use
/// [`convert_checked`](Scale::convert_checked) when the input is untrusted.
///
/// # Examples
///
/// ```
/// use rangescale::{Scale, ScaleKind, scale::{Root, Square}};
///
/// assert_eq!(Square.convert(0.5), 0.25);
/// assert_eq!(Square.inverse(0.25), 0.5);
/// assert_eq!(Root.convert(0.25), 0.5);
/// assert_eq!(Square.kind(), ScaleKind::Square);
/// ```
pub trait Scale<T: Float = f64> {
    /// Forward mapping: linear position to nonlinear value.
    fn convert(&self, x: T) -> T;

    /// Inverse mapping: nonlinear value back to linear position.
    fn inverse(&self, y: T) -> T;

    /// Which predefined family this scale belongs to.
    fn kind(&self) -> ScaleKind;

    /// Applies [`convert`](Scale::convert) in place.
    fn convert_mut(&self, x: &mut T) {
        *x = self.convert(*x);
    }

    /// Applies [`inverse`](Scale::inverse) in place.
    fn inverse_mut(&self, y: &mut T) {
        *y = self.inverse(*y);
    }

    /// Like [`convert`](Scale::convert), but returns `None` when `x` is
    /// outside `[0, 1]` or the result is not finite.
    fn convert_checked(&self, x: T) -> Option<T> {
        if !util::is_unit(x) {
            return None;
        }
        let y = self.convert(x);
        y.is_finite().then_some(y)
    }

    /// Like [`inverse`](Scale::inverse), but returns `None` when `y` is
    /// outside `[0, 1]` or the result is not finite.
    fn inverse_checked(&self, y: T) -> Option<T> {
        if !util::is_unit(y) {
            return None;
        }
        let x = self.inverse(y);
        x.is_finite().then_some(x)
    }

    /// Wraps this scale so that its two directions are swapped.
    fn inverted(self) -> Inverse<Self>
    where
        Self: Sized,
    {
        Inverse::new(self)
    }
}

impl<T: Float, S: Scale<T> + ?Sized> Scale<T> for &S {
    fn convert(&self, x: T) -> T {
        (**self).convert(x)
    }

    fn inverse(&self, y: T) -> T {
        (**self).inverse(y)
    }

    fn kind(&self) -> ScaleKind {
        (**self).kind()
    }
}

impl<T: Float, S: Scale<T> + ?Sized> Scale<T> for Box<S> {
    fn convert(&self, x: T) -> T {
        (**self).convert(x)
    }

    fn inverse(&self, y: T) -> T {
        (**self).inverse(y)
    }

    fn kind(&self) -> ScaleKind {
        (**self).kind()
    }
}
