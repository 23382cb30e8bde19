//! Numeric bounds of a slider, seen through a [`Scale`].
//!
//! [`ScaledRange`] is the arithmetic half of a range slider: it knows the
//! `[minimum, maximum]` bounds, an optional step frequency, and the scale
//! that bends the track. It converts between normalized thumb positions (or
//! pixel offsets along the track) and values, and nothing else.
//!
//! ```text
//!   position ──clamp──► scale.convert ──lerp(min, max)──► snap ──► value
//!   value ──clamp──► normalize ──clamp──► scale.inverse ──► position
//! ```

use num_traits::{Float, FloatConst};

use crate::scale::{AnyScale, Scale, ScaleKind, util};
use crate::{Error, Result};

/// Gap kept between the bounds when they would otherwise meet or cross.
pub const EPSILON: f64 = 0.01;

/// Slider bounds with a step frequency and a nonlinear scale.
///
/// # Bounds
///
/// `minimum < maximum` always holds. Inverted bounds collapse onto the
/// maximum, and equal bounds are pushed apart by [`EPSILON`], or by at least
/// one representable step where `EPSILON` is too small to register.
///
/// # Examples
///
/// ```
/// use rangescale::{AnyScale, ScaledRange};
///
/// let range = ScaledRange::with_scale(0.0, 100.0, AnyScale::<f64>::Square);
///
/// // Halfway along the track is a quarter of the value range.
/// assert_eq!(range.value_at(0.5), 25.0);
/// assert_eq!(range.position_of(25.0), 0.5);
///
/// // Steps snap values, and the last partial step snaps to the maximum.
/// let range = ScaledRange::<f64>::new(0.0, 10.0).with_step(3.0).unwrap();
/// assert_eq!(range.snap(4.0), 3.0);
/// assert_eq!(range.snap(9.5), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScaledRange<T = f64, S = AnyScale<T>> {
    minimum: T,
    maximum: T,
    step: Option<T>,
    scale: S,
}

impl<T: Float + FloatConst> ScaledRange<T> {
    /// A linear range over `[minimum, maximum]` with no step.
    pub fn new(minimum: T, maximum: T) -> Self {
        Self::with_scale(minimum, maximum, AnyScale::Linear)
    }
}

impl<T: Float + FloatConst> Default for ScaledRange<T> {
    /// `[0, 1]`, linear, no step.
    fn default() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Float, S: Scale<T>> ScaledRange<T, S> {
    pub fn with_scale(minimum: T, maximum: T, scale: S) -> Self {
        let (minimum, maximum) = normalize_bounds(minimum, maximum);
        Self {
            minimum,
            maximum,
            step: None,
            scale,
        }
    }

    /// Sets the step frequency values snap to.
    pub fn with_step(mut self, step: T) -> Result<Self> {
        self.set_step(Some(step))?;
        Ok(self)
    }

    /// Sets or clears the step frequency. `step` must be finite and positive.
    pub fn set_step(&mut self, step: Option<T>) -> Result<()> {
        if let Some(step) = step {
            if !(step > T::zero() && step.is_finite()) {
                let step = step.to_f64().unwrap_or(f64::NAN);
                log::debug!("rejected step frequency {step}");
                return Err(Error::InvalidStep { step });
            }
        }
        self.step = step;
        Ok(())
    }

    pub fn minimum(&self) -> T {
        self.minimum
    }

    pub fn maximum(&self) -> T {
        self.maximum
    }

    pub fn step(&self) -> Option<T> {
        self.step
    }

    pub fn span(&self) -> T {
        self.maximum - self.minimum
    }

    pub fn scale(&self) -> &S {
        &self.scale
    }

    /// Replaces the scale, returning the previous one.
    pub fn set_scale(&mut self, scale: S) -> S {
        std::mem::replace(&mut self.scale, scale)
    }

    /// Kind of the current scale.
    pub fn kind(&self) -> ScaleKind {
        self.scale.kind()
    }

    /// Replaces both bounds, normalizing them like [`with_scale`](Self::with_scale).
    pub fn set_bounds(&mut self, minimum: T, maximum: T) {
        (self.minimum, self.maximum) = normalize_bounds(minimum, maximum);
    }

    /// Moves the minimum, pushing the maximum up if they would meet.
    pub fn set_minimum(&mut self, minimum: T) {
        self.minimum = minimum;
        if self.maximum <= minimum {
            self.maximum = minimum + bound_gap(minimum);
        }
    }

    /// Moves the maximum, pushing the minimum down if they would meet.
    pub fn set_maximum(&mut self, maximum: T) {
        self.maximum = maximum;
        if self.minimum >= maximum {
            self.minimum = maximum - bound_gap(maximum);
        }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Clamps `value` into `[minimum, maximum]`.
    pub fn clamp(&self, value: T) -> T {
        value.max(self.minimum).min(self.maximum)
    }

    /// Linear fraction of the span at `value`. Not clamped.
    pub fn normalize(&self, value: T) -> T {
        (value - self.minimum) / self.span()
    }

    /// Value at linear fraction `t` of the span. Not clamped.
    pub fn denormalize(&self, t: T) -> T {
        util::lerp(self.minimum, self.maximum, t)
    }

    /// Rounds `value` to the nearest step from the minimum and clamps it.
    ///
    /// Halfway values round to the even step. A value in the final, partial
    /// step snaps to the maximum. Without a step this only clamps. NaN
    /// becomes the minimum either way.
    pub fn snap(&self, value: T) -> T {
        let Some(step) = self.step else {
            return self.clamp(value);
        };
        let steps = util::round_half_even((value - self.minimum) / step);
        let mut snapped = self.minimum + steps * step;
        // Slack keeps accumulated rounding in `snapped` from swallowing the
        // last whole step.
        let slack = step * util::lit(1e-9);
        if snapped > self.maximum || self.maximum - snapped < step - slack {
            snapped = self.maximum;
        }
        let snapped = self.clamp(snapped);
        log::trace!(
            "snapped {} to {}",
            value.to_f64().unwrap_or(f64::NAN),
            snapped.to_f64().unwrap_or(f64::NAN)
        );
        snapped
    }

    /// Value under a normalized track position.
    pub fn value_at(&self, position: T) -> T {
        let t = self.scale.convert(util::clamp_unit(position));
        self.snap(self.denormalize(t))
    }

    /// Normalized track position of a value.
    pub fn position_of(&self, value: T) -> T {
        let t = util::clamp_unit(self.normalize(self.clamp(value)));
        self.scale.inverse(t)
    }

    /// Value under a pixel `offset` along a track `extent` pixels long.
    pub fn value_at_offset(&self, offset: T, extent: T) -> T {
        if extent > T::zero() {
            self.value_at(offset / extent)
        } else {
            self.value_at(T::zero())
        }
    }

    /// Pixel offset of a value along a track `extent` pixels long.
    pub fn offset_of(&self, value: T, extent: T) -> T {
        self.position_of(value) * extent.max(T::zero())
    }
}

/// Gap that keeps a bound strictly apart from `bound`: [`EPSILON`], or one
/// relative machine epsilon where the bound is too large for it to register.
fn bound_gap<T: Float>(bound: T) -> T {
    util::lit::<T>(EPSILON).max(bound.abs() * T::epsilon())
}

fn normalize_bounds<T: Float>(minimum: T, maximum: T) -> (T, T) {
    let minimum = if minimum > maximum {
        log::debug!("minimum above maximum, collapsing onto maximum");
        maximum
    } else {
        minimum
    };
    if minimum == maximum {
        (minimum, maximum + bound_gap(maximum))
    } else {
        (minimum, maximum)
    }
}
