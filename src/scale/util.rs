use num_traits::Float;

/// Convert an `f64` literal into the scale's float type.
///
/// Every `Float` the crate targets can represent the small constants used
/// here, so the conversion is infallible in practice.
pub fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Clamp `t` into `[0, 1]`. NaN stays NaN.
pub fn clamp_unit<T: Float>(t: T) -> T {
    if t < T::zero() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    }
}

/// Whether `t` lies in the closed unit interval.
pub fn is_unit<T: Float>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Round to the nearest integer, halfway cases to the even one.
pub fn round_half_even<T: Float>(t: T) -> T {
    let rounded = t.round();
    let half = lit::<T>(0.5);
    if (rounded - t).abs() == half {
        (t * half).round() / half
    } else {
        rounded
    }
}

/// Linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
