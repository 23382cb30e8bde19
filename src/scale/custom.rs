use std::fmt;
use std::sync::Arc;

use num_traits::Float;

use super::{Scale, ScaleKind};

type MapFn<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// A scale built from a caller-supplied forward/inverse pair.
///
/// The pair is trusted to be mutually inverse and monotonic on `[0, 1]`;
/// nothing checks it. Cloning shares the functions.
///
/// # Examples
///
/// ```
/// use rangescale::{Scale, ScaleKind, scale::Custom};
///
/// let cubic = Custom::new(|x: f64| x * x * x, f64::cbrt);
/// assert_eq!(cubic.convert(0.5), 0.125);
/// assert!((cubic.inverse(0.125) - 0.5).abs() < 1e-12);
/// assert_eq!(cubic.kind(), ScaleKind::Custom);
/// ```
#[derive(Clone)]
pub struct Custom<T = f64> {
    forward: MapFn<T>,
    inverse: MapFn<T>,
}

impl<T> Custom<T> {
    pub fn new<F, G>(forward: F, inverse: G) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
        G: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        }
    }

    /// Whether both scales share the same function pair.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.forward, &other.forward) && Arc::ptr_eq(&self.inverse, &other.inverse)
    }
}

impl<T: Float> Scale<T> for Custom<T> {
    fn convert(&self, x: T) -> T {
        (self.forward)(x)
    }

    fn inverse(&self, y: T) -> T {
        (self.inverse)(y)
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Custom
    }
}

impl<T> fmt::Debug for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("f(x)")
    }
}
