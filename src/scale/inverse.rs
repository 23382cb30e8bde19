use std::fmt;

use num_traits::Float;

use super::{Scale, ScaleKind};

/// Swaps the two directions of a wrapped scale.
///
/// `Inverse(s).convert(y) == s.inverse(y)` and vice versa. The result is never
/// a preset, so its kind is always [`ScaleKind::Custom`].
///
/// # Examples
///
/// ```
/// use rangescale::{Scale, ScaleKind, scale::{Inverse, Square}};
///
/// let root_like = Inverse::new(Square);
/// assert_eq!(root_like.convert(0.25), 0.5);
/// assert_eq!(root_like.kind(), ScaleKind::Custom);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inverse<S> {
    scale: S,
}

impl<S> Inverse<S> {
    pub const fn new(scale: S) -> Self {
        Self { scale }
    }

    /// The wrapped scale.
    pub fn get(&self) -> &S {
        &self.scale
    }

    pub fn into_inner(self) -> S {
        self.scale
    }

    pub const fn kind(&self) -> ScaleKind {
        ScaleKind::Custom
    }
}

impl<T: Float, S: Scale<T>> Scale<T> for Inverse<S> {
    fn convert(&self, x: T) -> T {
        self.scale.inverse(x)
    }

    fn inverse(&self, y: T) -> T {
        self.scale.convert(y)
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Custom
    }
}

impl<S: fmt::Display> fmt::Display for Inverse<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})⁻¹", self.scale)
    }
}
