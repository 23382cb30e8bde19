use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Predefined family of a [`Scale`](super::Scale).
///
/// `Custom` covers every scale that is not one of the canonical presets:
/// inverted scales, user functions, and parameterized scales whose parameter
/// differs from the family default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Not a canonical preset.
    Custom,
    /// `y = x`
    #[default]
    Linear,
    /// `y = sin(x·π)`, invertible on `[0, ½]`.
    Sine,
    /// Lower-right quadrant of the unit circle.
    Circle,
    /// `y = x²`
    Square,
    /// `y = √x`
    Root,
    /// `y = x^e`
    Power,
    /// `y = −1/t` over `t ∈ [1/2, 2]`, renormalized.
    Hyperbolic,
}

impl ScaleKind {
    /// Every kind that [`AnyScale::from_kind`](super::AnyScale::from_kind) can build.
    pub const PRESETS: [ScaleKind; 7] = [
        ScaleKind::Linear,
        ScaleKind::Sine,
        ScaleKind::Circle,
        ScaleKind::Square,
        ScaleKind::Root,
        ScaleKind::Power,
        ScaleKind::Hyperbolic,
    ];

    /// Lower-case name, as used by [`Display`](fmt::Display) and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ScaleKind::Custom => "custom",
            ScaleKind::Linear => "linear",
            ScaleKind::Sine => "sine",
            ScaleKind::Circle => "circle",
            ScaleKind::Square => "square",
            ScaleKind::Root => "root",
            ScaleKind::Power => "power",
            ScaleKind::Hyperbolic => "hyperbolic",
        }
    }

    pub const fn is_preset(self) -> bool {
        !matches!(self, ScaleKind::Custom)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no [`ScaleKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scale kind `{0}`")]
pub struct ParseScaleKindError(pub String);

impl FromStr for ScaleKind {
    type Err = ParseScaleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        std::iter::once(ScaleKind::Custom)
            .chain(ScaleKind::PRESETS)
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseScaleKindError(s.to_owned()))
    }
}
