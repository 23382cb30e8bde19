use crate::scale::ScaleKind;

/// Everything that can go wrong when building scales, ranges, and selections.
///
/// Converting a value is never an error: out-of-domain input comes back as
/// NaN instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("power scale exponent must lie in (0, ∞), got {power}")]
    InvalidPower { power: f64 },

    #[error("hyperbolic scale max must lie in (1, ∞), got {max}")]
    InvalidMax { max: f64 },

    #[error("step frequency must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("a selection needs at least one thumb")]
    NoThumbs,

    #[error("thumb {index} is out of range for a selection of {len}")]
    ThumbIndex { index: usize, len: usize },

    #[error("`{0}` has no canonical scale")]
    NotPreset(ScaleKind),

    #[error("a custom scale config must set either `power` or `max`")]
    MissingParameter,

    #[error("`{name}` does not apply to a `{kind}` scale")]
    UnexpectedParameter { kind: ScaleKind, name: &'static str },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
