//! Serializable descriptions of scales and ranges.
//!
//! ```toml
//! minimum = 20.0
//! maximum = 20000.0
//! step = 1.0
//! thumbs = 2
//!
//! [scale]
//! kind = "power"
//! power = 3.0
//! ```

use std::f64::consts::E;

use serde::{Deserialize, Serialize};

use crate::range::ScaledRange;
use crate::scale::{AnyScale, Hyperbolic, ScaleKind};
use crate::selection::Selection;
use crate::{Error, Result};

/// A scale by kind and optional parameter.
///
/// - `power` / `hyperbolic` take an optional `power` / `max`, defaulting to the
///   canonical preset.
/// - `custom` must set exactly one of `power` or `max`, which picks the family.
/// - every other kind takes no parameter.
/// - `inverted = true` swaps the two directions of the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleConfig {
    pub kind: ScaleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub inverted: bool,
}

impl ScaleConfig {
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn build(&self) -> Result<AnyScale<f64>> {
        let scale = match (self.kind, self.power, self.max) {
            (ScaleKind::Power, power, None) => AnyScale::power(power.unwrap_or(E))?,
            (ScaleKind::Hyperbolic, None, max) => {
                AnyScale::hyperbolic(max.unwrap_or_else(Hyperbolic::default_max))?
            }
            (ScaleKind::Hyperbolic, Some(_), _) => {
                return Err(Error::UnexpectedParameter {
                    kind: ScaleKind::Hyperbolic,
                    name: "power",
                });
            }
            (ScaleKind::Custom, Some(power), None) => AnyScale::power(power)?,
            (ScaleKind::Custom, None, Some(max)) => AnyScale::hyperbolic(max)?,
            (ScaleKind::Custom, None, None) => {
                log::debug!("custom scale config without a parameter");
                return Err(Error::MissingParameter);
            }
            (kind, _, Some(_)) => {
                return Err(Error::UnexpectedParameter { kind, name: "max" });
            }
            (kind, Some(_), None) => {
                return Err(Error::UnexpectedParameter {
                    kind,
                    name: "power",
                });
            }
            (kind, None, None) => AnyScale::from_kind(kind)?,
        };
        Ok(if self.inverted { scale.invert() } else { scale })
    }
}

impl From<ScaleKind> for ScaleConfig {
    fn from(kind: ScaleKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// A complete multi-thumb range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    pub minimum: f64,
    pub maximum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub thumbs: usize,
    pub scale: ScaleConfig,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            step: None,
            thumbs: 2,
            scale: ScaleConfig::default(),
        }
    }
}

impl RangeConfig {
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn range(&self) -> Result<ScaledRange<f64>> {
        let mut range = ScaledRange::with_scale(self.minimum, self.maximum, self.scale.build()?);
        range.set_step(self.step)?;
        Ok(range)
    }

    /// Builds the range and spreads `thumbs` values across it.
    pub fn build(&self) -> Result<Selection<f64>> {
        Selection::new(self.range()?, self.thumbs)
    }
}
