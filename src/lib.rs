//! Nonlinear slider scales
//!
//! `rangescale` provides the arithmetic behind a nonlinear, multi-thumb range
//! slider: invertible transforms of the unit interval that bend the track,
//! and a plain-number model of the slider's bounds, steps, and thumbs.
//! Nothing here draws, routes input, or owns widgets; a UI layer calls in
//! at two points, turning a thumb position into a value and back.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! A [`Scale`] maps a normalized track position `x ∈ [0, 1]` to a normalized
//! value `y ∈ [0, 1]` and back:
//! - `convert(0) = 0`, `convert(1) = 1` and monotonic for every built-in
//!   except [`scale::Sine`], which peaks at `x = ½`
//! - `inverse(convert(x)) ≈ x` (for `Sine`, on `[0, ½]`)
//! - out-of-domain input yields NaN rather than an error
//!
//! Available scales live in [`scale`]: [`scale::Linear`], [`scale::Sine`],
//! [`scale::Circle`], [`scale::Square`], [`scale::Root`], [`scale::Power`],
//! [`scale::Hyperbolic`], [`scale::Inverse`] and [`scale::Custom`].
//! [`AnyScale`] holds any of them, and [`ScaleKind`] names the presets.
//!
//! ## Ranges
//!
//! [`ScaledRange`] puts a scale between a track position and a
//! `[minimum, maximum]` value range with optional step snapping.
//! [`Selection`] keeps one ordered value per thumb inside such a range.
//!
//! # Examples
//!
//! ## Converting Through a Scale
//!
//! ```rust
//! use rangescale::{AnyScale, Scale, ScaleKind};
//!
//! let scale = AnyScale::<f64>::from_kind(ScaleKind::Square).unwrap();
//! assert_eq!(scale.convert(0.5), 0.25);
//! assert_eq!(scale.inverse(0.25), 0.5);
//! ```
//!
//! ## Presets and Custom Parameters
//!
//! ```rust
//! use rangescale::{Scale, ScaleKind, scale::Power};
//!
//! assert_eq!(Power::<f64>::default().kind(), ScaleKind::Power);
//! assert_eq!(Power::<f64>::new(3.0).unwrap().kind(), ScaleKind::Custom);
//! assert!(Power::<f64>::new(-1.0).is_err());
//! ```
//!
//! ## A Two-Thumb Range
//!
//! ```rust
//! use rangescale::{AnyScale, ScaledRange, Selection};
//!
//! let range = ScaledRange::with_scale(0.0, 1000.0, AnyScale::<f64>::Square)
//!     .with_step(10.0)
//!     .unwrap();
//! let mut selection = Selection::new(range, 2).unwrap();
//!
//! // The user drags the upper thumb to the middle of the track.
//! selection.drag_to(1, 0.5).unwrap();
//! assert_eq!(selection.values(), &[0.0, 250.0]);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use rangescale::{ScaleKind, config::RangeConfig};
//!
//! let config = RangeConfig::from_toml(
//!     r#"
//!     minimum = 20.0
//!     maximum = 20000.0
//!     thumbs = 2
//!
//!     [scale]
//!     kind = "hyperbolic"
//!     "#,
//! )
//! .unwrap();
//! let selection = config.build().unwrap();
//! assert_eq!(selection.kind(), ScaleKind::Hyperbolic);
//! ```

pub mod config;
mod error;
pub mod range;
pub mod scale;
pub mod selection;

pub use error::{Error, Result};
pub use num_traits::Float;
pub use range::ScaledRange;
pub use scale::{AnyScale, Scale, ScaleKind};
pub use selection::{RangeChanged, Selection};
