//! Ordered thumb values of a multi-thumb range slider.
//!
//! A [`Selection`] owns a [`ScaledRange`] and one value per thumb. Values
//! always satisfy `minimum <= values[0] <= values[1] <= ... <= maximum`:
//! moving a thumb past its neighbours drags them along instead of letting
//! the thumbs cross.

use num_traits::{Float, FloatConst};

use crate::range::ScaledRange;
use crate::scale::{AnyScale, Scale, ScaleKind};
use crate::{Error, Result};

/// Reported by [`Selection::set`] when a thumb's stored value changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeChanged<T = f64> {
    /// Index of the thumb that was moved.
    pub thumb: usize,
    pub old: T,
    pub new: T,
}

/// Thumb values inside a [`ScaledRange`].
///
/// # Examples
///
/// ```
/// use rangescale::{Selection, ScaledRange};
///
/// let range = ScaledRange::<f64>::new(0.0, 100.0).with_step(1.0).unwrap();
/// let mut selection = Selection::new(range, 3).unwrap();
/// assert_eq!(selection.values(), &[0.0, 50.0, 100.0]);
///
/// // Dragging the first thumb past the second pushes it along.
/// let change = selection.set(0, 70.2).unwrap().unwrap();
/// assert_eq!((change.old, change.new), (0.0, 70.0));
/// assert_eq!(selection.values(), &[70.0, 70.0, 100.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Selection<T = f64, S = AnyScale<T>> {
    range: ScaledRange<T, S>,
    values: Vec<T>,
}

impl<T: Float + FloatConst> Default for Selection<T> {
    /// Two thumbs over `[0, 1]`, at both ends.
    fn default() -> Self {
        Self {
            range: ScaledRange::default(),
            values: vec![T::zero(), T::one()],
        }
    }
}

impl<T: Float, S: Scale<T>> Selection<T, S> {
    /// Spreads `thumbs` values evenly from the minimum to the maximum.
    ///
    /// A single thumb starts at the minimum.
    pub fn new(range: ScaledRange<T, S>, thumbs: usize) -> Result<Self> {
        Self::from_values(range, vec![None; thumbs])
    }

    /// Builds a selection from partially known values.
    ///
    /// The first and last thumbs default to the minimum and maximum. Every
    /// run of unset thumbs is spread evenly between its set neighbours. The
    /// result is clamped into the range and then made non-decreasing by
    /// lowering any thumb that sits above the one after it.
    pub fn from_values<I>(range: ScaledRange<T, S>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut slots: Vec<Option<T>> = values.into_iter().collect();
        let len = slots.len();
        if len == 0 {
            return Err(Error::NoThumbs);
        }

        if slots[0].is_none() {
            slots[0] = Some(range.minimum());
        }
        if slots[len - 1].is_none() {
            slots[len - 1] = Some(range.maximum());
        }

        let anchors: Vec<(usize, T)> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|value| (i, value)))
            .collect();
        let mut values = vec![T::zero(); len];
        for pair in anchors.windows(2) {
            let ((lo, start), (hi, end)) = (pair[0], pair[1]);
            let gaps = T::from(hi - lo).unwrap_or_else(T::one);
            for (k, value) in values[lo..hi].iter_mut().enumerate() {
                let k = T::from(k).unwrap_or_else(T::zero);
                *value = start + (end - start) * k / gaps;
            }
        }
        let (last, end) = anchors[anchors.len() - 1];
        values[last] = end;

        for value in values.iter_mut() {
            *value = range.clamp(*value);
        }
        for i in (0..len - 1).rev() {
            if values[i] > values[i + 1] {
                values[i] = values[i + 1];
            }
        }

        Ok(Self { range, values })
    }

    pub fn range(&self) -> &ScaledRange<T, S> {
        &self.range
    }

    /// Number of thumbs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a selection has at least one thumb.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn value(&self, thumb: usize) -> Option<T> {
        self.values.get(thumb).copied()
    }

    /// Lowest and highest thumb values.
    pub fn span(&self) -> (T, T) {
        (self.values[0], self.values[self.values.len() - 1])
    }

    pub fn kind(&self) -> ScaleKind {
        self.range.kind()
    }

    /// Normalized track positions of every thumb.
    pub fn positions(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().map(|&value| self.range.position_of(value))
    }

    /// Moves a thumb to `value`, snapped and clamped to the range.
    ///
    /// Thumbs above it that fall below the new value, and thumbs below it
    /// that rise above, are moved onto it. Returns the change to the moved
    /// thumb, or `None` if its stored value is unchanged.
    pub fn set(&mut self, thumb: usize, value: T) -> Result<Option<RangeChanged<T>>> {
        let len = self.values.len();
        if thumb >= len {
            return Err(Error::ThumbIndex { index: thumb, len });
        }

        let new = self.range.snap(value);
        let old = std::mem::replace(&mut self.values[thumb], new);

        let mut pushed = 0;
        for other in &mut self.values[thumb + 1..] {
            if *other < new {
                *other = new;
                pushed += 1;
            }
        }
        for other in &mut self.values[..thumb] {
            if *other > new {
                *other = new;
                pushed += 1;
            }
        }
        if pushed > 0 {
            log::debug!("thumb {thumb} pushed {pushed} neighbouring thumbs");
        }

        Ok((old != new).then_some(RangeChanged { thumb, old, new }))
    }

    /// Moves a thumb to the value under a normalized track position.
    pub fn drag_to(&mut self, thumb: usize, position: T) -> Result<Option<RangeChanged<T>>> {
        let value = self.range.value_at(position);
        self.set(thumb, value)
    }

    /// Moves a thumb to the value under a pixel offset along the track.
    pub fn drag_to_offset(
        &mut self,
        thumb: usize,
        offset: T,
        extent: T,
    ) -> Result<Option<RangeChanged<T>>> {
        let value = self.range.value_at_offset(offset, extent);
        self.set(thumb, value)
    }

    /// Replaces the range bounds and clamps every thumb into them.
    pub fn set_bounds(&mut self, minimum: T, maximum: T) {
        self.range.set_bounds(minimum, maximum);
        self.clamp_values();
    }

    pub fn set_minimum(&mut self, minimum: T) {
        self.range.set_minimum(minimum);
        self.clamp_values();
    }

    pub fn set_maximum(&mut self, maximum: T) {
        self.range.set_maximum(maximum);
        self.clamp_values();
    }

    /// Replaces the scale. Values stay put; their positions move.
    pub fn set_scale(&mut self, scale: S) -> S {
        self.range.set_scale(scale)
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    fn clamp_values(&mut self) {
        let range = &self.range;
        for value in self.values.iter_mut() {
            *value = range.clamp(*value);
        }
    }
}
