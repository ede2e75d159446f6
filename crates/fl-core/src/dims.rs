//! Active dimension count.

use std::fmt;

use crate::Axis;

/// Number of active spatial dimensions, always in `1..=3`.
///
/// Out-of-range requests are clamped rather than rejected, so a `Dimensions`
/// value is valid by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "usize", into = "usize"))]
pub struct Dimensions(u8);

impl Dimensions {
    pub const MAX: usize = 3;

    pub const ONE: Dimensions = Dimensions(1);
    pub const TWO: Dimensions = Dimensions(2);
    pub const THREE: Dimensions = Dimensions(3);

    /// Clamp `n` into `1..=3`.
    #[inline]
    pub fn clamped(n: usize) -> Self {
        Dimensions(n.clamp(1, Self::MAX) as u8)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// `true` if `axis` participates in this dimensionality.
    #[inline]
    pub fn contains(self, axis: Axis) -> bool {
        axis.ordinal() < self.get()
    }

    /// The active axes in x, y, z order.
    #[inline]
    pub fn axes(self) -> impl Iterator<Item = Axis> + Clone {
        Axis::ALL.into_iter().take(self.get())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::TWO
    }
}

impl From<usize> for Dimensions {
    fn from(n: usize) -> Self {
        Self::clamped(n)
    }
}

impl From<Dimensions> for usize {
    fn from(d: Dimensions) -> usize {
        d.get()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.0)
    }
}
