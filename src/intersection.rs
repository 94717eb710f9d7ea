//! A module containing [`Intersection`], the classification of how one
//! [`DateTimeRange`] relates to another.
//!
//! [`DateTimeRange`]: crate::DateTimeRange

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The classification of the intersection between a receiver range and an
/// argument range, as returned by [`intersection_type()`].
///
/// [`intersection_type()`]: crate::DateTimeRange::intersection_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intersection {
	/// The ranges are disjoint.
	None,
	/// A boundary instant of the argument falls inside the receiver, but
	/// the argument is neither fully contained nor fully containing.
	PartiallyInRange,
	/// The ranges are identical in start, end and interval mode.
	RangesEqualed,
	/// The argument is fully inside the receiver.
	ContainedInRange,
	/// The receiver is fully inside the argument.
	ContainsRange,
}
