//! A module containing [`Interval`], the boundary inclusivity mode of a
//! [`DateTimeRange`].
//!
//! [`DateTimeRange`]: crate::DateTimeRange

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The boundary inclusivity mode of a range: whether the start and end
/// instants are themselves part of the range.
///
/// The mode is a property of each range instance, not of end-presence. For
/// an unbounded range the end half of the mode is vacuous since the end is
/// never attained, but the start half still applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interval {
	/// Both boundary instants are part of the range.
	Close,
	/// Neither boundary instant is part of the range.
	Open,
	/// The start is excluded and the end is included.
	LeftOpenRightClose,
	/// The start is included and the end is excluded.
	///
	/// This is the default mode.
	#[default]
	LeftCloseRightOpen,
}
