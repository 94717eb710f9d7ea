//! A module containing [`DateTimeRange`] and its various constructor
//! functions.

use core::fmt;
use core::ops::{Bound, Range, RangeBounds, RangeFrom, RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Intersection, Interval};

/// The marker trait for valid instant types, a blanket implementation is
/// provided for all types which implement this trait's super-traits so you
/// shouldn't need to implement this yourself.
///
/// Any ordered `Copy` type works as an instant: `chrono::DateTime<Utc>`,
/// `chrono::NaiveDate`, or plain integers in tests.
pub trait TimePoint: Ord + Copy {}
impl<T> TimePoint for T where T: Ord + Copy {}

/// The error returned when constructing a range whose start does not come
/// strictly before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError;

impl fmt::Display for InvalidRangeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("invalid range: start must be strictly before end")
	}
}

impl std::error::Error for InvalidRangeError {}

/// A range between two points in time with a configurable boundary
/// inclusivity mode.
///
/// `T` is the generic type parameter for the instant type the range is
/// over, typically a date-time type such as `chrono::DateTime<Utc>`.
///
/// A range always has a start. A range whose end is absent is unbounded
/// and extends to positive infinity. Construction enforces `start < end`
/// for bounded ranges, so every value of this type is a non-empty range.
///
/// Equality and hashing are structural over start, end and [`Interval`]
/// mode: two ranges carrying different modes are never equal, even when
/// they denote the same set of instants.
///
/// Values are immutable; [`with_interval()`] returns a new value rather
/// than mutating in place.
///
/// # Examples
/// ```
/// use dtrange::{DateTimeRange, Intersection, Interval};
///
/// let morning =
/// 	DateTimeRange::from_parts(9, Some(12), Interval::LeftCloseRightOpen)
/// 		.unwrap();
/// let coffee_break =
/// 	DateTimeRange::from_parts(10, Some(11), Interval::LeftCloseRightOpen)
/// 		.unwrap();
///
/// assert!(morning.contains_point(9));
/// assert_eq!(
/// 	morning.intersection_type(coffee_break),
/// 	Intersection::ContainedInRange
/// );
/// ```
///
/// [`with_interval()`]: DateTimeRange::with_interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTimeRange<T> {
	start: T,
	end: Option<T>,
	interval: Interval,
}

impl<T> DateTimeRange<T>
where
	T: TimePoint,
{
	/// Makes a new bounded range from two instants with the
	/// [`Interval::Close`] mode, both boundary instants included.
	///
	/// # Errors
	///
	/// Returns [`InvalidRangeError`] if `start` is not strictly before
	/// `end`.
	///
	/// # Examples
	/// ```
	/// use dtrange::{DateTimeRange, Interval};
	///
	/// let range = DateTimeRange::new(2, 8).unwrap();
	/// assert_eq!(range.interval(), Interval::Close);
	///
	/// assert!(DateTimeRange::new(8, 2).is_err());
	/// assert!(DateTimeRange::new(2, 2).is_err());
	/// ```
	pub fn new(start: T, end: T) -> Result<Self, InvalidRangeError> {
		Self::from_parts(start, Some(end), Interval::Close)
	}

	/// Makes a new range from a start, an optional end and an [`Interval`]
	/// mode.
	///
	/// An absent `end` makes the range unbounded. Any mode is accepted for
	/// an unbounded range: the end half of the mode is vacuous since the
	/// end is never attained, the start half still applies.
	///
	/// # Errors
	///
	/// Returns [`InvalidRangeError`] if `end` is present and `start` is
	/// not strictly before it.
	///
	/// # Examples
	/// ```
	/// use dtrange::{DateTimeRange, Interval};
	///
	/// let bounded =
	/// 	DateTimeRange::from_parts(2, Some(8), Interval::Open).unwrap();
	/// assert!(!bounded.contains_point(2));
	///
	/// let unbounded =
	/// 	DateTimeRange::from_parts(2, None, Interval::LeftCloseRightOpen)
	/// 		.unwrap();
	/// assert!(unbounded.contains_point(1_000_000));
	/// ```
	pub fn from_parts(
		start: T,
		end: Option<T>,
		interval: Interval,
	) -> Result<Self, InvalidRangeError> {
		if let Some(end) = end {
			if start >= end {
				return Err(InvalidRangeError);
			}
		}

		Ok(DateTimeRange {
			start,
			end,
			interval,
		})
	}

	/// Makes a new unbounded range from a start instant with the default
	/// [`Interval::LeftCloseRightOpen`] mode.
	///
	/// # Examples
	/// ```
	/// use dtrange::{DateTimeRange, Interval};
	///
	/// let range = DateTimeRange::unbounded_from(2);
	/// assert_eq!(range.end(), None);
	/// assert_eq!(range.interval(), Interval::LeftCloseRightOpen);
	/// assert!(range.contains_point(2));
	/// ```
	pub fn unbounded_from(start: T) -> Self {
		DateTimeRange {
			start,
			end: None,
			interval: Interval::default(),
		}
	}

	/// The start of the range, inclusive or exclusive per
	/// [`interval()`](DateTimeRange::interval).
	pub const fn start(&self) -> T {
		self.start
	}

	/// The end of the range, or `None` if the range is unbounded.
	pub const fn end(&self) -> Option<T> {
		self.end
	}

	/// The boundary inclusivity mode of the range.
	pub const fn interval(&self) -> Interval {
		self.interval
	}

	/// Returns a copy of the range with a different [`Interval`] mode.
	///
	/// The mode never participates in the `start < end` invariant, so
	/// this cannot fail.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::co;
	/// use dtrange::Interval;
	///
	/// let range = co(2, 8);
	/// assert!(!range.contains_point(8));
	/// assert!(range.with_interval(Interval::Close).contains_point(8));
	/// ```
	pub fn with_interval(self, interval: Interval) -> Self {
		DateTimeRange { interval, ..self }
	}

	/// Returns `true` if the given instant lies within the range under
	/// the range's [`Interval`] mode.
	///
	/// For an unbounded range the upper comparison is always satisfied.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::{cc, co, oo};
	///
	/// assert_eq!(co(2, 8).contains_point(2), true);
	/// assert_eq!(co(2, 8).contains_point(8), false);
	/// assert_eq!(cc(2, 8).contains_point(8), true);
	/// assert_eq!(oo(2, 8).contains_point(2), false);
	/// ```
	pub fn contains_point(&self, point: T) -> bool {
		match self.interval {
			Interval::Open => {
				point > self.start && self.is_under_end_exclusive(point)
			}
			Interval::LeftCloseRightOpen => {
				point >= self.start && self.is_under_end_exclusive(point)
			}
			Interval::LeftOpenRightClose => {
				point > self.start && self.is_under_end_inclusive(point)
			}
			Interval::Close => {
				point >= self.start && self.is_under_end_inclusive(point)
			}
		}
	}

	//an absent end is never attained so both comparisons are vacuously
	//true for unbounded ranges
	fn is_under_end_exclusive(&self, point: T) -> bool {
		self.end.map_or(true, |end| point < end)
	}

	fn is_under_end_inclusive(&self, point: T) -> bool {
		self.end.map_or(true, |end| point <= end)
	}

	/// Classifies how `other` intersects this range.
	///
	/// The conditions are evaluated in a fixed precedence order and the
	/// first match wins, since several can hold at once: equality, then
	/// full containment of `other`, then partial overlap on `other`'s
	/// start or end, then full containment of `self` inside `other`, then
	/// disjointness.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::co;
	/// use dtrange::Intersection;
	///
	/// let range = co(1, 10);
	///
	/// assert_eq!(range.intersection_type(range), Intersection::RangesEqualed);
	/// assert_eq!(
	/// 	range.intersection_type(co(3, 6)),
	/// 	Intersection::ContainedInRange
	/// );
	/// assert_eq!(
	/// 	range.intersection_type(co(5, 15)),
	/// 	Intersection::PartiallyInRange
	/// );
	/// assert_eq!(
	/// 	co(3, 6).intersection_type(range),
	/// 	Intersection::ContainsRange
	/// );
	/// assert_eq!(range.intersection_type(co(20, 30)), Intersection::None);
	/// ```
	pub fn intersection_type(&self, other: Self) -> Intersection {
		if *self == other {
			Intersection::RangesEqualed
		} else if self.contains_point(other.start)
			&& other.end.map_or(true, |end| self.contains_point(end))
		{
			Intersection::ContainedInRange
		} else if self.contains_point(other.start) {
			Intersection::PartiallyInRange
		} else if other.end.is_some_and(|end| self.contains_point(end)) {
			Intersection::PartiallyInRange
		} else if other.contains_point(self.start)
			&& self.end.map_or(true, |end| other.contains_point(end))
		{
			Intersection::ContainsRange
		} else {
			Intersection::None
		}
	}

	/// Returns `true` if `other` intersects this range in any way.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::co;
	///
	/// assert_eq!(co(1, 10).intersects(co(5, 15)), true);
	/// assert_eq!(co(1, 2).intersects(co(5, 6)), false);
	/// ```
	pub fn intersects(&self, other: Self) -> bool {
		self.intersection_type(other) != Intersection::None
	}

	/// Computes the range over which this range and `other` intersect,
	/// or `None` if they do not.
	///
	/// A fully contained range comes back unchanged, mode included. A
	/// partial overlap is rebuilt from the two overlapping boundary
	/// instants with [`new()`](DateTimeRange::new) and therefore carries
	/// the [`Interval::Close`] mode. A partial overlap that collapses to
	/// a single shared boundary instant cannot be represented as a
	/// non-empty range and also comes back as `None`.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::{cc, co};
	///
	/// assert_eq!(co(1, 10).intersection(co(5, 15)), Some(cc(5, 10)));
	/// assert_eq!(co(1, 10).intersection(co(3, 6)), Some(co(3, 6)));
	/// assert_eq!(co(3, 6).intersection(co(1, 10)), Some(co(3, 6)));
	/// assert_eq!(co(1, 2).intersection(co(5, 6)), None);
	/// ```
	pub fn intersection(&self, other: Self) -> Option<Self> {
		match self.intersection_type(other) {
			Intersection::RangesEqualed | Intersection::ContainedInRange => {
				Some(other)
			}
			Intersection::PartiallyInRange => {
				if self.contains_point(other.start) {
					//the end is always present here, an unbounded range
					//containing other's start would have contained all of
					//other
					self.end.and_then(|end| {
						DateTimeRange::new(other.start, end).ok()
					})
				} else {
					other.end.and_then(|end| {
						DateTimeRange::new(self.start, end).ok()
					})
				}
			}
			Intersection::ContainsRange => Some(*self),
			Intersection::None => None,
		}
	}
}

impl<T> fmt::Display for DateTimeRange<T>
where
	T: TimePoint + fmt::Display,
{
	/// Renders the range as its two instants separated by `", "` and
	/// wrapped in bracket pairs per the [`Interval`] mode, an unbounded
	/// end rendering as nothing after the separator.
	///
	/// # Examples
	/// ```
	/// use dtrange::range::{cc, co, cu, oo};
	///
	/// assert_eq!(oo(2, 8).to_string(), "]2, 8[");
	/// assert_eq!(co(2, 8).to_string(), "[2, 8[");
	/// assert_eq!(cc(2, 8).to_string(), "[2, 8]");
	/// assert_eq!(cu(2).to_string(), "[2, [");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (left, right) = match self.interval {
			Interval::Open => ("]", "["),
			Interval::LeftCloseRightOpen => ("[", "["),
			Interval::LeftOpenRightClose => ("]", "]"),
			Interval::Close => ("[", "]"),
		};

		write!(f, "{left}{}, ", self.start)?;
		if let Some(end) = self.end {
			write!(f, "{end}")?;
		}
		f.write_str(right)
	}
}

impl<T> RangeBounds<T> for DateTimeRange<T>
where
	T: TimePoint,
{
	fn start_bound(&self) -> Bound<&T> {
		match self.interval {
			Interval::Close | Interval::LeftCloseRightOpen => {
				Bound::Included(&self.start)
			}
			Interval::Open | Interval::LeftOpenRightClose => {
				Bound::Excluded(&self.start)
			}
		}
	}

	fn end_bound(&self) -> Bound<&T> {
		match (self.end.as_ref(), self.interval) {
			(None, _) => Bound::Unbounded,
			(Some(end), Interval::Close | Interval::LeftOpenRightClose) => {
				Bound::Included(end)
			}
			(Some(end), Interval::Open | Interval::LeftCloseRightOpen) => {
				Bound::Excluded(end)
			}
		}
	}
}

impl<T> TryFrom<Range<T>> for DateTimeRange<T>
where
	T: TimePoint,
{
	type Error = InvalidRangeError;

	fn try_from(range: Range<T>) -> Result<Self, InvalidRangeError> {
		DateTimeRange::from_parts(
			range.start,
			Some(range.end),
			Interval::LeftCloseRightOpen,
		)
	}
}

impl<T> TryFrom<RangeInclusive<T>> for DateTimeRange<T>
where
	T: TimePoint,
{
	type Error = InvalidRangeError;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, InvalidRangeError> {
		let (start, end) = range.into_inner();
		DateTimeRange::new(start, end)
	}
}

impl<T> From<RangeFrom<T>> for DateTimeRange<T>
where
	T: TimePoint,
{
	fn from(range: RangeFrom<T>) -> Self {
		DateTimeRange::unbounded_from(range.start)
	}
}

/// A close-close range, both boundary instants included.
///
/// # Panics
///
/// Panics if `start` is not strictly before `end`.
pub fn cc<T: TimePoint>(start: T, end: T) -> DateTimeRange<T> {
	DateTimeRange::from_parts(start, Some(end), Interval::Close).unwrap()
}
/// A close-open range, start included, end excluded.
///
/// # Panics
///
/// Panics if `start` is not strictly before `end`.
pub fn co<T: TimePoint>(start: T, end: T) -> DateTimeRange<T> {
	DateTimeRange::from_parts(start, Some(end), Interval::LeftCloseRightOpen)
		.unwrap()
}
/// An open-close range, start excluded, end included.
///
/// # Panics
///
/// Panics if `start` is not strictly before `end`.
pub fn oc<T: TimePoint>(start: T, end: T) -> DateTimeRange<T> {
	DateTimeRange::from_parts(start, Some(end), Interval::LeftOpenRightClose)
		.unwrap()
}
/// An open-open range, both boundary instants excluded.
///
/// # Panics
///
/// Panics if `start` is not strictly before `end`.
pub fn oo<T: TimePoint>(start: T, end: T) -> DateTimeRange<T> {
	DateTimeRange::from_parts(start, Some(end), Interval::Open).unwrap()
}
/// A close-unbounded range, start included, extending forever.
pub fn cu<T: TimePoint>(start: T) -> DateTimeRange<T> {
	DateTimeRange::unbounded_from(start)
}
/// An open-unbounded range, start excluded, extending forever.
pub fn ou<T: TimePoint>(start: T) -> DateTimeRange<T> {
	DateTimeRange::unbounded_from(start).with_interval(Interval::Open)
}

#[cfg(test)]
mod tests {
	use core::ops::Bound;
	use std::collections::hash_map::DefaultHasher;
	use std::hash::{Hash, Hasher};

	use chrono::{DateTime, TimeZone, Utc};
	use pretty_assertions::{assert_eq, assert_ne};

	use super::*;

	fn jan(day: u32) -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
	}

	#[test]
	fn boundary_membership_per_mode() {
		let test_cases = [
			(Interval::Close, true, true),
			(Interval::Open, false, false),
			(Interval::LeftCloseRightOpen, true, false),
			(Interval::LeftOpenRightClose, false, true),
		];

		for (interval, at_start, at_end) in test_cases {
			let range = DateTimeRange::from_parts(2, Some(8), interval).unwrap();

			assert_eq!(range.contains_point(2), at_start);
			assert_eq!(range.contains_point(8), at_end);
			assert!(range.contains_point(5));
			assert!(!range.contains_point(1));
			assert!(!range.contains_point(9));
		}
	}

	#[test]
	fn unbounded_range_membership_per_mode() {
		let test_cases = [
			(Interval::Close, true),
			(Interval::LeftCloseRightOpen, true),
			(Interval::Open, false),
			(Interval::LeftOpenRightClose, false),
		];

		for (interval, contains_start) in test_cases {
			let range = DateTimeRange::from_parts(1, None, interval).unwrap();

			assert_eq!(range.contains_point(1), contains_start);
			assert!(range.contains_point(2));
			assert!(range.contains_point(i32::MAX));
			assert!(!range.contains_point(0));
		}
	}

	#[test]
	fn construction_rejects_start_not_before_end() {
		assert_eq!(DateTimeRange::new(2, 1), Err(InvalidRangeError));
		assert_eq!(DateTimeRange::new(2, 2), Err(InvalidRangeError));
		assert_eq!(
			DateTimeRange::from_parts(8, Some(2), Interval::Open),
			Err(InvalidRangeError)
		);
		assert!(DateTimeRange::new(1, 2).is_ok());
		assert_eq!(DateTimeRange::new(jan(2), jan(1)), Err(InvalidRangeError));
	}

	#[test]
	fn intersection_type_of_equal_ranges() {
		let bounded = co(1, 10);
		assert_eq!(
			bounded.intersection_type(bounded),
			Intersection::RangesEqualed
		);

		let unbounded = cu(1);
		assert_eq!(
			unbounded.intersection_type(unbounded),
			Intersection::RangesEqualed
		);
	}

	#[test]
	fn intersection_type_table() {
		let test_cases = [
			//(receiver, argument, expected)
			(co(1, 10), co(5, 15), Intersection::PartiallyInRange),
			(co(5, 15), co(1, 10), Intersection::PartiallyInRange),
			(co(1, 10), co(3, 6), Intersection::ContainedInRange),
			(co(3, 6), co(1, 10), Intersection::ContainsRange),
			(co(1, 2), co(5, 6), Intersection::None),
			(co(5, 6), co(1, 2), Intersection::None),
			//a shared exclusive bound does not overlap
			(co(1, 5), co(5, 10), Intersection::None),
			//a shared inclusive bound does
			(cc(1, 5), cc(5, 10), Intersection::PartiallyInRange),
			//same instants, different mode: not equal, but receiver
			//swallows the argument's boundary instants
			(cc(1, 10), co(1, 10), Intersection::ContainedInRange),
		];

		for (receiver, argument, expected) in test_cases {
			assert_eq!(receiver.intersection_type(argument), expected);
		}
	}

	#[test]
	fn intersection_type_with_unbounded_ranges() {
		let test_cases = [
			(cu(1), co(5, 10), Intersection::ContainedInRange),
			(co(5, 10), cu(1), Intersection::ContainsRange),
			(cu(5), co(1, 10), Intersection::PartiallyInRange),
			(cu(1), cu(5), Intersection::ContainedInRange),
			(cu(5), cu(1), Intersection::ContainsRange),
			(cu(5), co(1, 2), Intersection::None),
		];

		for (receiver, argument, expected) in test_cases {
			assert_eq!(receiver.intersection_type(argument), expected);
		}
	}

	#[test]
	fn partial_overlap_intersection_pins_close_mode() {
		let a = co(jan(1), jan(10));
		let b = co(jan(5), jan(15));

		assert_eq!(a.intersection_type(b), Intersection::PartiallyInRange);

		let overlap = a.intersection(b).unwrap();
		assert_eq!(overlap, DateTimeRange::new(jan(5), jan(10)).unwrap());
		assert_eq!(overlap.interval(), Interval::Close);

		//the mirrored call overlaps on the other boundary but produces
		//the same instants
		assert_eq!(b.intersection(a), Some(cc(jan(5), jan(10))));
	}

	#[test]
	fn contained_intersection_returns_argument_unchanged() {
		let a = co(jan(1), jan(10));
		let b = co(jan(3), jan(6));

		assert_eq!(a.intersection_type(b), Intersection::ContainedInRange);
		assert_eq!(a.intersection(b), Some(b));
		assert_eq!(b.intersection(a), Some(b));
	}

	#[test]
	fn disjoint_ranges_do_not_intersect() {
		let a = co(jan(1), jan(2));
		let b = co(jan(5), jan(6));

		assert_eq!(a.intersection_type(b), Intersection::None);
		assert_eq!(a.intersects(b), false);
		assert_eq!(a.intersection(b), None);
	}

	#[test]
	fn equal_ranges_intersection_returns_argument() {
		let range = oc(1, 10);
		assert_eq!(range.intersection(range), Some(range));
	}

	#[test]
	fn unbounded_receiver_intersection() {
		assert_eq!(cu(1).intersection(co(5, 10)), Some(co(5, 10)));
		//partial overlap against an unbounded receiver is rebuilt closed
		assert_eq!(cu(5).intersection(co(1, 10)), Some(cc(5, 10)));
		assert_eq!(cu(1).intersection(cu(5)), Some(cu(5)));
	}

	#[test]
	fn single_instant_overlap_collapses_to_none() {
		let a = cc(1, 10);
		let b = cc(10, 15);

		//the boundary instant is shared so the ranges do intersect, but
		//the overlap cannot be represented as a non-empty range
		assert_eq!(a.intersection_type(b), Intersection::PartiallyInRange);
		assert_eq!(a.intersects(b), true);
		assert_eq!(a.intersection(b), None);
	}

	#[test]
	fn equality_is_field_wise() {
		assert_eq!(co(1, 2), co(1, 2));
		assert_ne!(co(1, 2), cc(1, 2));
		assert_ne!(co(1, 2), co(1, 3));
		assert_ne!(cu(1), co(1, 2));
		assert_eq!(cu(1), cu(1));
	}

	#[test]
	fn equal_ranges_hash_equally() {
		let hash = |range: DateTimeRange<i32>| {
			let mut hasher = DefaultHasher::new();
			range.hash(&mut hasher);
			hasher.finish()
		};

		assert_eq!(hash(co(1, 2)), hash(co(1, 2)));
		assert_eq!(hash(cu(7)), hash(cu(7)));
	}

	#[test]
	fn with_interval_returns_a_new_value() {
		let range = co(1, 10);
		let closed = range.with_interval(Interval::Close);

		assert_eq!(closed.interval(), Interval::Close);
		assert_eq!(range.interval(), Interval::LeftCloseRightOpen);
		assert!(closed.contains_point(10));
		assert!(!range.contains_point(10));
	}

	#[test]
	fn display_bracket_pairs_per_mode() {
		let test_cases = [
			(Interval::Open, "]2, 8["),
			(Interval::LeftCloseRightOpen, "[2, 8["),
			(Interval::LeftOpenRightClose, "]2, 8]"),
			(Interval::Close, "[2, 8]"),
		];

		for (interval, expected) in test_cases {
			let range = DateTimeRange::from_parts(2, Some(8), interval).unwrap();
			assert_eq!(range.to_string(), expected);
		}
	}

	#[test]
	fn display_unbounded_end_renders_trailing_separator() {
		assert_eq!(cu(2).to_string(), "[2, [");
		assert_eq!(ou(2).to_string(), "]2, [");
	}

	#[test]
	fn display_delegates_instant_rendering() {
		let range = DateTimeRange::new(jan(1), jan(2)).unwrap();
		assert_eq!(
			range.to_string(),
			"[2024-01-01 00:00:00 UTC, 2024-01-02 00:00:00 UTC]"
		);
	}

	#[test]
	fn std_range_conversions() {
		assert_eq!(DateTimeRange::try_from(1..5), Ok(co(1, 5)));
		assert_eq!(DateTimeRange::try_from(1..=5), Ok(cc(1, 5)));
		assert_eq!(DateTimeRange::try_from(5..5), Err(InvalidRangeError));
		assert_eq!(DateTimeRange::from(3..), cu(3));
	}

	#[test]
	fn range_bounds_reflect_interval_mode() {
		assert_eq!(cc(2, 8).start_bound(), Bound::Included(&2));
		assert_eq!(cc(2, 8).end_bound(), Bound::Included(&8));
		assert_eq!(oo(2, 8).start_bound(), Bound::Excluded(&2));
		assert_eq!(oo(2, 8).end_bound(), Bound::Excluded(&8));
		assert_eq!(co(2, 8).end_bound(), Bound::Excluded(&8));
		assert_eq!(oc(2, 8).end_bound(), Bound::Included(&8));
		assert_eq!(cu(2).end_bound(), Bound::Unbounded);
	}
}
