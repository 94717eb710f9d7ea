//! This crate provides [`DateTimeRange`], a value type for ranges between
//! two points in time with configurable boundary inclusivity, together
//! with containment testing, intersection classification and intersection
//! computation over pairs of ranges.
//!
//! ## You must implement `Ord + Copy`
//!
//! The range type is generic over the instant type it is over, so the
//! actual date-time arithmetic is delegated entirely to whichever
//! primitive the host application already uses. Any `Ord + Copy` type
//! works: `chrono::DateTime<Utc>`, `chrono::NaiveDate`, or plain integers
//! in tests.
//!
//! ## Example using `chrono` instants
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use dtrange::{DateTimeRange, Intersection, Interval};
//!
//! let jan = |day: u32| Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
//!
//! let stay = DateTimeRange::from_parts(
//! 	jan(1),
//! 	Some(jan(10)),
//! 	Interval::LeftCloseRightOpen,
//! )
//! .unwrap();
//! let conference = DateTimeRange::from_parts(
//! 	jan(5),
//! 	Some(jan(15)),
//! 	Interval::LeftCloseRightOpen,
//! )
//! .unwrap();
//!
//! assert!(stay.contains_point(jan(1)));
//! assert_eq!(
//! 	stay.intersection_type(conference),
//! 	Intersection::PartiallyInRange
//! );
//! assert_eq!(
//! 	stay.intersection(conference),
//! 	Some(DateTimeRange::new(jan(5), jan(10)).unwrap())
//! );
//! ```
//!
//! ## Example using an unbounded range
//!
//! ```rust
//! use dtrange::range::{co, cu};
//!
//! let open_ended = cu(5);
//!
//! assert!(open_ended.contains_point(1_000_000));
//! assert!(open_ended.intersects(co(1, 10)));
//! ```
//!
//! ## Key Understandings:
//!
//! ### Boundary inclusivity
//!
//! Every range carries its own [`Interval`] mode deciding whether the
//! start and end instants are part of the range: `[4, 6]`, `]4, 6[`,
//! `[4, 6[` and `]4, 6]` are four different ranges over the same two
//! instants.
//!
//! ### Unbounded ranges
//!
//! A range without an end extends to positive infinity. The end half of
//! its mode is vacuous (the end is never attained), the start half still
//! applies.
//!
//! ### Invalid ranges
//!
//! Not every start/end pair is a valid range: a bounded range must have
//! its start strictly before its end, so a range never denotes an empty
//! set of instants.
//!
//! | range  | valid |
//! | ------ | ----- |
//! | [4, 6] | YES   |
//! | [4, 4] | NO    |
//! | [6, 4] | NO    |
//! | [4, →  | YES   |
//!
//! ### Structural equality
//!
//! Two ranges are equal iff their starts, ends and modes are all equal,
//! **not** iff they denote the same set of instants. Hashing follows the
//! same three fields.
//!
//! ### Intersection classification
//!
//! [`DateTimeRange::intersection_type()`] classifies a pair of ranges
//! into one of five [`Intersection`] outcomes: disjoint, partial overlap,
//! equal, argument contained in receiver, or receiver contained in
//! argument. [`DateTimeRange::intersection()`] computes the overlapping
//! range itself, returning `None` for disjoint pairs rather than a
//! degenerate sentinel value.
//!
//! # Similar Crates
//!
//! Here are some relevant crates from the same topic area:
//!
//! - <https://docs.rs/nodit>
//!   Maps and sets of non-overlapping intervals with fully generic
//!   interval types.
//! - <https://docs.rs/rangemap>
//!   Maps and sets keyed by `Range`s and `RangeInclusive`s.
//! - <https://docs.rs/ranges>
//!   Generic single ranges and a `Ranges` data structure for storing
//!   them.

#![allow(clippy::tabs_in_doc_comments)]

pub mod intersection;
pub mod interval;
pub mod range;

pub use crate::intersection::Intersection;
pub use crate::interval::Interval;
pub use crate::range::{DateTimeRange, InvalidRangeError, TimePoint};
