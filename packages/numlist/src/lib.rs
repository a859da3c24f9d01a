#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Expands human-written lists of integers and integer ranges into concrete, sorted,
//! de-duplicated integers.
//!
//! Example numlist string: `1-3,5,7-9:2`
//!
//! # Format
//!
//! The value is a comma-separated list of zero or more parts. Whitespace around a part is
//! ignored, as are empty parts. Each part is either:
//!
//! * a single integer (e.g. `5`)
//! * a range of integers (e.g. `2-4`), where the start and end are separated by one of the
//!   delimiters `-`, `..`, `to` or `~`
//! * either of the above followed by a step (e.g. `1-9:2`, which is equivalent to `1,3,5,7,9`)
//!
//! Ranges are inclusive. A range whose start is greater than its end (e.g. `9-1:3`) is expanded
//! downwards from the start, so `9-1:3` is equivalent to `3,6,9`. The end is only included if a
//! step lands on it exactly.
//!
//! Numbers are unsigned decimal integers of type `u64`. Signs, whitespace inside numbers and
//! non-ASCII digits are not allowed. The step must be at least 1.
//!
//! Overlapping parts are allowed and the result contains every integer only once.
//!
//! # Example
//!
//! ```
//! let items = numlist::parse("1-3,5,7-9").unwrap();
//! assert_eq!(items, vec![1, 2, 3, 5, 7, 8, 9]);
//!
//! let csv = numlist::expand(Some("1-3, 3..5, 10 "), "csv").unwrap();
//! assert_eq!(csv, Some(numlist::Output::Csv("1,2,3,4,5,10".to_string())));
//! ```
//!
//! # Invalid input
//!
//! By default, the first part that cannot be parsed aborts the call and its [`Error`] names the
//! offending part. An [`Expander`] configured as lenient skips invalid parts instead and
//! reports them next to the result:
//!
//! ```
//! use numlist::{Expander, Output};
//!
//! assert!(numlist::parse("1-a,2,4-b,5").is_err());
//!
//! let expansion = Expander::builder()
//!     .lenient()
//!     .build()
//!     .expand(Some("1-a,2,4-b,5"))
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(expansion.output, Output::List(vec![2, 5]));
//! assert_eq!(expansion.rejected[0].part(), Some("1-a"));
//! ```
//!
//! # Observability
//!
//! The package emits `tracing` events at `debug` and `trace` level. It never prints and never
//! installs a subscriber.

mod emit;
mod error;
mod expand;
mod parse;
mod pipeline;
mod render;
mod segment;

pub use emit::*;
pub use error::*;
pub use expand::*;
pub use parse::*;
pub use pipeline::*;
pub use render::*;
pub use segment::*;

/// The integer type of the items in a numlist.
pub type Item = u64;
