use std::num::NonZero;

use smallvec::SmallVec;
use tracing::trace;

use crate::Item;

/// Separates the range text of a part from its optional step, as in `1-9:2`.
pub const STEP_SEPARATOR: char = ':';

/// Delimiters that separate the start and end of a range, in order of precedence.
///
/// When several delimiters could match at the same position, the one listed first wins.
pub const RANGE_DELIMITERS: [&str; 4] = ["-", "..", "to", "~"];

/// A single part of a numlist string, parsed but not yet expanded.
///
/// `start` may be greater than `end`, in which case the range is expanded in descending order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct ParsedRange {
    /// The first item of the range.
    pub start: Item,

    /// The bound (inclusive) towards which the range is expanded.
    pub end: Item,

    /// The distance between consecutive items of the range.
    pub step: NonZero<Item>,
}

impl ParsedRange {
    /// Creates a range expanded from `start` towards `end` in increments of `step`.
    #[must_use]
    pub const fn new(start: Item, end: Item, step: NonZero<Item>) -> Self {
        Self { start, end, step }
    }

    /// Creates a range that contains only `item`.
    #[must_use]
    pub const fn single(item: Item) -> Self {
        Self {
            start: item,
            end: item,
            step: NonZero::<Item>::MIN,
        }
    }
}

/// Parses one part of a numlist string (e.g. `5`, `1-10` or `9..1:2`) into a [`ParsedRange`].
///
/// The part is expected to be already trimmed, as produced by [`segments()`][crate::segments].
///
/// # Errors
///
/// Returns a part-level [`Error`][crate::Error] if the part does not match the grammar described
/// in the [package-level documentation][crate].
pub fn parse_part(part: &str) -> crate::Result<ParsedRange> {
    // Only the text up to the second step separator is meaningful, the rest is ignored.
    let mut step_pieces = part.split(STEP_SEPARATOR);
    let range_text = step_pieces.next().unwrap_or_default();

    let step = match step_pieces.next() {
        Some(step_text) => parse_step(part, step_text)?,
        None => NonZero::<Item>::MIN,
    };

    let pieces = split_on_delimiters(range_text);

    let range = match pieces.as_slice() {
        [single] => {
            let item = parse_digits(single).ok_or_else(|| crate::Error::InvalidNumber {
                part: part.to_string(),
            })?;

            ParsedRange {
                start: item,
                end: item,
                step,
            }
        }
        [start, end] if !start.is_empty() && !end.is_empty() => {
            let (Some(start), Some(end)) = (parse_digits(start), parse_digits(end)) else {
                return Err(crate::Error::InvalidRangeBounds {
                    part: part.to_string(),
                });
            };

            ParsedRange { start, end, step }
        }
        [_, _] => {
            return Err(crate::Error::MalformedPart {
                part: part.to_string(),
                problem: "range is missing a start or an end",
            });
        }
        _ => {
            return Err(crate::Error::MalformedPart {
                part: part.to_string(),
                problem: "part contains more than one range delimiter",
            });
        }
    };

    trace!(
        part,
        start = range.start,
        end = range.end,
        step = range.step.get(),
        "parsed part"
    );

    Ok(range)
}

fn parse_step(part: &str, step_text: &str) -> crate::Result<NonZero<Item>> {
    parse_digits(step_text)
        .and_then(NonZero::new)
        .ok_or_else(|| crate::Error::InvalidStep {
            part: part.to_string(),
            step: step_text.to_string(),
        })
}

/// Parses an unsigned decimal integer made only of ASCII digits.
///
/// `str::parse` alone would also accept a leading `+`, so we check the digits ourselves.
/// Values that do not fit in an [`Item`] are rejected.
fn parse_digits(text: &str) -> Option<Item> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<Item>().ok()
}

/// Splits the range text on every delimiter occurrence in a single left-to-right pass.
///
/// At each step the leftmost delimiter occurrence is taken. If several delimiters start at the
/// same position, the earliest one in [`RANGE_DELIMITERS`] wins.
fn split_on_delimiters(text: &str) -> SmallVec<[&str; 2]> {
    let mut pieces = SmallVec::new();
    let mut remaining = text;

    while let Some((position, delimiter)) = next_delimiter(remaining) {
        let (piece, rest) = remaining.split_at(position);
        pieces.push(piece);
        remaining = rest.strip_prefix(delimiter).unwrap_or_default();
    }

    pieces.push(remaining);
    pieces
}

fn next_delimiter(text: &str) -> Option<(usize, &'static str)> {
    RANGE_DELIMITERS
        .iter()
        .filter_map(|delimiter| text.find(delimiter).map(|position| (position, *delimiter)))
        // min_by_key() returns the first of equal minimums, which preserves precedence.
        .min_by_key(|(position, _)| *position)
}
