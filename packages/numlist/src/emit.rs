use itertools::Itertools;

use crate::{Item, PART_SEPARATOR};

/// Generates a compact numlist string that expands back to the given items.
///
/// Items are de-duplicated and sorted. Runs of three or more consecutive items are written as
/// a range (`4-9`), everything else is listed individually. The result uses only the `-` range
/// delimiter and never a step, so it can be read by any consumer of the basic syntax.
///
/// ```
/// assert_eq!(numlist::emit(&[9, 1, 2, 3, 5, 6]), "1-3,5,6,9");
///
/// let items = numlist::parse(&numlist::emit(&[9, 1, 2, 3, 5, 6])).unwrap();
/// assert_eq!(items, vec![1, 2, 3, 5, 6, 9]);
/// ```
#[must_use]
pub fn emit<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    items
        .into_iter()
        .copied()
        .sorted_unstable()
        .dedup()
        .map(|item| (item, item))
        .coalesce(|(start, end), (next, _)| {
            if end.checked_add(1) == Some(next) {
                Ok((start, next))
            } else {
                Err(((start, end), (next, next)))
            }
        })
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else if start.checked_add(1) == Some(end) {
                format!("{start}{PART_SEPARATOR}{end}")
            } else {
                format!("{start}-{end}")
            }
        })
        .join(PART_SEPARATOR.encode_utf8(&mut [0; 4]))
}
