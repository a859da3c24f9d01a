use foldhash::{HashSet, HashSetExt};
use itertools::Itertools;

use crate::{Item, ParsedRange};

impl ParsedRange {
    /// Returns the items denoted by the range, in the order they are reached from `start`.
    ///
    /// If `start > end` the items are produced in descending order. The last item is the one
    /// closest to `end` that is reachable from `start` in whole steps, so `end` itself is only
    /// included if a step lands on it exactly.
    pub fn items(&self) -> impl Iterator<Item = Item> + use<> {
        // A step larger than usize::MAX can only ever reach the first item.
        let step = usize::try_from(self.step.get()).unwrap_or(usize::MAX);

        let (ascending, descending) = if self.start <= self.end {
            (Some((self.start..=self.end).step_by(step)), None)
        } else {
            (None, Some((self.end..=self.start).rev().step_by(step)))
        };

        ascending
            .into_iter()
            .flatten()
            .chain(descending.into_iter().flatten())
    }
}

/// The union of all items expanded from the parts of one numlist string.
///
/// Items are unique but the set has no defined order. Use [`render()`][crate::render] to obtain
/// a sorted result.
#[derive(Clone, Debug, Default)]
pub struct ExpandedSet {
    items: HashSet<Item>,
}

impl ExpandedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Adds every item of `range` to the set. Items already present are ignored.
    pub fn insert_range(&mut self, range: &ParsedRange) {
        self.items.extend(range.items());
    }

    /// Number of unique items in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is in the set.
    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Consumes the set, returning the items in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Item> {
        self.items.into_iter().sorted_unstable().collect()
    }

    /// Consumes the set, returning the underlying hash set.
    #[must_use]
    pub fn into_inner(self) -> HashSet<Item> {
        self.items
    }
}

impl<'a> Extend<&'a ParsedRange> for ExpandedSet {
    fn extend<T: IntoIterator<Item = &'a ParsedRange>>(&mut self, iter: T) {
        for range in iter {
            self.insert_range(range);
        }
    }
}
