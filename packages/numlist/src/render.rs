use std::fmt::{self, Display};
use std::str::FromStr;

use foldhash::HashSet;
use itertools::Itertools;

use crate::{ExpandedSet, Item, PART_SEPARATOR};

/// The shape in which expanded items are returned to the caller.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Items sorted in ascending order. Named `list`.
    #[default]
    List,

    /// Items in a set with no defined order. Named `set`.
    Set,

    /// Items sorted in ascending order and joined by commas, e.g. `1,2,3`. Named `csv`.
    Csv,
}

impl OutputFormat {
    /// The name by which the format is selected, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "list" => Ok(Self::List),
            "set" => Ok(Self::Set),
            "csv" => Ok(Self::Csv),
            _ => Err(crate::Error::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expanded items in the shape selected by an [`OutputFormat`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Output {
    /// Items sorted in ascending order.
    List(Vec<Item>),

    /// Items with no defined order.
    Set(HashSet<Item>),

    /// Items sorted in ascending order and joined by commas.
    Csv(String),
}

impl Output {
    /// The format this output was rendered in.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        match self {
            Self::List(_) => OutputFormat::List,
            Self::Set(_) => OutputFormat::Set,
            Self::Csv(_) => OutputFormat::Csv,
        }
    }

    /// Returns the sorted items if this is a [`List`][Output::List] output.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Set`][Output::Set] output.
    #[must_use]
    pub const fn as_set(&self) -> Option<&HashSet<Item>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the comma-separated text if this is a [`Csv`][Output::Csv] output.
    #[must_use]
    pub fn as_csv(&self) -> Option<&str> {
        match self {
            Self::Csv(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Renders the expanded items in the requested format.
#[must_use]
pub fn render(items: ExpandedSet, format: OutputFormat) -> Output {
    match format {
        OutputFormat::List => Output::List(items.into_sorted_vec()),
        OutputFormat::Set => Output::Set(items.into_inner()),
        OutputFormat::Csv => Output::Csv(
            items
                .into_sorted_vec()
                .iter()
                .join(PART_SEPARATOR.encode_utf8(&mut [0; 4])),
        ),
    }
}
