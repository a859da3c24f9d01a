use tracing::debug;

use crate::{ExpandedSet, Item, Output, OutputFormat, parse_part, render, segments};

/// How an [`Expander`] reacts to a part of the input that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorMode {
    /// The first invalid part aborts the call and its error is returned.
    #[default]
    Strict,

    /// Invalid parts are skipped and reported in [`Expansion::rejected`].
    Lenient,
}

/// The result of expanding one numlist string with an [`Expander`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct Expansion {
    /// The expanded items, in the format selected on the expander.
    pub output: Output,

    /// Errors for the parts that were skipped, in input order.
    ///
    /// Always empty in [`ErrorMode::Strict`].
    pub rejected: Vec<crate::Error>,
}

/// Expands numlist strings with a fixed error mode and output format.
///
/// The default expander is strict and produces [`Output::List`].
///
/// # Example
///
/// ```
/// use numlist::{Expander, Output, OutputFormat};
///
/// let expander = Expander::builder()
///     .lenient()
///     .output_format(OutputFormat::Csv)
///     .build();
///
/// let expansion = expander.expand(Some("1-a,2,4-b,5")).unwrap().unwrap();
///
/// assert_eq!(expansion.output, Output::Csv("2,5".to_string()));
/// assert_eq!(expansion.rejected.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Expander {
    mode: ErrorMode,
    format: OutputFormat,
}

impl Expander {
    /// Creates a builder for configuring an expander.
    #[must_use]
    pub fn builder() -> ExpanderBuilder {
        ExpanderBuilder::new()
    }

    /// The error mode of this expander.
    #[must_use]
    pub const fn mode(self) -> ErrorMode {
        self.mode
    }

    /// The output format of this expander.
    #[must_use]
    pub const fn output_format(self) -> OutputFormat {
        self.format
    }

    /// Expands a numlist string.
    ///
    /// Returns `Ok(None)` if `input` is `None`. An input with no parts (empty, whitespace or
    /// separators only) is not an error and produces an empty output.
    ///
    /// # Errors
    ///
    /// In [`ErrorMode::Strict`], returns the error of the first part that cannot be parsed.
    /// In [`ErrorMode::Lenient`], never returns an error.
    pub fn expand(self, input: Option<&str>) -> crate::Result<Option<Expansion>> {
        let Some(input) = input else {
            return Ok(None);
        };

        let (items, rejected) = self.collect(input)?;

        Ok(Some(Expansion {
            output: render(items, self.format),
            rejected,
        }))
    }

    fn collect(self, input: &str) -> crate::Result<(ExpandedSet, Vec<crate::Error>)> {
        let mut items = ExpandedSet::new();
        let mut rejected = Vec::new();
        let mut part_count: usize = 0;

        for part in segments(input) {
            part_count = part_count.saturating_add(1);

            match parse_part(part) {
                Ok(range) => items.insert_range(&range),
                Err(error) => match self.mode {
                    ErrorMode::Strict => return Err(error),
                    ErrorMode::Lenient => {
                        debug!(part, %error, "skipping invalid part");
                        rejected.push(error);
                    }
                },
            }
        }

        debug!(
            parts = part_count,
            items = items.len(),
            rejected = rejected.len(),
            format = %self.format,
            "expanded numlist"
        );

        Ok((items, rejected))
    }
}

/// Configures an [`Expander`].
///
/// Use [`Expander::builder()`] to create a new instance of this builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpanderBuilder {
    mode: ErrorMode,
    format: OutputFormat,
}

impl ExpanderBuilder {
    /// Creates a builder with the default configuration: strict, list output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts on the first invalid part. This is the default.
    #[must_use]
    pub fn strict(self) -> Self {
        self.mode(ErrorMode::Strict)
    }

    /// Skips invalid parts and reports them in [`Expansion::rejected`].
    #[must_use]
    pub fn lenient(self) -> Self {
        self.mode(ErrorMode::Lenient)
    }

    /// Sets the error mode.
    #[must_use]
    pub fn mode(self, mode: ErrorMode) -> Self {
        Self { mode, ..self }
    }

    /// Sets the output format. The default is [`OutputFormat::List`].
    #[must_use]
    pub fn output_format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    /// Creates the expander.
    #[must_use]
    pub fn build(self) -> Expander {
        Expander {
            mode: self.mode,
            format: self.format,
        }
    }
}

/// Expands a numlist string in strict mode, in the output format named by `output_format`
/// (`"list"`, `"set"` or `"csv"`).
///
/// Returns `Ok(None)` if `input` is `None`, whatever the format.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`][crate::Error::UnsupportedFormat] if `output_format` is
/// not recognized, even if `input` is `None`. Otherwise returns the error of the first part that
/// cannot be parsed.
///
/// # Example
///
/// ```
/// use numlist::Output;
///
/// let output = numlist::expand(Some("1-3,3-5"), "csv").unwrap();
/// assert_eq!(output, Some(Output::Csv("1,2,3,4,5".to_string())));
///
/// assert_eq!(numlist::expand(None, "csv").unwrap(), None);
/// ```
pub fn expand(input: Option<&str>, output_format: &str) -> crate::Result<Option<Output>> {
    let format = output_format.parse::<OutputFormat>()?;

    let expansion = Expander::builder()
        .output_format(format)
        .build()
        .expand(input)?;

    Ok(expansion.map(|expansion| expansion.output))
}

/// Parses a numlist string in strict mode and returns the items in ascending order,
/// removing duplicates.
///
/// An empty string is valid input and returns an empty result.
///
/// # Errors
///
/// Returns the error of the first part that cannot be parsed.
pub fn parse(input: &str) -> crate::Result<Vec<Item>> {
    let (items, _) = Expander::default().collect(input)?;

    Ok(items.into_sorted_vec())
}
