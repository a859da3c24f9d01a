/// Separates parts of a numlist string.
pub const PART_SEPARATOR: char = ',';

/// Splits a numlist string into its parts, trimming surrounding whitespace from each part.
///
/// Parts that are empty after trimming are dropped, so an input made only of whitespace and
/// separators yields no parts at all.
pub fn segments(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(PART_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
}
