//! Nesting depth of a dotted heading number.

/// Character separating the components of a heading number.
pub const SEPARATOR: char = '.';

/// Nesting depth of a heading number: one more than its separator count.
///
/// Any string is accepted, so the empty string sits at depth 1 like `"4"`.
#[must_use]
pub fn depth(number: &str) -> usize {
    number.matches(SEPARATOR).count() + 1
}

/// Dot-join a counter stack into its canonical heading number.
#[must_use]
pub fn render(counters: &[usize]) -> String {
    counters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

#[cfg(test)]
#[path = "tests/depth.rs"]
mod tests;
