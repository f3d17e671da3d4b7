//! Comma-separated list helpers shared by the user commands

/// Parse a comma-separated string into a list, trimming entries and
/// filtering empty ones. Order and duplicates are preserved.
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join repeated flag values with commas for the search endpoints.
///
/// Values are not escaped, so a value that itself contains a comma is
/// indistinguishable from two values on the server side.
pub fn join_list(values: &[String]) -> String {
    values.join(",")
}
