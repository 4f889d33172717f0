//! Removes the noise nslookup mixes in with its answers.

/// The line nslookup prints between each debug section.
pub const SEPARATOR: &str = "------------";

/// Printed when nslookup could not resolve something, for example the name of
/// the server being queried ("Server:  UnKnown").
pub const PLACEHOLDER: &str = "unknown";

/// Returns the lines with all separators, blank lines and lines containing the
/// unresolved placeholder removed. The remaining lines keep their order.
///
/// ```
/// use nslookup::sanitize;
///
/// let lines = vec!["Server:  UnKnown", "Address:  8.8.8.8", "", "------------", "Got answer:"];
/// assert_eq!(sanitize(&lines), vec!["Address:  8.8.8.8", "Got answer:"]);
/// ```
pub fn sanitize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !is_noise(line))
        .map(str::to_string)
        .collect()
}

fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed == SEPARATOR
        || line.to_ascii_lowercase().contains(PLACEHOLDER)
}
