//! Detection of application-relative `~/` markers.

/// The marker that starts an application-relative URL.
pub const MARKER: &str = "~/";

/// Byte offset of the `~` if `value`, after leading whitespace, starts with
/// `~/`. `~\`, `~ /` and a lone `~` do not count.
pub fn find_relative_start(value: &str) -> Option<usize> {
    let start = value.len() - value.trim_start().len();
    value[start..].starts_with(MARKER).then_some(start)
}

pub fn is_eligible_marker(candidate: &str) -> bool {
    find_relative_start(candidate).is_some()
}

/// The app-relative URL in `value`, from the marker up to the last
/// non-whitespace character.
pub fn relative_url(value: &str) -> Option<&str> {
    find_relative_start(value).map(|start| value[start..].trim_end())
}
