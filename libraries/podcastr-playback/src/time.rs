//! Time display helpers

/// Format whole seconds as `MM:SS`
///
/// Minutes are not wrapped at the hour, so long episodes read `62:05`.
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
