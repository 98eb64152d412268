//! Catalog listing for `podcastr list`

use podcastr_core::Catalog;
use podcastr_playback::format_duration;
use std::fmt::Write;

/// One row per episode: index, title, members and duration
pub fn render_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No episodes\n".to_string();
    }

    let mut out = String::new();
    for (index, episode) in catalog.episodes().iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{index:>3}  {:<40}  {:<30}  {}",
            episode.title,
            episode.members,
            format_duration(episode.duration)
        );
    }
    out
}
