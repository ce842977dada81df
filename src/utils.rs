use crate::types::Track;

/// Upper bound on a mirror filename key, to bound filesystem path length.
pub const MAX_FILE_KEY_LEN: usize = 30;

/// Derives the filename key a track is stored under in the local mirror.
///
/// `"{primary artist} - {title}"` when the track has at least one artist,
/// the bare title otherwise. Path separators are replaced with `|` before
/// the key is truncated to [`MAX_FILE_KEY_LEN`] characters. Truncation is
/// code-point based and not word-boundary aware; it may split a word.
pub fn track_file_key(track: &Track) -> String {
    let mut key = match track.primary_artist() {
        Some(artist) => format!("{} - {}", artist.name, track.title),
        None => track.title.clone(),
    };
    key = key.replace(['/', '\\'], "|");
    if key.chars().count() > MAX_FILE_KEY_LEN {
        key = key.chars().take(MAX_FILE_KEY_LEN).collect();
    }
    key
}
