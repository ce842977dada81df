use yamsync::types::{Artist, Track};
use yamsync::utils::*;

// Helper function to create a test track
fn create_test_track(artist: Option<&str>, title: &str) -> Track {
    Track {
        id: "1".to_string(),
        title: title.to_string(),
        artists: artist
            .map(|name| {
                vec![Artist {
                    name: name.to_string(),
                    ..Default::default()
                }]
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}

#[test]
fn test_file_key_with_artist() {
    let track = create_test_track(Some("Boards of Canada"), "Roygbiv");
    assert_eq!(track_file_key(&track), "Boards of Canada - Roygbiv");
}

#[test]
fn test_file_key_without_artist() {
    let track = create_test_track(None, "Untitled");
    assert_eq!(track_file_key(&track), "Untitled");
}

#[test]
fn test_file_key_uses_primary_artist_only() {
    let mut track = create_test_track(Some("First"), "Song");
    track.artists.push(Artist {
        name: "Second".to_string(),
        ..Default::default()
    });
    assert_eq!(track_file_key(&track), "First - Song");
}

#[test]
fn test_file_key_replaces_path_separators() {
    let track = create_test_track(Some("AC/DC"), "Back in Black");
    assert_eq!(track_file_key(&track), "AC|DC - Back in Black");

    let track = create_test_track(Some("A\\B"), "C/D");
    assert_eq!(track_file_key(&track), "A|B - C|D");
}

#[test]
fn test_file_key_truncates_to_max_length() {
    let track = create_test_track(Some(&"A".repeat(37)), "B");

    let key = track_file_key(&track);
    assert_eq!(key.chars().count(), MAX_FILE_KEY_LEN);
    assert!(key.chars().all(|c| c == 'A'));
}

#[test]
fn test_file_key_replaces_separators_before_truncation() {
    // The separator sits inside the kept prefix; it must be neutralized
    // even though the tail is cut off.
    let track = create_test_track(Some(&format!("AB/{}", "C".repeat(40))), "D");

    let key = track_file_key(&track);
    assert_eq!(key.chars().count(), MAX_FILE_KEY_LEN);
    assert!(key.starts_with("AB|"));
    assert!(!key.contains('/'));
}

#[test]
fn test_file_key_truncation_is_code_point_based() {
    // Multi-byte titles must not split a code point.
    let track = create_test_track(None, &"я".repeat(40));

    let key = track_file_key(&track);
    assert_eq!(key.chars().count(), MAX_FILE_KEY_LEN);
    assert!(key.chars().all(|c| c == 'я'));
}

#[test]
fn test_file_key_short_keys_untouched() {
    let track = create_test_track(Some("X"), "Y");
    assert_eq!(track_file_key(&track), "X - Y");
}
