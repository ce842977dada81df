use std::collections::HashSet;

use yamsync::sync::download::local_keys;
use yamsync::sync::reconcile::{mutation_refs, orphan_tracks, tracks_matching_rule};
use yamsync::types::{Album, Artist, AuthorshipRule, Track};
use yamsync::utils::track_file_key;

// Helper function to create a test track with a single artist and album
fn create_test_track(id: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Track {}", id),
        artists: vec![Artist {
            name: artist.to_string(),
            ..Default::default()
        }],
        albums: vec![Album {
            id: 100,
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn create_test_rule(kind: u32, artists: &[&str]) -> AuthorshipRule {
    AuthorshipRule {
        title: format!("Rule {}", kind),
        kind,
        artists: artists.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_orphan_set_correctness() {
    // 5 liked tracks; {1,2} in playlist A, {3} in playlist B -> {4,5} orphaned.
    let liked: Vec<Track> = ["1", "2", "3", "4", "5"]
        .iter()
        .map(|id| create_test_track(id, "X"))
        .collect();
    let playlisted: HashSet<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();

    let orphans = orphan_tracks(liked, &playlisted);

    let ids: Vec<&str> = orphans.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "5"]);
}

#[test]
fn test_orphan_set_empty_when_all_playlisted() {
    let liked = vec![create_test_track("1", "X")];
    let playlisted: HashSet<String> = ["1".to_string()].into_iter().collect();

    assert!(orphan_tracks(liked, &playlisted).is_empty());
}

#[test]
fn test_authorship_routing() {
    // Track 4's primary artist is "X", track 5's is "Y"; the rule for
    // playlist 10 names only "X".
    let orphans = vec![create_test_track("4", "X"), create_test_track("5", "Y")];
    let rule = create_test_rule(10, &["X"]);

    let matched = tracks_matching_rule(&orphans, &rule);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "4");

    let refs = mutation_refs(&matched);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id, 4);
    assert_eq!(refs[0].album_id, 100);
}

#[test]
fn test_routing_matches_primary_artist_only() {
    let mut track = create_test_track("4", "Main");
    track.artists.push(Artist {
        name: "Featured".to_string(),
        ..Default::default()
    });
    let orphans = vec![track];

    let rule = create_test_rule(10, &["Featured"]);
    assert!(tracks_matching_rule(&orphans, &rule).is_empty());

    let rule = create_test_rule(10, &["Main"]);
    assert_eq!(tracks_matching_rule(&orphans, &rule).len(), 1);
}

#[test]
fn test_routing_track_without_artists_matches_nothing() {
    let mut track = create_test_track("4", "X");
    track.artists.clear();
    let orphans = vec![track];

    let rule = create_test_rule(10, &["X"]);
    assert!(tracks_matching_rule(&orphans, &rule).is_empty());
}

#[test]
fn test_track_matching_several_rules_is_routed_to_each() {
    let orphans = vec![create_test_track("4", "X")];
    let first = create_test_rule(10, &["X"]);
    let second = create_test_rule(11, &["X", "Y"]);

    assert_eq!(tracks_matching_rule(&orphans, &first).len(), 1);
    assert_eq!(tracks_matching_rule(&orphans, &second).len(), 1);
}

#[test]
fn test_mutation_refs_skip_unusable_tracks() {
    let numeric = create_test_track("42", "X");
    let mut non_numeric = create_test_track("not-a-number", "X");
    non_numeric.title = "Odd".to_string();
    let mut no_album = create_test_track("43", "X");
    no_album.albums.clear();

    let tracks = [&numeric, &non_numeric, &no_album];
    let refs = mutation_refs(&tracks);

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id, 42);
}

#[test]
fn test_local_keys_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Foo - Bar.mp3"), b"x").unwrap();
    std::fs::write(dir.path().join("Baz.mp3"), b"x").unwrap();

    let keys = local_keys(dir.path()).unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains("Foo - Bar"));
    assert!(keys.contains("Baz"));
}

#[test]
fn test_dedup_skips_already_mirrored_tracks() {
    // A second run over the same directory must schedule no fetch for a
    // track whose key is already on disk.
    let dir = tempfile::tempdir().unwrap();
    let track = create_test_track("1", "Foo");
    let mirrored = create_test_track("2", "Foo");

    std::fs::write(
        dir.path().join(format!("{}.mp3", track_file_key(&mirrored))),
        b"x",
    )
    .unwrap();

    let mut seen = local_keys(dir.path()).unwrap();
    // already mirrored -> insert reports it as seen
    assert!(!seen.insert(track_file_key(&mirrored)));
    // new track -> scheduled once, then seen within the same batch
    assert!(seen.insert(track_file_key(&track)));
    assert!(!seen.insert(track_file_key(&track)));
}
