use std::collections::HashSet;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::{
    error::Result,
    types::{AuthorshipRule, PlaylistTrackRef, Track},
    yandex::ApiClient,
};

/// Computes the liked tracks that appear in no playlist.
///
/// Fetches the liked library (ids only), hydrates the tracks in one batched
/// call, walks every playlist's contents to collect the set of playlisted
/// track ids, and returns the liked tracks absent from that set. Track
/// identity is the id string; two tracks are the same iff their ids are
/// equal.
pub async fn liked_without_playlist(client: &ApiClient, user: Option<u64>) -> Result<Vec<Track>> {
    let library = client.liked_tracks(user).await?;
    let ids: Vec<String> = library.tracks.iter().map(|t| t.id.clone()).collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let liked = client.tracks_by_ids(&ids).await?;

    let playlists = client.playlists(user).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Scanning playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut playlisted: HashSet<String> = HashSet::new();
    for playlist in &playlists {
        pb.set_message(format!("Scanning playlist {}...", playlist.title));
        let with_tracks = client.playlist(user, playlist.kind).await?;
        for item in with_tracks.tracks {
            playlisted.insert(item.track.id);
        }
    }
    pb.finish_and_clear();

    info!(
        liked = liked.len(),
        playlisted = playlisted.len(),
        "library scanned"
    );
    Ok(orphan_tracks(liked, &playlisted))
}

/// Filters `liked` down to the tracks whose id is not in `playlisted`.
pub fn orphan_tracks(liked: Vec<Track>, playlisted: &HashSet<String>) -> Vec<Track> {
    liked
        .into_iter()
        .filter(|track| !playlisted.contains(&track.id))
        .collect()
}

/// Returns the orphans whose primary-artist name exactly matches one of the
/// rule's artist names. A track matching several rules is returned for each
/// of them; duplicate membership across playlists is allowed and not
/// deduplicated here.
pub fn tracks_matching_rule<'a>(orphans: &'a [Track], rule: &AuthorshipRule) -> Vec<&'a Track> {
    orphans
        .iter()
        .filter(|track| match track.primary_artist() {
            Some(artist) => rule.artists.iter().any(|name| name == &artist.name),
            None => false,
        })
        .collect()
}

/// Converts tracks to mutation references, dropping (with a log line) any
/// track that has a non-numeric id or no album.
pub fn mutation_refs(tracks: &[&Track]) -> Vec<PlaylistTrackRef> {
    tracks
        .iter()
        .filter_map(|track| match track.mutation_ref() {
            Ok(r) => Some(r),
            Err(err) => {
                warn!(track = %track.id, error = %err, "skipping track without usable reference");
                None
            }
        })
        .collect()
}

/// Routes orphaned liked tracks into playlists according to `rules`.
///
/// For each rule: filter the orphan set by primary artist, fetch the target
/// playlist once for its current revision, and issue exactly one insertion
/// call. Tracks matching no rule stay orphaned — expected, not an error.
/// A failing rule is logged and the remaining rules still run.
pub async fn distribute(
    client: &ApiClient,
    user: Option<u64>,
    rules: &[AuthorshipRule],
) -> Result<()> {
    let orphans = liked_without_playlist(client, user).await?;
    info!(orphans = orphans.len(), "distributing orphaned tracks");

    for rule in rules {
        if let Err(err) = distribute_rule(client, rule, &orphans).await {
            warn!(playlist = rule.kind, rule = %rule.title, error = %err, "distribution failed");
        }
    }
    Ok(())
}

async fn distribute_rule(
    client: &ApiClient,
    rule: &AuthorshipRule,
    orphans: &[Track],
) -> Result<()> {
    let matched = tracks_matching_rule(orphans, rule);
    let refs = mutation_refs(&matched);
    if refs.is_empty() {
        info!(playlist = rule.kind, rule = %rule.title, "no orphaned tracks match rule");
        return Ok(());
    }

    // Revision observed immediately before the write; the pair is still not
    // atomic against concurrent external writers.
    let target = client.playlist(None, rule.kind).await?;
    let summary = client
        .add_tracks(rule.kind, target.playlist.revision, &refs, None)
        .await?;
    info!(
        playlist = rule.kind,
        added = refs.len(),
        revision = summary.revision,
        "tracks routed"
    );
    Ok(())
}

/// Empties every rule-target playlist: one removal call per playlist
/// covering its full track list. Per-playlist failures are logged and the
/// batch continues.
pub async fn purge_rule_playlists(
    client: &ApiClient,
    user: Option<u64>,
    rules: &[AuthorshipRule],
) -> Result<()> {
    for rule in rules {
        if let Err(err) = purge_playlist(client, user, rule.kind).await {
            warn!(playlist = rule.kind, error = %err, "purge failed");
        }
    }
    Ok(())
}

async fn purge_playlist(client: &ApiClient, user: Option<u64>, kind: u32) -> Result<()> {
    let playlist = client.playlist(user, kind).await?;
    let tracks: Vec<&Track> = playlist.tracks.iter().map(|item| &item.track).collect();
    let refs = mutation_refs(&tracks);
    if refs.is_empty() {
        return Ok(());
    }
    let summary = client
        .remove_tracks(kind, playlist.playlist.revision, &refs, None)
        .await?;
    info!(
        playlist = kind,
        removed = refs.len(),
        revision = summary.revision,
        "playlist emptied"
    );
    Ok(())
}
