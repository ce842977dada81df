use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    types::Track,
    utils,
    yandex::ApiClient,
};

/// Mirrors one playlist into `output`.
///
/// Creates `<output>/<playlist title>/{tracks,lyrics}` idempotently, takes
/// one dedup snapshot of the tracks directory, then downloads every track
/// whose filename key is not yet present. A per-track failure (resolver,
/// HTTP, filesystem) is logged and the batch continues; it never aborts the
/// playlist. Running twice against an unchanged playlist performs no
/// additional media fetches on the second run.
pub async fn download_playlist(
    client: &ApiClient,
    user: Option<u64>,
    kind: u32,
    output: &Path,
) -> Result<()> {
    let playlist = client.playlist(user, kind).await?;
    if playlist.tracks.is_empty() {
        info!(playlist = %playlist.playlist.title, "no tracks in playlist");
        return Ok(());
    }
    info!(
        playlist = %playlist.playlist.title,
        tracks = playlist.tracks.len(),
        "downloading playlist"
    );

    let folder = output.join(&playlist.playlist.title);
    let tracks_dir = folder.join("tracks");
    let lyrics_dir = folder.join("lyrics");
    async_fs::create_dir_all(&tracks_dir).await?;
    async_fs::create_dir_all(&lyrics_dir).await?;

    // One snapshot per batch; also catches same-key duplicates within the
    // batch itself.
    let mut seen = local_keys(&tracks_dir)?;
    debug!(existing = seen.len(), "dedup snapshot taken");

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    for (index, item) in playlist.tracks.iter().enumerate() {
        let track = &item.track;
        pb.set_message(format!(
            "[{}/{}] {}",
            index + 1,
            playlist.tracks.len(),
            track.title
        ));

        let key = utils::track_file_key(track);
        if !seen.insert(key.clone()) {
            debug!(track = %track.id, %key, "already mirrored, skipping");
            continue;
        }
        if let Err(err) = download_track(client, track, &key, &tracks_dir, &lyrics_dir).await {
            warn!(track = %track.id, title = %track.title, error = %err, "track download failed");
        }
    }
    pb.finish_and_clear();
    Ok(())
}

/// Mirrors several playlists; with no kinds given, all of the user's
/// playlists. A failing playlist is logged and the rest still run.
pub async fn download_all(
    client: &ApiClient,
    user: Option<u64>,
    kinds: &[u32],
    output: &Path,
) -> Result<()> {
    let kinds = if kinds.is_empty() {
        client
            .playlists(user)
            .await?
            .iter()
            .map(|p| p.kind)
            .collect()
    } else {
        kinds.to_vec()
    };

    for kind in kinds {
        if let Err(err) = download_playlist(client, user, kind, output).await {
            warn!(playlist = kind, error = %err, "playlist download failed");
        }
    }
    Ok(())
}

/// Builds the dedup snapshot: the extension-stripped names already present
/// in the mirror's tracks directory. Used purely as a membership test.
pub fn local_keys(dir: &Path) -> std::io::Result<HashSet<String>> {
    let mut keys = HashSet::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        if let Some(stem) = Path::new(&name).file_stem().and_then(|s| s.to_str()) {
            keys.insert(stem.to_string());
        }
    }
    Ok(keys)
}

/// Fetches one track's audio (and lyrics, when available) into the mirror.
///
/// The signed URL is resolved per download and the body streamed straight
/// to the file; the handle is released on every exit path. A lyrics
/// failure is logged but does not affect the audio result. Cancellation
/// mid-stream can leave a partial file behind; a later run only skips it
/// when its key matches, which is a known gap.
async fn download_track(
    client: &ApiClient,
    track: &Track,
    key: &str,
    tracks_dir: &Path,
    lyrics_dir: &Path,
) -> Result<()> {
    let id: u64 = track
        .id
        .parse()
        .map_err(|_| Error::InvalidTrackId(track.id.clone()))?;
    let url = client.download_url(id).await?;

    let path = tracks_dir.join(format!("{key}.mp3"));
    let mut file = tokio::fs::File::create(&path).await?;
    let mut resp = client.stream(&url).await?;
    while let Some(chunk) = resp.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    debug!(track = %track.id, path = %path.display(), "track written");

    if track.lyrics_available {
        if let Err(err) = download_lyrics(client, track, key, lyrics_dir).await {
            warn!(track = %track.id, error = %err, "lyrics fetch failed");
        }
    }
    Ok(())
}

async fn download_lyrics(
    client: &ApiClient,
    track: &Track,
    key: &str,
    lyrics_dir: &Path,
) -> Result<()> {
    let supplement = client.track_supplement(&track.id).await?;
    let path = lyrics_dir.join(format!("{key}.txt"));
    async_fs::write(&path, supplement.lyrics.full_lyrics).await?;
    debug!(track = %track.id, path = %path.display(), "lyrics written");
    Ok(())
}
