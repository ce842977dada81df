use tabled::Table;

use crate::{info, success, types::PlaylistTableRow, warning};

pub async fn list_playlists() {
    let client = super::build_client().await;

    let playlists = match client.playlists(None).await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Failed to fetch playlists: {}", e);
            return;
        }
    };

    if playlists.is_empty() {
        info!("No playlists found.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .map(|p| PlaylistTableRow {
            kind: p.kind,
            title: p.title.clone(),
            tracks: p.track_count,
            revision: p.revision,
        })
        .collect();

    let table = Table::new(rows).to_string();
    println!("{}", table);
}

pub async fn create_playlist(title: String, public: bool) {
    let client = super::build_client().await;

    match client.create_playlist(&title, public).await {
        Ok(playlist) => success!(
            "Playlist {} created (kind {}).",
            playlist.title,
            playlist.kind
        ),
        Err(e) => warning!("Failed to create playlist: {}", e),
    }
}

pub async fn rename_playlist(kind: u32, title: String) {
    let client = super::build_client().await;

    match client.rename_playlist(kind, &title).await {
        Ok(playlist) => success!("Playlist {} renamed to {}.", kind, playlist.title),
        Err(e) => warning!("Failed to rename playlist {}: {}", kind, e),
    }
}

pub async fn delete_playlist(kind: u32) {
    let client = super::build_client().await;

    match client.delete_playlist(kind).await {
        Ok(_) => success!("Playlist {} deleted.", kind),
        Err(e) => warning!("Failed to delete playlist {}: {}", kind, e),
    }
}
