use tabled::Table;

use crate::{info, sync, types::OrphanTableRow, warning};

pub async fn orphans() {
    let client = super::build_client().await;

    let orphans = match sync::reconcile::liked_without_playlist(&client, None).await {
        Ok(orphans) => orphans,
        Err(e) => {
            warning!("Failed to compute orphaned tracks: {}", e);
            return;
        }
    };

    if orphans.is_empty() {
        info!("Every liked track is in a playlist.");
        return;
    }

    info!("{} liked tracks are in no playlist:", orphans.len());
    let rows: Vec<OrphanTableRow> = orphans
        .iter()
        .map(|t| OrphanTableRow {
            id: t.id.clone(),
            artist: t
                .primary_artist()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            title: t.title.clone(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    println!("{}", table);
}
