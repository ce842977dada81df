use crate::{config, error, success, sync, warning};

pub async fn distribute() {
    let client = super::build_client().await;
    let rules = match config::load_rules().await {
        Ok(rules) => rules,
        Err(e) => {
            error!("Cannot load authorship rules: {}", e);
        }
    };

    match sync::reconcile::distribute(&client, None, &rules).await {
        Ok(()) => success!("Orphaned tracks distributed over {} rules.", rules.len()),
        Err(e) => warning!("Distribution run failed: {}", e),
    }
}

pub async fn purge() {
    let client = super::build_client().await;
    let rules = match config::load_rules().await {
        Ok(rules) => rules,
        Err(e) => {
            error!("Cannot load authorship rules: {}", e);
        }
    };

    match sync::reconcile::purge_rule_playlists(&client, None, &rules).await {
        Ok(()) => success!("Rule playlists emptied."),
        Err(e) => warning!("Purge run failed: {}", e),
    }
}
