use crate::{config, success, sync, warning};

pub async fn download(kinds: Vec<u32>) {
    let client = super::build_client().await;
    let output = config::output_dir();

    match sync::download::download_all(&client, None, &kinds, &output).await {
        Ok(()) => success!("Mirror updated at {}.", output.display()),
        Err(e) => warning!("Download run failed: {}", e),
    }
}
