use md5::{Digest, Md5};
use reqwest::Method;

use crate::{
    error::{Error, Result},
    types::{DownloadDescriptor, DownloadOption, LikedLibrary, LikedLibraryResult, Track,
            TrackSupplement},
    yandex::ApiClient,
};

// Shared secret the media hosts expect in the download digest.
const SIGN_PREFIX: &str = "XGRlBW9FXlekgbPrRHuSiA";

/// Computes the download signature over a descriptor's path and salt.
///
/// A keyed MD5 digest of the secret prefix, the path with its leading
/// separator stripped, and the salt, encoded as lowercase hexadecimal.
/// Pure and deterministic: identical `(path, salt)` pairs always yield the
/// same digest.
pub fn sign(path: &str, salt: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let digest = Md5::digest(format!("{SIGN_PREFIX}{trimmed}{salt}").as_bytes());
    hex::encode(digest)
}

/// Assembles the final signed media URL from a descriptor.
///
/// # Errors
///
/// - [`Error::MissingDescriptor`] when the descriptor is unusable (the
///   fetch produced no host, e.g. from an empty body)
/// - [`Error::EmptyPath`] when the descriptor's `path` is empty
pub fn media_url(descriptor: &DownloadDescriptor) -> Result<String> {
    if descriptor.host.is_empty() {
        return Err(Error::MissingDescriptor);
    }
    if descriptor.path.is_empty() {
        return Err(Error::EmptyPath);
    }
    Ok(format!(
        "https://{}/get-mp3/{}/{}{}",
        descriptor.host,
        sign(&descriptor.path, &descriptor.s),
        descriptor.ts,
        descriptor.path
    ))
}

impl ApiClient {
    /// Returns one track by its numeric id.
    pub async fn track(&self, id: u64) -> Result<Track> {
        let tracks: Vec<Track> = self.get(&format!("tracks/{id}")).await?;
        tracks.into_iter().next().ok_or(Error::TrackNotFound(id))
    }

    /// Returns full track objects for a list of ids in one batched call.
    pub async fn tracks_by_ids(&self, ids: &[String]) -> Result<Vec<Track>> {
        let form = vec![
            ("track-ids".to_string(), ids.join(",")),
            ("with-positions".to_string(), "false".to_string()),
        ];
        self.post_form("tracks", form).await
    }

    /// Returns the liked-tracks library of the given user (ids only;
    /// hydrate via [`ApiClient::tracks_by_ids`]).
    pub async fn liked_tracks(&self, user: Option<u64>) -> Result<LikedLibrary> {
        let uid = self.effective_user(user)?;
        let result: LikedLibraryResult = self.get(&format!("users/{uid}/likes/tracks")).await?;
        Ok(result.library)
    }

    /// Returns the supplement of a track (lyrics and related extras).
    pub async fn track_supplement(&self, id: &str) -> Result<TrackSupplement> {
        self.get(&format!("tracks/{id}/supplement")).await
    }

    /// Returns the codec/bitrate options for a track.
    ///
    /// Be careful: the descriptor behind each option's info URL can only be
    /// fetched for about one minute after this call.
    pub async fn download_options(&self, id: u64) -> Result<Vec<DownloadOption>> {
        self.get(&format!("tracks/{id}/download-info")).await
    }

    /// Fetches the ephemeral download descriptor behind an option's info
    /// URL. The endpoint responds with XML; decoding rides the transport's
    /// XML fallback.
    pub async fn download_descriptor(&self, info_url: &str) -> Result<DownloadDescriptor> {
        let req = self.request(Method::GET, info_url, None)?;
        self.execute(req).await
    }

    /// Resolves the signed media URL for a track.
    ///
    /// Three steps in causal order: download-info (fails with
    /// [`Error::NoCodecAvailable`] on an empty option list), descriptor
    /// fetch (a fetch outside the validity window is rejected by the server
    /// and propagates as a transport-level error), then the digest over
    /// path and salt. No retry at any step; a failure aborts resolution for
    /// this track only.
    pub async fn download_url(&self, id: u64) -> Result<String> {
        let options = self.download_options(id).await?;
        let first = options.first().ok_or(Error::NoCodecAvailable)?;
        let descriptor = self.download_descriptor(&first.download_info_url).await?;
        media_url(&descriptor)
    }
}
