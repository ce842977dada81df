use reqwest::{Method, Request, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{Error, Result},
    types::ApiResponse,
};

/// Production API endpoint.
pub const API_URL: &str = "https://api.music.yandex.net";

/// Server error name for a mutation submitted against a stale revision.
const WRONG_REVISION: &str = "wrong-revision";

/// Request body of an API call.
///
/// A key/value collection is encoded as `application/x-www-form-urlencoded`;
/// any other body is serialized as JSON with no content-type override.
#[derive(Debug, Clone)]
pub enum Body {
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// Client for the Yandex Music API.
///
/// Holds the access token and the default user id, both set once at
/// construction; the client is otherwise stateless across calls. All
/// service methods (playlists, tracks, account) hang off this type from
/// their own modules.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    user_id: Option<u64>,
}

const USER_AGENT: &str = concat!("yamsync/", env!("CARGO_PKG_VERSION"));

impl ApiClient {
    /// Creates a new client against the production endpoint.
    ///
    /// # Arguments
    ///
    /// * `token` - OAuth access token, attached to every request
    /// * `user_id` - Default user for user-scoped calls; resolve it via
    ///   [`ApiClient::account_settings`] and [`ApiClient::set_user_id`]
    ///   when not known up front
    pub fn new(token: impl Into<String>, user_id: Option<u64>) -> Result<Self> {
        Self::with_base_url(API_URL, token, user_id)
    }

    /// Creates a client against a custom base URL (used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        user_id: Option<u64>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            user_id,
        })
    }

    /// Default user id, if one is configured or was resolved.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    pub fn set_user_id(&mut self, uid: u64) {
        self.user_id = Some(uid);
    }

    /// Resolves the user a call acts on: the explicit parameter when given,
    /// the client's default otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::NoUser`] when neither is available.
    pub fn effective_user(&self, user: Option<u64>) -> Result<u64> {
        user.or(self.user_id).ok_or(Error::NoUser)
    }

    /// Builds an authenticated API request.
    ///
    /// `path` is resolved against the client's base URL unless it is
    /// already absolute (the descriptor fetch follows an absolute URL from
    /// a prior response). The `Authorization: OAuth` header is always set;
    /// the form content type only for POST form bodies.
    pub fn request(&self, method: Method, path: &str, body: Option<Body>) -> Result<Request> {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path)
        };

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token));

        match body {
            Some(Body::Form(fields)) => {
                builder = builder.body(encode_form(&fields));
                if method == Method::POST {
                    builder =
                        builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                }
            }
            Some(Body::Json(value)) => {
                builder = builder.body(serde_json::to_vec(&value)?);
            }
            None => {}
        }

        Ok(builder.build()?)
    }

    /// Sends a request and decodes the full response body into `T`.
    ///
    /// JSON is attempted first, then XML; an empty body decodes to
    /// `T::default()`. A non-success status whose body decodes is returned
    /// as the decoded value (the API reports errors inside its envelope);
    /// a non-success status with an undecodable body becomes
    /// [`Error::Http`].
    pub async fn execute<T>(&self, req: Request) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = req.url().clone();
        let resp = self.http.execute(req).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(%url, %status, len = bytes.len(), "api response");

        match decode_body(&bytes) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(Error::Http(status)),
            Err(e) => Err(e),
        }
    }

    /// Sends a request for an enveloped endpoint and unwraps `result`.
    ///
    /// A non-empty `error.name` in the envelope surfaces as
    /// [`Error::RevisionConflict`] (for the stale-revision name) or
    /// [`Error::Api`]; the server's message is passed through verbatim.
    pub async fn fetch<T>(&self, req: Request) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let envelope: ApiResponse<T> = self.execute(req).await?;
        if let Some(err) = envelope.error {
            if !err.name.is_empty() {
                return Err(api_error(err));
            }
        }
        Ok(envelope.result)
    }

    /// Convenience GET against an enveloped endpoint.
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let req = self.request(Method::GET, path, None)?;
        self.fetch(req).await
    }

    /// Convenience POST of a form body against an enveloped endpoint.
    pub async fn post_form<T>(&self, path: &str, fields: Vec<(String, String)>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let req = self.request(Method::POST, path, Some(Body::Form(fields)))?;
        self.fetch(req).await
    }

    /// Plain GET of a media URL, for streaming the body to disk.
    ///
    /// Signed media hosts take no `Authorization` header; a non-success
    /// status is an error here since there is no envelope to consult.
    pub async fn stream(&self, url: &str) -> Result<reqwest::Response> {
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp)
    }
}

/// Maps a server-reported envelope error to the typed taxonomy. The
/// stale-revision name gets its own kind; everything else passes through
/// verbatim.
pub fn api_error(err: crate::types::ApiErrorBody) -> Error {
    if err.name == WRONG_REVISION {
        Error::RevisionConflict(err.message)
    } else {
        Error::Api {
            name: err.name,
            message: err.message,
        }
    }
}

fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a response body: JSON first, XML fallback, empty is `Default`.
///
/// Neither succeeding fails with [`Error::Decode`] carrying the raw
/// payload.
pub fn decode_body<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    if let Ok(value) = serde_json::from_slice(bytes) {
        return Ok(value);
    }
    let text = std::str::from_utf8(bytes).map_err(|_| Error::decode(bytes))?;
    quick_xml::de::from_str(text).map_err(|_| Error::decode(bytes))
}
