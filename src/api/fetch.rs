//! Single-request fetch client.

use serde::de::DeserializeOwned;
use url::Url;

use crate::model::{ErrorResponse, Exercise, ExercisePage};
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

use super::{Endpoint, NetworkError};

/// Issues one GET per call and decodes the result.
///
/// Holds only the transport and the base URL; every call is independent,
/// so a shared `&FetchClient` can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct FetchClient<H> {
    http: H,
    base_url: Url,
}

impl<H> FetchClient<H> {
    /// Creates a fetch client for the API rooted at `base_url`.
    #[must_use]
    pub const fn new(http: H, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &H {
        &self.http
    }
}

impl<H: HttpClient> FetchClient<H> {
    /// Fetches `endpoint` and decodes a 200 body as `T`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::Underlying`] on transport failure, or when a non-200
    ///   body is not a valid error body
    /// - [`NetworkError::NotFound`] / [`NetworkError::Other`] from the
    ///   server's `detail` on non-200 responses
    /// - [`NetworkError::Decoding`] when a 200 body does not match `T`
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, NetworkError> {
        self.execute(endpoint.request(&self.base_url)).await
    }

    /// Fetches the first page of the exercise listing.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::fetch`].
    pub async fn fetch_exercises(&self) -> Result<ExercisePage, NetworkError> {
        self.fetch(Endpoint::ListExercises).await
    }

    /// Fetches one exercise by ID.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::fetch`].
    pub async fn fetch_exercise(&self, id: i64) -> Result<Exercise, NetworkError> {
        self.fetch(Endpoint::ExerciseDetail { id }).await
    }

    /// Follows a pagination cursor taken from [`ExercisePage::next`] or
    /// [`ExercisePage::previous`].
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidUrl`] if the cursor is not an absolute URL,
    /// otherwise see [`FetchClient::fetch`].
    pub async fn fetch_page(&self, cursor: &str) -> Result<ExercisePage, NetworkError> {
        let url = Url::parse(cursor).map_err(|e| {
            tracing::warn!(cursor, error = %e, "Pagination cursor is not a URL");
            NetworkError::InvalidUrl
        })?;
        self.execute(HttpRequest::get(url).accept_json()).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, NetworkError> {
        let url = request.url.clone();
        tracing::debug!(%url, "GET");

        let response = self.http.request(request).await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Request failed");
            NetworkError::from(e)
        })?;

        tracing::debug!(%url, status = %response.status, bytes = response.body.len(), "Response");

        decode_response(&response).inspect_err(|e| {
            tracing::warn!(%url, status = %response.status, error = %e, "Request returned an error");
        })
    }
}

/// Turns a response into a decoded value or a taxonomy error.
///
/// # Errors
///
/// See [`FetchClient::fetch`].
pub fn decode_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, NetworkError> {
    if !response.is_ok() {
        let body: ErrorResponse =
            serde_json::from_slice(&response.body).map_err(NetworkError::underlying)?;
        return Err(body.into_network_error());
    }

    serde_json::from_slice(&response.body).map_err(NetworkError::Decoding)
}
