//! Mapping from logical API requests to concrete HTTP requests.

use url::Url;

use crate::transport::HttpRequest;

/// Base address of the public wger API.
pub const DEFAULT_BASE_URL: &str = "https://wger.de/api/v2";

/// A logical request against the exercise API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// First page of the exercise listing.
    ListExercises,
    /// A single exercise by its numeric ID.
    ExerciseDetail { id: i64 },
}

impl Endpoint {
    /// Path relative to the API base.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ListExercises => "/exerciseinfo".to_string(),
            Self::ExerciseDetail { id } => format!("/exerciseinfo/{id}"),
        }
    }

    /// Appends this endpoint's path to `base`, keeping the base path.
    ///
    /// Total: any base yields a URL, the ID is not range-checked. Query and
    /// fragment of `base` are kept as they are.
    #[must_use]
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path());
        url.set_path(&path);
        url
    }

    /// Builds the GET request for this endpoint.
    #[must_use]
    pub fn request(&self, base: &Url) -> HttpRequest {
        HttpRequest::get(self.url(base)).accept_json()
    }
}

/// Parses [`DEFAULT_BASE_URL`].
///
/// # Panics
///
/// Never; the constant is a valid URL.
#[must_use]
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        default_base_url()
    }

    #[test]
    fn list_exercises_path() {
        assert_eq!(Endpoint::ListExercises.path(), "/exerciseinfo");
    }

    #[test]
    fn detail_path_interpolates_id() {
        assert_eq!(Endpoint::ExerciseDetail { id: 345 }.path(), "/exerciseinfo/345");
    }

    #[test]
    fn list_url_keeps_base_path() {
        assert_eq!(
            Endpoint::ListExercises.url(&base()).as_str(),
            "https://wger.de/api/v2/exerciseinfo"
        );
    }

    #[test]
    fn detail_url_keeps_base_path() {
        assert_eq!(
            Endpoint::ExerciseDetail { id: 9 }.url(&base()).as_str(),
            "https://wger.de/api/v2/exerciseinfo/9"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let base = Url::parse("http://localhost:8000/api/v2/").unwrap();

        assert_eq!(
            Endpoint::ExerciseDetail { id: 1 }.url(&base).as_str(),
            "http://localhost:8000/api/v2/exerciseinfo/1"
        );
    }

    #[test]
    fn root_base_works() {
        let base = Url::parse("http://127.0.0.1:3000").unwrap();

        assert_eq!(
            Endpoint::ListExercises.url(&base).as_str(),
            "http://127.0.0.1:3000/exerciseinfo"
        );
    }

    #[test]
    fn id_is_not_validated() {
        assert_eq!(
            Endpoint::ExerciseDetail { id: -1 }.url(&base()).as_str(),
            "https://wger.de/api/v2/exerciseinfo/-1"
        );
    }

    #[test]
    fn base_query_is_preserved() {
        let base = Url::parse("https://wger.de/api/v2?language=2").unwrap();

        assert_eq!(
            Endpoint::ListExercises.url(&base).as_str(),
            "https://wger.de/api/v2/exerciseinfo?language=2"
        );
    }

    #[test]
    fn request_is_json_get() {
        let req = Endpoint::ListExercises.request(&base());

        assert_eq!(req.method, http::Method::GET);
        assert_eq!(
            req.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }
}
