//! Shared test fixtures: canned API payloads and a scripted HTTP client.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Exercise detail JSON with every field populated.
pub fn exercise_json(id: i64) -> String {
    format!(
        r#"{{
            "id": {id},
            "uuid": "123e4567-e89b-12d3-a456-4266554400{id:02}",
            "name": "Exercise {id}",
            "exercise_base_id": {base},
            "description": "<p>Description of {id}</p>",
            "created": "2024-01-08T10:00:00.000000+01:00",
            "images": [
                {{
                    "id": {image_id},
                    "uuid": "img-{id}",
                    "exercise_base": {base},
                    "exercise_base_uuid": "base-{id}",
                    "image": "https://wger.de/media/exercise-images/{id}/main.png",
                    "is_main": true,
                    "style": "1",
                    "license": 2,
                    "license_title": "CC-BY-SA 4",
                    "license_object_url": "https://example.com/object",
                    "license_author": "Author {id}",
                    "license_author_url": "https://example.com/author",
                    "license_derivative_source_url": "",
                    "author_history": ["Author {id}"]
                }}
            ],
            "variations": [{v1}, {v2}]
        }}"#,
        base = id + 100,
        image_id = id * 10,
        v1 = id + 1,
        v2 = id + 2,
    )
}

/// Two-entry listing page.
pub fn page_json() -> String {
    format!(
        r#"{{
            "count": 2,
            "next": "https://wger.de/api/v2/exerciseinfo/?limit=20&offset=20",
            "previous": null,
            "results": [{}, {}]
        }}"#,
        exercise_json(1),
        exercise_json(2)
    )
}

pub fn ok(body: impl Into<Vec<u8>>) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::json(http::StatusCode::OK, body))
}

pub fn status(code: u16, body: impl Into<Vec<u8>>) -> Result<HttpResponse, HttpError> {
    let status = http::StatusCode::from_u16(code).unwrap();
    Ok(HttpResponse::json(status, body))
}

pub fn not_found() -> Result<HttpResponse, HttpError> {
    status(404, r#"{"detail":"Not found."}"#)
}

/// HTTP client that replays a fixed sequence of results and records requests.
///
/// Panics if asked for more responses than scripted.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|req| req.url.path().to_string())
            .collect()
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedClient ran out of responses")
    }
}
