use async_trait::async_trait;
use http::{Extensions, HeaderMap, Method, StatusCode};
use parking_lot::Mutex;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct CachedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    expires_at: Instant,
}

impl CachedResponse {
    fn to_response(&self) -> Response {
        let mut response = http::Response::new(self.body.clone());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        Response::from(response)
    }
}

/// In-memory response cache for successful `GET`s, keyed by full URL.
///
/// Entries live for `ttl`; an expired entry is dropped the next time its
/// key is looked up.
#[derive(Clone)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CachedResponse>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lookup(&self, key: &str) -> Option<Response> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                tracing::debug!(key, "cache hit");
                Some(entry.to_response())
            }
            Some(_) => {
                tracing::debug!(key, "cache entry expired");
                entries.remove(key);
                None
            }
            None => {
                tracing::debug!(key, "cache miss");
                None
            }
        }
    }

    fn store(&self, key: String, entry: CachedResponse) {
        self.entries.lock().insert(key, entry);
    }
}

#[async_trait]
impl Middleware for ResponseCache {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if req.method() != Method::GET {
            return next.run(req, extensions).await;
        }

        let key = req.url().to_string();
        if let Some(cached) = self.lookup(&key) {
            return Ok(cached);
        }

        let response = next.run(req, extensions).await?;
        if response.status() != StatusCode::OK {
            return Ok(response);
        }

        let entry = CachedResponse {
            status: response.status(),
            headers: response.headers().clone(),
            expires_at: Instant::now() + self.ttl,
            body: response.bytes().await?.to_vec(),
        };
        let fresh = entry.to_response();
        self.store(key, entry);
        Ok(fresh)
    }
}
