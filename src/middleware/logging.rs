use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use http::StatusCode;
use log::{debug, info};
use reqwest::{Request, Response};
use tower::{Layer, Service};
use url::Url;

/// Logs every request that leaves the client, with credentials redacted.
///
/// Query values of [`SENSITIVE_FIELDS`] are replaced by `[REDACTED]`. Headers
/// and form bodies are never logged.
#[derive(Clone)]
pub struct LoggingMiddleware {
    verbose: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Log at `debug` level with status reasons instead of `info`.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for LoggingMiddleware
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Service = LoggingMiddlewareService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddlewareService {
            inner,
            verbose: self.verbose,
        }
    }
}

#[derive(Clone)]
pub struct LoggingMiddlewareService<S> {
    inner: S,
    verbose: bool,
}

pub const SENSITIVE_FIELDS: &[&str] = &[
    "access_token",
    "refresh_token",
    "password",
    "code",
    "code_verifier",
    "client_secret",
];

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_FIELDS
        .iter()
        .any(|field| key.eq_ignore_ascii_case(field))
}

/// `url` with the values of sensitive query parameters replaced.
pub fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if is_sensitive(&key) {
                "[REDACTED]".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn log_request(method: &str, url: &str, authenticated: bool, verbose: bool) {
    let auth = if authenticated { "bearer" } else { "none" };
    if verbose {
        debug!("[Pixiv] >>> {} {} (auth: {})", method, url, auth);
    } else {
        info!("[Pixiv] {} {}", method, url);
    }
}

fn log_response(status: StatusCode, duration: Duration, verbose: bool) {
    if verbose {
        debug!(
            "[Pixiv] <<< {} {} ({:?})",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration
        );
    } else {
        info!("[Pixiv] {} ({:?})", status.as_u16(), duration);
    }
}

impl<S, Error> Service<Request> for LoggingMiddlewareService<S>
where
    S: Service<Request, Response = Response, Error = Error> + Send + Clone + 'static,
    S::Future: Send,
    Error: Send + 'static,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().as_str().to_string();
        let url = redact_url(req.url());
        let authenticated = req.headers().contains_key(http::header::AUTHORIZATION);
        let verbose = self.verbose;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            log_request(&method, &url, authenticated, verbose);

            let start = Instant::now();
            let response = inner.call(req).await?;
            log_response(response.status(), start.elapsed(), verbose);

            Ok(response)
        })
    }
}
