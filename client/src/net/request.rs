//! Request descriptors, the transport seam, and the session refresh wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call that needs a session goes through
//! [`send_with_refresh`]. Pages never talk to `gloo-net` directly; they hand
//! an [`ApiRequest`] to `api`, which hands it here together with a
//! [`Transport`]. In the browser that is [`BrowserTransport`]; tests script
//! their own.
//!
//! SESSION REFRESH
//! ===============
//! On 401/403 the wrapper calls `POST /refresh` once. A failed refresh sends
//! the user to `/login` and ends the operation; a successful one replays the
//! original request exactly once. No other status is retried and there is no
//! backoff.
//!
//! The backend rotates the refresh token on every use, so callers that hit
//! 401/403 while a refresh is already running wait on it through the
//! transport's [`RefreshGate`] instead of presenting the spent token again.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Path prefix under which the host forwards requests to the backend.
pub const API_BASE: &str = "/api";

/// Session renewal endpoint.
pub const REFRESH_PATH: &str = "/refresh";

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A replayable description of one backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to [`API_BASE`], starting with `/`.
    pub path: String,
    /// Query pairs, in order. Encoded by [`ApiRequest::url`].
    pub query: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Full URL for this request under `base`, query form-urlencoded.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}

/// Status and raw body of a backend response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends requests with the session cookies attached.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue one request. Non-2xx statuses are responses, not errors.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Called once when session refresh fails.
    fn on_login_required(&self) {}

    /// Gate shared by every caller using the same session.
    fn refresh_gate(&self) -> &RefreshGate;
}

/// How a session renewal ended, handed to every caller that waited on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Renewal {
    Renewed,
    Rejected,
    Failed(ApiError),
}

#[derive(Default)]
struct GateState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Renewal>>,
}

/// Collapses concurrent session renewals into a single `POST /refresh`.
#[derive(Default)]
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub const fn new() -> Self {
        Self { state: Mutex::new(GateState { in_flight: false, waiters: Vec::new() }) }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `refresh` unless one is already running, in which case wait for
    /// that one's outcome. `refresh` is dropped unpolled when waiting.
    pub async fn renew<F: Future<Output = Renewal>>(&self, refresh: F) -> Renewal {
        let pending = {
            let mut state = self.lock();
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                Some(rx)
            } else {
                state.in_flight = true;
                None
            }
        };
        if let Some(rx) = pending {
            return rx
                .await
                .unwrap_or_else(|_| Renewal::Failed(ApiError::Network("session refresh abandoned".to_owned())));
        }

        let mut leader = Leader { gate: self, outcome: None };
        let outcome = refresh.await;
        leader.outcome = Some(outcome.clone());
        outcome
    }
}

/// Releases the gate when the running refresh finishes or is dropped.
struct Leader<'a> {
    gate: &'a RefreshGate,
    outcome: Option<Renewal>,
}

impl Drop for Leader<'_> {
    fn drop(&mut self) {
        let waiters = {
            let mut state = self.gate.lock();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        // Dropped senders wake waiters with `Canceled` when there is no outcome.
        if let Some(outcome) = &self.outcome {
            for tx in waiters {
                let _ = tx.send(outcome.clone());
            }
        }
    }
}

/// Delegates to another transport but never triggers the login redirect.
///
/// Used for probes where a missing session is an answer, not a failure.
pub struct Quiet<'a, T>(pub &'a T);

impl<T: Transport> Transport for Quiet<'_, T> {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.0.send(request).await
    }

    fn refresh_gate(&self) -> &RefreshGate {
        self.0.refresh_gate()
    }
}

/// Outcome of an authenticated call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authed {
    /// The (possibly replayed) response, unchanged.
    Response(ApiResponse),
    /// Refresh failed; the login redirect has been triggered.
    LoginRequired,
}

/// Access credential expired or rejected.
pub fn is_session_error(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Send `request`, refreshing the session and replaying once on 401/403.
///
/// # Errors
///
/// Propagates transport failures from any of the (at most three) sends.
pub async fn send_with_refresh<T: Transport>(transport: &T, request: &ApiRequest) -> Result<Authed, ApiError> {
    let response = transport.send(request).await?;
    if !is_session_error(response.status) {
        return Ok(Authed::Response(response));
    }

    log::debug!("session rejected ({}) for {}; refreshing", response.status, request.path);
    match transport.refresh_gate().renew(refresh_session(transport)).await {
        Renewal::Renewed => transport.send(request).await.map(Authed::Response),
        Renewal::Rejected => {
            transport.on_login_required();
            Ok(Authed::LoginRequired)
        }
        Renewal::Failed(e) => Err(e),
    }
}

async fn refresh_session<T: Transport>(transport: &T) -> Renewal {
    match transport.send(&ApiRequest::post(REFRESH_PATH)).await {
        Ok(resp) if resp.ok() => Renewal::Renewed,
        Ok(resp) => {
            log::info!("session refresh failed ({}); redirecting to login", resp.status);
            Renewal::Rejected
        }
        Err(e) => Renewal::Failed(e),
    }
}

/// [`send_with_refresh`] with `LoginRequired` folded into the error channel.
///
/// # Errors
///
/// Returns [`ApiError::LoginRequired`] when refresh failed, or the transport
/// failure.
pub async fn send_authed<T: Transport>(transport: &T, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
    match send_with_refresh(transport, request).await? {
        Authed::Response(response) => Ok(response),
        Authed::LoginRequired => Err(ApiError::LoginRequired),
    }
}

/// `gloo-net` transport with cookie credentials, used by the browser build.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
static BROWSER_REFRESH: RefreshGate = RefreshGate::new();

#[cfg(feature = "hydrate")]
impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = request.url(API_BASE);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");

        let sent = match &request.body {
            Some(body) => {
                builder
                    .body(body.clone())
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }

    fn refresh_gate(&self) -> &RefreshGate {
        &BROWSER_REFRESH
    }

    fn on_login_required(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
