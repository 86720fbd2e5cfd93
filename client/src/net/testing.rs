//! Scripted transport for exercising request flows without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse, REFRESH_PATH, RefreshGate, Transport};

pub(crate) use futures::executor::block_on;

/// Replays queued responses in order and records every request sent.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: RefCell<Vec<ApiRequest>>,
    login_redirects: Cell<u32>,
    gate: RefreshGate,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Result<ApiResponse, ApiError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), ..Self::default() }
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn sent_paths(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.path.clone()).collect()
    }

    pub(crate) fn login_redirects(&self) -> u32 {
        self.login_redirects.get()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted request to {}", request.path))
    }

    fn on_login_required(&self) {
        self.login_redirects.set(self.login_redirects.get() + 1);
    }

    fn refresh_gate(&self) -> &RefreshGate {
        &self.gate
    }
}

pub(crate) fn reply(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse { status, body: body.to_owned() })
}

/// Returns `Pending` once so joined futures interleave like network calls.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Session backend with an expired access token and a rotating refresh
/// token: each successful refresh issues a new token, and the old one is
/// rejected from then on. Cookies are read when a request is sent and
/// replaced when its response arrives, as in a browser.
#[derive(Default)]
pub(crate) struct RotatingSession {
    access_valid: Cell<bool>,
    /// Refresh token generation the backend currently accepts.
    issued: Cell<u32>,
    /// Refresh token generation the client's cookie holds.
    held: Cell<u32>,
    log: RefCell<Vec<String>>,
    login_redirects: Cell<u32>,
    gate: RefreshGate,
}

impl RotatingSession {
    /// A session whose refresh cookie the backend no longer accepts.
    pub(crate) fn revoked() -> Self {
        let session = Self::default();
        session.issued.set(1);
        session
    }

    pub(crate) fn expire_access(&self) {
        self.access_valid.set(false);
    }

    pub(crate) fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub(crate) fn refreshes(&self) -> usize {
        self.log.borrow().iter().filter(|line| line.starts_with(REFRESH_PATH)).count()
    }

    pub(crate) fn login_redirects(&self) -> u32 {
        self.login_redirects.get()
    }
}

impl Transport for RotatingSession {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let presented = self.held.get();
        let authorized = self.access_valid.get();
        YieldNow(false).await;

        let status = if request.path == REFRESH_PATH {
            if presented == self.issued.get() {
                let next = self.issued.get() + 1;
                self.issued.set(next);
                self.held.set(next);
                self.access_valid.set(true);
                200
            } else {
                401
            }
        } else if authorized {
            200
        } else {
            401
        };
        self.log.borrow_mut().push(format!("{} -> {status}", request.path));
        Ok(ApiResponse { status, body: "{}".to_owned() })
    }

    fn on_login_required(&self) {
        self.login_redirects.set(self.login_redirects.get() + 1);
    }

    fn refresh_gate(&self) -> &RefreshGate {
        &self.gate
    }
}
