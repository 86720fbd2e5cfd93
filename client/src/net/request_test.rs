use super::*;
use std::task::{Context, Poll};

use crate::net::testing::{RotatingSession, ScriptedTransport, block_on, reply};

fn booking_request() -> ApiRequest {
    ApiRequest::post("/booking/add")
        .json(&serde_json::json!([{ "trip_id": 7, "seat_id": 3, "price": 500 }]))
        .unwrap()
}

// =============================================================
// ApiRequest
// =============================================================

#[test]
fn url_joins_base_and_path() {
    assert_eq!(ApiRequest::get("/booking/get").url("/api"), "/api/booking/get");
    assert_eq!(ApiRequest::get("/booking/get").url("/api/"), "/api/booking/get");
}

#[test]
fn url_form_encodes_query_pairs_in_order() {
    let req = ApiRequest::get("/trips/get")
        .query("start_city", "New Delhi")
        .query("end_city", "Jaipur&Co");
    assert_eq!(req.url("/api"), "/api/trips/get?start_city=New+Delhi&end_city=Jaipur%26Co");
}

#[test]
fn json_body_is_serialized_once() {
    let req = booking_request();
    assert_eq!(req.method, Method::Post);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!([{ "trip_id": 7, "seat_id": 3, "price": 500 }]));
}

#[test]
fn response_ok_covers_2xx_only() {
    assert!(ApiResponse { status: 200, body: String::new() }.ok());
    assert!(ApiResponse { status: 204, body: String::new() }.ok());
    assert!(!ApiResponse { status: 301, body: String::new() }.ok());
    assert!(!ApiResponse { status: 404, body: String::new() }.ok());
}

#[test]
fn response_json_reports_decode_errors() {
    let resp = ApiResponse { status: 200, body: "not json".to_owned() };
    assert!(matches!(resp.json::<serde_json::Value>(), Err(ApiError::Decode(_))));
}

// =============================================================
// send_with_refresh
// =============================================================

#[test]
fn success_is_returned_without_refresh() {
    let transport = ScriptedTransport::new(vec![reply(200, r#"{"data":[]}"#)]);
    let out = block_on(send_with_refresh(&transport, &ApiRequest::get("/booking/get"))).unwrap();

    assert_eq!(out, Authed::Response(ApiResponse { status: 200, body: r#"{"data":[]}"#.to_owned() }));
    assert_eq!(transport.sent_paths(), vec!["/booking/get"]);
}

#[test]
fn non_session_failures_are_not_retried() {
    for status in [400, 404, 422, 500, 502] {
        let transport = ScriptedTransport::new(vec![reply(status, "{}")]);
        let out = block_on(send_with_refresh(&transport, &booking_request())).unwrap();

        assert!(matches!(out, Authed::Response(ref r) if r.status == status));
        assert_eq!(transport.sent().len(), 1, "status {status} must not trigger refresh");
    }
}

#[test]
fn expired_session_refreshes_and_replays_identical_request() {
    for status in [401, 403] {
        let transport = ScriptedTransport::new(vec![
            reply(status, r#"{"detail":"Access token missing"}"#),
            reply(200, r#"{"message":"refreshed"}"#),
            reply(200, r#"{"message":"Booking data added"}"#),
        ]);
        let original = booking_request();
        let out = block_on(send_with_refresh(&transport, &original)).unwrap();

        assert!(matches!(out, Authed::Response(ref r) if r.status == 200));
        let sent = transport.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0], original);
        assert_eq!(sent[1], ApiRequest::post(REFRESH_PATH));
        assert_eq!(sent[2], original);
        assert_eq!(transport.login_redirects(), 0);
    }
}

#[test]
fn failed_refresh_redirects_without_retry() {
    let transport = ScriptedTransport::new(vec![reply(401, "{}"), reply(401, r#"{"detail":"expired"}"#)]);
    let out = block_on(send_with_refresh(&transport, &booking_request())).unwrap();

    assert_eq!(out, Authed::LoginRequired);
    assert_eq!(transport.sent_paths(), vec!["/booking/add", "/refresh"]);
    assert_eq!(transport.login_redirects(), 1);
}

#[test]
fn replayed_session_error_is_returned_not_looped() {
    let transport = ScriptedTransport::new(vec![reply(403, "{}"), reply(200, "{}"), reply(403, r#"{"detail":"forbidden"}"#)]);
    let out = block_on(send_with_refresh(&transport, &ApiRequest::get("/Profile"))).unwrap();

    assert!(matches!(out, Authed::Response(ref r) if r.status == 403));
    assert_eq!(transport.sent().len(), 3);
    assert_eq!(transport.login_redirects(), 0);
}

#[test]
fn transport_failure_propagates() {
    let transport = ScriptedTransport::new(vec![Err(ApiError::Network("offline".to_owned()))]);
    let err = block_on(send_with_refresh(&transport, &ApiRequest::get("/Profile"))).unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_owned()));
}

#[test]
fn refresh_transport_failure_propagates_without_redirect() {
    let transport = ScriptedTransport::new(vec![reply(401, "{}"), Err(ApiError::Network("offline".to_owned()))]);
    let err = block_on(send_with_refresh(&transport, &ApiRequest::get("/Profile"))).unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(transport.login_redirects(), 0);
}

#[test]
fn send_authed_folds_login_required_into_error() {
    let transport = ScriptedTransport::new(vec![reply(401, "{}"), reply(500, "{}")]);
    let err = block_on(send_authed(&transport, &ApiRequest::get("/booking/get"))).unwrap_err();
    assert_eq!(err, ApiError::LoginRequired);
}

#[test]
fn session_error_statuses() {
    assert!(is_session_error(401));
    assert!(is_session_error(403));
    assert!(!is_session_error(400));
    assert!(!is_session_error(419));
}

#[test]
fn quiet_transport_suppresses_login_redirect() {
    let inner = ScriptedTransport::new(vec![reply(401, "{}"), reply(401, "{}")]);
    let out = block_on(send_with_refresh(&Quiet(&inner), &ApiRequest::get("/Profile"))).unwrap();

    assert_eq!(out, Authed::LoginRequired);
    assert_eq!(inner.sent_paths(), vec!["/Profile", "/refresh"]);
    assert_eq!(inner.login_redirects(), 0);
}

// =============================================================
// concurrent refresh
// =============================================================

#[test]
fn concurrent_session_errors_share_one_refresh() {
    let session = RotatingSession::default();
    let (probe, page) = block_on(async {
        let quiet = Quiet(&session);
        let profile_req = ApiRequest::get("/Profile");
        let other_req = ApiRequest::get("/trips/get");
        futures::join!(
            send_with_refresh(&quiet, &profile_req),
            send_with_refresh(&session, &other_req),
        )
    });

    assert!(matches!(probe, Ok(Authed::Response(ref r)) if r.status == 200));
    assert!(matches!(page, Ok(Authed::Response(ref r)) if r.status == 200));
    assert_eq!(session.refreshes(), 1);
    assert_eq!(session.login_redirects(), 0);
    assert_eq!(
        session.log(),
        vec!["/Profile -> 401", "/trips/get -> 401", "/refresh -> 200", "/Profile -> 200", "/trips/get -> 200"]
    );
}

#[test]
fn later_expiry_refreshes_with_rotated_token() {
    let session = RotatingSession::default();
    block_on(send_with_refresh(&session, &ApiRequest::get("/booking/get"))).unwrap();
    session.expire_access();
    let out = block_on(send_with_refresh(&session, &ApiRequest::get("/booking/get"))).unwrap();

    assert!(matches!(out, Authed::Response(ref r) if r.status == 200));
    assert_eq!(session.refreshes(), 2);
    assert_eq!(session.login_redirects(), 0);
}

#[test]
fn concurrent_callers_all_see_rejected_refresh() {
    let session = RotatingSession::revoked();
    let (probe, page) = block_on(async {
        let quiet = Quiet(&session);
        let profile_req = ApiRequest::get("/Profile");
        let other_req = ApiRequest::get("/booking/get");
        futures::join!(
            send_with_refresh(&quiet, &profile_req),
            send_with_refresh(&session, &other_req),
        )
    });

    assert_eq!(probe.unwrap(), Authed::LoginRequired);
    assert_eq!(page.unwrap(), Authed::LoginRequired);
    assert_eq!(session.refreshes(), 1);
    // Only the page redirects; the quiet probe stays put.
    assert_eq!(session.login_redirects(), 1);
}

#[test]
fn abandoned_refresh_releases_waiters() {
    let gate = RefreshGate::new();
    let mut cx = Context::from_waker(futures::task::noop_waker_ref());
    let mut leader = Box::pin(gate.renew(std::future::pending::<Renewal>()));
    let mut waiter = Box::pin(gate.renew(async { Renewal::Renewed }));

    assert!(leader.as_mut().poll(&mut cx).is_pending());
    assert!(waiter.as_mut().poll(&mut cx).is_pending());
    drop(leader);

    assert!(matches!(waiter.as_mut().poll(&mut cx), Poll::Ready(Renewal::Failed(ApiError::Network(_)))));
    assert_eq!(block_on(gate.renew(async { Renewal::Renewed })), Renewal::Renewed);
}
