//! Typed backend operations.
//!
//! Every function takes the [`Transport`] to send through, so the browser
//! passes `BrowserTransport` and tests pass a scripted one. Session-scoped
//! endpoints go through `send_authed`; `login`/`register` do not.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Server`] carrying the message the
//! backend supplied, or the per-operation fallback text below.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse, Quiet, Transport, send_authed};
use super::types::{
    BookedSeat, Booking, BookingLine, Credentials, Envelope, MessageResponse, NewBusTrip, NewTrip, Registration, Seat,
    Trip, UserProfile,
};

const LOGIN_FAILED: &str = "Invalid credentials";
const REGISTER_FAILED: &str = "Registration failed";
const PROFILE_FAILED: &str = "Failed to load profile";
const TRIPS_FAILED: &str = "Failed to fetch buses";
const SEATS_FAILED: &str = "Failed to load seat map";
const BOOKING_FAILED: &str = "Booking failed";
const BOOKINGS_FAILED: &str = "Failed to fetch bookings";
const CANCEL_FAILED: &str = "Unknown error";
const CREATE_TRIP_FAILED: &str = "Failed to create trip";

fn seats_endpoint(bus_id: i64) -> String {
    format!("/seat/{bus_id}")
}

fn trip_seats_endpoint(trip_id: i64) -> String {
    format!("/tripSeat/{trip_id}")
}

fn cancel_booking_endpoint(booking_id: i64) -> String {
    format!("/booking/cancel/{booking_id}")
}

/// `Ok(())` for 2xx, otherwise the backend's message or `fallback`.
fn ensure_ok(resp: &ApiResponse, fallback: &str) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::from_body(resp.status, &resp.body, fallback))
    }
}

/// `/Profile` has shipped both bare and enveloped.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileBody {
    Bare(UserProfile),
    Wrapped(Envelope<UserProfile>),
}

/// Fetch the signed-in user's identity and role via `GET /Profile`.
///
/// # Errors
///
/// Returns [`ApiError::LoginRequired`] when the session cannot be renewed.
pub async fn fetch_profile<T: Transport>(transport: &T) -> Result<UserProfile, ApiError> {
    let resp = send_authed(transport, &ApiRequest::get("/Profile")).await?;
    ensure_ok(&resp, PROFILE_FAILED)?;
    Ok(match resp.json::<ProfileBody>()? {
        ProfileBody::Bare(profile) | ProfileBody::Wrapped(Envelope { data: profile, .. }) => profile,
    })
}

/// The signed-in user, or `None` when there is no usable session.
///
/// Unlike [`fetch_profile`] this never redirects; public pages use it to
/// decide what the navbar shows.
pub async fn current_user<T: Transport>(transport: &T) -> Option<UserProfile> {
    match fetch_profile(&Quiet(transport)).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::debug!("no active session: {e}");
            None
        }
    }
}

/// Authenticate via `POST /login`; the backend sets the session cookies.
///
/// Returns the backend's greeting message.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the rejection reason on bad credentials.
pub async fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<String, ApiError> {
    let resp = transport.send(&ApiRequest::post("/login").json(credentials)?).await?;
    ensure_ok(&resp, LOGIN_FAILED)?;
    Ok(resp.json::<MessageResponse>().map(|m| m.message).unwrap_or_default())
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] when the backend rejects the registration.
pub async fn register<T: Transport>(transport: &T, registration: &Registration) -> Result<String, ApiError> {
    let resp = transport.send(&ApiRequest::post("/register").json(registration)?).await?;
    ensure_ok(&resp, REGISTER_FAILED)?;
    Ok(resp.json::<MessageResponse>().map(|m| m.message).unwrap_or_default())
}

/// End the session via `POST /logout`. Failures are logged and ignored.
pub async fn logout<T: Transport>(transport: &T) {
    match transport.send(&ApiRequest::post("/logout")).await {
        Ok(resp) if resp.ok() => {}
        Ok(resp) => log::warn!("logout returned {}", resp.status),
        Err(e) => log::warn!("logout failed: {e}"),
    }
}

/// List trips for a route via `GET /trips/get`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn search_trips<T: Transport>(transport: &T, from: &str, to: &str) -> Result<Vec<Trip>, ApiError> {
    let req = ApiRequest::get("/trips/get").query("start_city", from).query("end_city", to);
    let resp = send_authed(transport, &req).await?;
    ensure_ok(&resp, TRIPS_FAILED)?;
    Ok(resp.json::<Envelope<Vec<Trip>>>()?.data)
}

/// Seat layout of a bus via `GET /seat/{busId}`.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded.
pub async fn fetch_seats<T: Transport>(transport: &T, bus_id: i64) -> Result<Vec<Seat>, ApiError> {
    let resp = send_authed(transport, &ApiRequest::get(seats_endpoint(bus_id))).await?;
    ensure_ok(&resp, SEATS_FAILED)?;
    Ok(resp.json::<Envelope<Vec<Seat>>>()?.data)
}

/// Seat ids already booked on a trip via `GET /tripSeat/{tripId}`.
///
/// The backend answers 404 when nothing is booked yet. Any other failure is
/// logged and treated as "none booked"; the booking call re-validates.
///
/// # Errors
///
/// Returns [`ApiError::LoginRequired`] or a transport failure.
pub async fn fetch_booked_seat_ids<T: Transport>(transport: &T, trip_id: i64) -> Result<Vec<i64>, ApiError> {
    let resp = send_authed(transport, &ApiRequest::get(trip_seats_endpoint(trip_id))).await?;
    if resp.status == 404 {
        return Ok(Vec::new());
    }
    if !resp.ok() {
        log::warn!("booked seats for trip {trip_id} unavailable: {}", resp.status);
        return Ok(Vec::new());
    }
    let booked = resp.json::<Envelope<Vec<BookedSeat>>>()?.data;
    Ok(booked.into_iter().map(|b| b.seat_id).collect())
}

/// Submit one booking batch via `POST /booking/add`.
///
/// An empty batch sends nothing.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the backend's reason (for example, no
/// seats left) or `"Booking failed"`.
pub async fn create_booking<T: Transport>(transport: &T, lines: &[BookingLine]) -> Result<(), ApiError> {
    if lines.is_empty() {
        return Ok(());
    }
    let req = ApiRequest::post("/booking/add").json(lines)?;
    let resp = send_authed(transport, &req).await?;
    ensure_ok(&resp, BOOKING_FAILED)
}

/// The current user's bookings via `GET /booking/get`.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded.
pub async fn fetch_bookings<T: Transport>(transport: &T) -> Result<Vec<Booking>, ApiError> {
    let resp = send_authed(transport, &ApiRequest::get("/booking/get")).await?;
    ensure_ok(&resp, BOOKINGS_FAILED)?;
    Ok(resp.json::<Envelope<Vec<Booking>>>()?.data)
}

/// Cancel a booking via `POST /booking/cancel/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] when the backend refuses the cancellation.
pub async fn cancel_booking<T: Transport>(transport: &T, booking_id: i64) -> Result<(), ApiError> {
    let resp = send_authed(transport, &ApiRequest::post(cancel_booking_endpoint(booking_id))).await?;
    ensure_ok(&resp, CANCEL_FAILED)
}

/// Schedule a trip on an existing bus via `POST /trips/`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with flattened validation messages on 422.
pub async fn create_trip<T: Transport>(transport: &T, trip: &NewTrip) -> Result<(), ApiError> {
    let resp = send_authed(transport, &ApiRequest::post("/trips/").json(trip)?).await?;
    ensure_ok(&resp, CREATE_TRIP_FAILED)
}

/// Register a bus together with its first trip via `POST /trips/`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with flattened validation messages on 422.
pub async fn create_bus_trip<T: Transport>(transport: &T, trip: &NewBusTrip) -> Result<(), ApiError> {
    let resp = send_authed(transport, &ApiRequest::post("/trips/").json(trip)?).await?;
    ensure_ok(&resp, CREATE_TRIP_FAILED)
}
