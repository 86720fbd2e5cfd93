use super::*;
use crate::net::request::Method;
use crate::net::testing::{ScriptedTransport, block_on, reply};
use crate::net::types::Role;

const TRIPS_BODY: &str = r#"{"message":"trip data fetched","data":[
    {"id":1,"bus_id":10,"operator":"SRS","air_type":"NON_AC","seat_type":"Seater",
     "departure_time":"08:00:00","arrival_time":"14:00:00","rating":3,"price":500,"seatsAvailable":12},
    {"id":2,"bus_id":11,"operator":"VRL","air_type":"AC","seat_type":"Sleeper",
     "departure_time":"21:30:00","arrival_time":"05:30:00","rating":4,"price":800,"seatsAvailable":4}
]}"#;

#[test]
fn endpoint_paths_embed_ids() {
    assert_eq!(seats_endpoint(4), "/seat/4");
    assert_eq!(trip_seats_endpoint(9), "/tripSeat/9");
    assert_eq!(cancel_booking_endpoint(31), "/booking/cancel/31");
}

// =============================================================
// profile / auth
// =============================================================

#[test]
fn fetch_profile_accepts_bare_body() {
    let transport = ScriptedTransport::new(vec![reply(200, r#"{"name":"Op","email":"op@x.com","role":"admin"}"#)]);
    let profile = block_on(fetch_profile(&transport)).unwrap();
    assert_eq!(profile.role, Role::Admin);
}

#[test]
fn fetch_profile_accepts_enveloped_body() {
    let body = r#"{"message":"ok","data":{"name":"U","email":"u@x.com","role":"user"}}"#;
    let transport = ScriptedTransport::new(vec![reply(200, body)]);
    let profile = block_on(fetch_profile(&transport)).unwrap();
    assert_eq!(profile.role, Role::User);
}

#[test]
fn fetch_profile_refreshes_expired_session() {
    let transport = ScriptedTransport::new(vec![
        reply(401, "{}"),
        reply(200, "{}"),
        reply(200, r#"{"name":"U","email":"u@x.com","role":"user"}"#),
    ]);
    block_on(fetch_profile(&transport)).unwrap();
    assert_eq!(transport.sent_paths(), vec!["/Profile", "/refresh", "/Profile"]);
}

#[test]
fn current_user_is_none_without_session() {
    let transport = ScriptedTransport::new(vec![reply(401, "{}"), reply(401, "{}")]);
    assert_eq!(block_on(current_user(&transport)), None);
    assert_eq!(transport.login_redirects(), 0);
}

#[test]
fn current_user_returns_profile() {
    let transport = ScriptedTransport::new(vec![reply(200, r#"{"name":"Op","email":"op@x.com","role":"admin"}"#)]);
    let user = block_on(current_user(&transport)).unwrap();
    assert_eq!(user.name, "Op");
}

#[test]
fn login_does_not_attempt_refresh() {
    let transport = ScriptedTransport::new(vec![reply(401, r#"{"detail":"Invalid credentials"}"#)]);
    let creds = Credentials { email: "a@b.com".to_owned(), password: "nope".to_owned() };
    let err = block_on(login(&transport, &creds)).unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn login_returns_backend_message() {
    let transport = ScriptedTransport::new(vec![reply(200, r#"{"message":"Login successful","data":{"id":1}}"#)]);
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(block_on(login(&transport, &creds)).unwrap(), "Login successful");
}

#[test]
fn register_surfaces_duplicate_user() {
    let transport = ScriptedTransport::new(vec![reply(400, r#"{"detail":"Username already exists"}"#)]);
    let reg = Registration {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::User,
    };
    let err = block_on(register(&transport, &reg)).unwrap_err();
    assert_eq!(err.to_string(), "Username already exists");
}

#[test]
fn logout_swallows_failures() {
    let transport = ScriptedTransport::new(vec![Err(ApiError::Network("offline".to_owned()))]);
    block_on(logout(&transport));
    assert_eq!(transport.sent_paths(), vec!["/logout"]);
}

// =============================================================
// trips / seats
// =============================================================

#[test]
fn search_trips_sends_route_query() {
    let transport = ScriptedTransport::new(vec![reply(200, TRIPS_BODY)]);
    let trips = block_on(search_trips(&transport, "Mangalore", "Bangalore")).unwrap();

    assert_eq!(trips.len(), 2);
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url("/api"), "/api/trips/get?start_city=Mangalore&end_city=Bangalore");
}

#[test]
fn search_trips_failure_uses_backend_detail() {
    let transport = ScriptedTransport::new(vec![reply(404, r#"{"detail":"Route not found"}"#)]);
    let err = block_on(search_trips(&transport, "A", "B")).unwrap_err();
    assert_eq!(err.to_string(), "Route not found");
}

#[test]
fn fetch_seats_reads_envelope() {
    let body = r#"{"message":"seats fetched","data":[{"id":1,"bus_id":10,"seat_label":"A1"}]}"#;
    let transport = ScriptedTransport::new(vec![reply(200, body)]);
    let seats = block_on(fetch_seats(&transport, 10)).unwrap();
    assert_eq!(seats[0].seat_label, "A1");
    assert_eq!(transport.sent_paths(), vec!["/seat/10"]);
}

#[test]
fn booked_seats_not_found_means_none_booked() {
    let transport = ScriptedTransport::new(vec![reply(404, r#"{"detail":"TripSeats for Trip ID 1 not found"}"#)]);
    assert!(block_on(fetch_booked_seat_ids(&transport, 1)).unwrap().is_empty());
}

#[test]
fn booked_seats_server_error_degrades_to_empty() {
    let transport = ScriptedTransport::new(vec![reply(500, "{}")]);
    assert!(block_on(fetch_booked_seat_ids(&transport, 1)).unwrap().is_empty());
}

#[test]
fn booked_seats_extracts_seat_ids() {
    let body = r#"{"data":[{"id":1,"trip_id":2,"seat_id":5},{"id":2,"trip_id":2,"seat_id":8}]}"#;
    let transport = ScriptedTransport::new(vec![reply(200, body)]);
    assert_eq!(block_on(fetch_booked_seat_ids(&transport, 2)).unwrap(), vec![5, 8]);
}

// =============================================================
// bookings
// =============================================================

#[test]
fn create_booking_posts_line_array() {
    let transport = ScriptedTransport::new(vec![reply(200, r#"{"message":"Booking data added"}"#)]);
    let lines = vec![
        BookingLine { trip_id: 2, seat_id: 5, price: 800 },
        BookingLine { trip_id: 2, seat_id: 6, price: 800 },
    ];
    block_on(create_booking(&transport, &lines)).unwrap();

    let sent = transport.sent();
    let body: Vec<BookingLine> = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, lines);
}

#[test]
fn create_booking_with_no_lines_sends_nothing() {
    let transport = ScriptedTransport::new(vec![]);
    block_on(create_booking(&transport, &[])).unwrap();
    assert!(transport.sent().is_empty());
}

#[test]
fn create_booking_failure_without_detail_uses_fallback() {
    let transport = ScriptedTransport::new(vec![reply(500, "Internal Server Error")]);
    let lines = vec![BookingLine { trip_id: 2, seat_id: 5, price: 800 }];
    let err = block_on(create_booking(&transport, &lines)).unwrap_err();
    assert_eq!(err.to_string(), "Booking failed");
}

#[test]
fn create_booking_login_required_after_failed_refresh() {
    let transport = ScriptedTransport::new(vec![reply(403, "{}"), reply(401, "{}")]);
    let lines = vec![BookingLine { trip_id: 2, seat_id: 5, price: 800 }];
    let err = block_on(create_booking(&transport, &lines)).unwrap_err();

    assert_eq!(err, ApiError::LoginRequired);
    assert_eq!(transport.login_redirects(), 1);
}

#[test]
fn cancel_booking_surfaces_backend_detail() {
    let transport = ScriptedTransport::new(vec![reply(404, r#"{"detail":"Booking ID 31 not found."}"#)]);
    let err = block_on(cancel_booking(&transport, 31)).unwrap_err();
    assert_eq!(err.to_string(), "Booking ID 31 not found.");
    assert_eq!(transport.sent()[0].method, Method::Post);
}

#[test]
fn fetch_bookings_reads_envelope() {
    let body = r#"{"message":"Booking data fetched","data":[{
        "id":5,"booking_status":"cancelled","operator":"KSRTC","air_type":"AC","seat_type":"Seater",
        "start_city":"Mangalore","end_city":"Bangalore","date":"2026-10-19T09:15:00",
        "departure_time":"22:00:00","arrival_time":"06:00:00","total_price":1600,"passenger_count":2}]}"#;
    let transport = ScriptedTransport::new(vec![reply(200, body)]);
    let bookings = block_on(fetch_bookings(&transport)).unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, 5);
}

// =============================================================
// operator
// =============================================================

#[test]
fn create_trip_flattens_validation_errors() {
    let body = r#"{"detail":[{"loc":["body","price"],"msg":"must be positive"}]}"#;
    let transport = ScriptedTransport::new(vec![reply(422, body)]);
    let trip = NewTrip {
        bus_number: "KA-01".to_owned(),
        start_city: "A".to_owned(),
        end_city: "B".to_owned(),
        departure_time: "10:00:00".to_owned(),
        arrival_time: "12:00:00".to_owned(),
        price: 0,
    };
    let err = block_on(create_trip(&transport, &trip)).unwrap_err();
    assert_eq!(err.to_string(), "price: must be positive");
    assert_eq!(transport.sent_paths(), vec!["/trips/"]);
}
