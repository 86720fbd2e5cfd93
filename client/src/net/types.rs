//! Wire DTOs for the ticketing backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (including `seatsAvailable`)
//! so serde stays schema-driven. Enum spellings accept the variants the
//! backend and older UI builds have both emitted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Standard `{message, data}` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Bare `{message}` response used by auth and mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Air-conditioning class of a bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "NON_AC", alias = "Non-AC", alias = "NON-AC")]
    NonAc,
}

impl AirType {
    /// Backend spelling, also used as the `<option>` value.
    pub fn wire(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::NonAc => "NON_AC",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "AC" => Some(Self::Ac),
            "NON_AC" | "Non-AC" | "NON-AC" => Some(Self::NonAc),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::NonAc => "Non-AC",
        }
    }
}

/// Berth layout of a bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatType {
    #[serde(rename = "Sleeper", alias = "SLEEPER")]
    Sleeper,
    #[serde(rename = "Seater", alias = "SEATER")]
    Seater,
}

impl SeatType {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "Sleeper" | "SLEEPER" => Some(Self::Sleeper),
            "Seater" | "SEATER" => Some(Self::Seater),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sleeper => "Sleeper",
            Self::Seater => "Seater",
        }
    }
}

/// One scheduled run returned by `GET /trips/get`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip identifier.
    pub id: i64,
    /// Physical bus running this trip; needed to load the seat map.
    #[serde(default)]
    pub bus_id: Option<i64>,
    pub operator: String,
    pub air_type: AirType,
    pub seat_type: SeatType,
    /// `HH:MM:SS`.
    pub departure_time: String,
    /// `HH:MM:SS`.
    pub arrival_time: String,
    #[serde(default)]
    pub rating: f64,
    /// Unit fare per seat.
    pub price: u32,
    #[serde(rename = "seatsAvailable", default)]
    pub seats_available: u32,
}

impl Trip {
    pub fn bus_type_label(&self) -> String {
        format!("{} {}", self.air_type.label(), self.seat_type.label())
    }
}

/// A seat in a bus layout (`GET /seat/{busId}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub bus_id: i64,
    pub seat_label: String,
}

/// A seat already taken on a trip (`GET /tripSeat/{tripId}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSeat {
    pub id: i64,
    pub trip_id: i64,
    pub seat_id: i64,
}

/// One line of a `POST /booking/add` batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLine {
    pub trip_id: i64,
    pub seat_id: i64,
    pub price: u32,
}

/// Lifecycle state of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(serde::de::Error::unknown_variant(other, &["upcoming", "completed", "cancelled"])),
        }
    }
}

/// A booking row from `GET /booking/get`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub booking_status: BookingStatus,
    pub operator: String,
    pub air_type: AirType,
    pub seat_type: SeatType,
    pub start_city: String,
    pub end_city: String,
    /// ISO-8601 timestamp the booking was made.
    pub date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub total_price: u32,
    pub passenger_count: u32,
}

/// Account role. Only `admin` may open the operator pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Identity returned by `GET /Profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// Up to two uppercase initials for the navbar avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// `POST /trips/` body for scheduling a trip on an existing bus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrip {
    pub bus_number: String,
    pub start_city: String,
    pub end_city: String,
    /// `HH:MM:SS`.
    pub departure_time: String,
    /// `HH:MM:SS`.
    pub arrival_time: String,
    pub price: u32,
}

/// `POST /trips/` body carrying the bus details alongside the trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBusTrip {
    pub operator: String,
    pub bus_number: String,
    pub air_type: AirType,
    pub seat_type: SeatType,
    pub total_seat: u32,
    pub start_city: String,
    pub end_city: String,
    /// `HH:MM:SS`.
    pub departure_time: String,
    /// `HH:MM:SS`.
    pub arrival_time: String,
    pub price: u32,
}
