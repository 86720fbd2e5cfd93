//! Operator form models for scheduling trips and registering buses.
//!
//! Fields are kept as the raw strings the inputs produce; `to_payload`
//! validates them and builds the wire body.

#[cfg(test)]
#[path = "trip_form_test.rs"]
mod trip_form_test;

use crate::net::types::{AirType, NewBusTrip, NewTrip, SeatType};
use crate::util::time::{is_wire_time, widen_time};

pub const CREATED_MESSAGE: &str = "Trip created successfully!";

fn required(value: &str, label: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() { Err(format!("{label} is required.")) } else { Ok(value.to_owned()) }
}

fn time_field(value: &str, label: &str) -> Result<String, String> {
    let widened = widen_time(value).ok_or_else(|| format!("{label} is required."))?;
    if is_wire_time(&widened) { Ok(widened) } else { Err(format!("{label} must be a time like 21:30.")) }
}

fn positive(value: &str, label: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{label} must be a positive whole number.")),
    }
}

/// Shared route and schedule fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripFields {
    pub bus_number: String,
    pub start_city: String,
    pub end_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: String,
}

struct ValidTrip {
    bus_number: String,
    start_city: String,
    end_city: String,
    departure_time: String,
    arrival_time: String,
    price: u32,
}

impl TripFields {
    fn validate(&self) -> Result<ValidTrip, String> {
        Ok(ValidTrip {
            bus_number: required(&self.bus_number, "Bus number")?,
            start_city: required(&self.start_city, "Start city")?,
            end_city: required(&self.end_city, "End city")?,
            departure_time: time_field(&self.departure_time, "Departure time")?,
            arrival_time: time_field(&self.arrival_time, "Arrival time")?,
            price: positive(&self.price, "Price")?,
        })
    }
}

/// "Add Trip": a new run for a bus the backend already knows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripForm {
    pub trip: TripFields,
}

impl TripForm {
    /// # Errors
    ///
    /// Returns the first validation message.
    pub fn to_payload(&self) -> Result<NewTrip, String> {
        let t = self.trip.validate()?;
        Ok(NewTrip {
            bus_number: t.bus_number,
            start_city: t.start_city,
            end_city: t.end_city,
            departure_time: t.departure_time,
            arrival_time: t.arrival_time,
            price: t.price,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// "Add Bus": bus details plus its first trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusTripForm {
    pub operator: String,
    pub air_type: AirType,
    pub seat_type: SeatType,
    pub total_seat: String,
    pub trip: TripFields,
}

impl Default for BusTripForm {
    fn default() -> Self {
        Self {
            operator: String::new(),
            air_type: AirType::Ac,
            seat_type: SeatType::Sleeper,
            total_seat: String::new(),
            trip: TripFields::default(),
        }
    }
}

impl BusTripForm {
    /// # Errors
    ///
    /// Returns the first validation message.
    pub fn to_payload(&self) -> Result<NewBusTrip, String> {
        let operator = required(&self.operator, "Operator")?;
        let total_seat = positive(&self.total_seat, "Total seats")?;
        let t = self.trip.validate()?;
        Ok(NewBusTrip {
            operator,
            bus_number: t.bus_number,
            air_type: self.air_type,
            seat_type: self.seat_type,
            total_seat,
            start_city: t.start_city,
            end_city: t.end_city,
            departure_time: t.departure_time,
            arrival_time: t.arrival_time,
            price: t.price,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
