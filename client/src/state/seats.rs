//! Seat selection and booking-modal state.
//!
//! DESIGN
//! ======
//! `SeatSelection` owns the "booked seats are never selectable" rule: ids are
//! checked against the booked set on toggle, and a late `set_booked` evicts
//! any now-taken ids. The modal wraps the selection with the seat map and the
//! submit status so the page only forwards events.

#[cfg(test)]
#[path = "seats_test.rs"]
mod seats_test;

use std::collections::HashSet;

use super::form::FormStatus;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::request::Transport;
use crate::net::types::{BookingLine, Seat, Trip};

/// Upper bound on seats in one booking.
pub const MAX_SEATS_PER_BOOKING: usize = 6;

const SEAT_MAP_ERROR: &str = "Could not load seat map. Please try again.";

/// Seats the user has picked for one trip, in pick order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatSelection {
    selected: Vec<i64>,
    booked: HashSet<i64>,
}

impl SeatSelection {
    /// Replace the booked set, dropping any selected ids it now contains.
    pub fn set_booked(&mut self, booked: impl IntoIterator<Item = i64>) {
        self.booked = booked.into_iter().collect();
        let booked = &self.booked;
        self.selected.retain(|id| !booked.contains(id));
    }

    /// Select or deselect `seat_id`. Booked seats and picks beyond the cap are
    /// ignored. Returns whether the selection changed.
    pub fn toggle(&mut self, seat_id: i64) -> bool {
        if let Some(pos) = self.selected.iter().position(|&id| id == seat_id) {
            self.selected.remove(pos);
            return true;
        }
        if self.booked.contains(&seat_id) || self.selected.len() >= MAX_SEATS_PER_BOOKING {
            return false;
        }
        self.selected.push(seat_id);
        true
    }

    pub fn is_selected(&self, seat_id: i64) -> bool {
        self.selected.contains(&seat_id)
    }

    pub fn is_booked(&self, seat_id: i64) -> bool {
        self.booked.contains(&seat_id)
    }

    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// One booking line per selected seat at the trip's unit fare.
    pub fn booking_lines(&self, trip: &Trip) -> Vec<BookingLine> {
        self.selected
            .iter()
            .map(|&seat_id| BookingLine { trip_id: trip.id, seat_id, price: trip.price })
            .collect()
    }

    pub fn total_price(&self, unit_price: u32) -> u32 {
        let count = u32::try_from(self.selected.len()).unwrap_or(u32::MAX);
        unit_price.saturating_mul(count)
    }
}

/// State of the seat-picker dialog for one trip.
#[derive(Clone, Debug, Default)]
pub struct BookingModal {
    /// The trip being booked; `None` while the dialog is closed.
    pub trip: Option<Trip>,
    pub seats: Vec<Seat>,
    pub selection: SeatSelection,
    pub seats_loading: bool,
    /// Seat-map load failure, kept apart from the submit status.
    pub seats_error: Option<String>,
    pub status: FormStatus,
}

impl BookingModal {
    pub fn is_open(&self) -> bool {
        self.trip.is_some()
    }

    /// Open for `trip`, discarding anything left from a previous trip.
    pub fn open(&mut self, trip: Trip) {
        *self = Self { trip: Some(trip), seats_loading: true, ..Self::default() };
    }

    /// Close the dialog unless a booking is in flight. Returns whether it
    /// closed.
    pub fn close(&mut self) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Apply the result of [`load_seat_map`].
    pub fn seats_loaded(&mut self, result: Result<(Vec<Seat>, Vec<i64>), ApiError>) {
        self.seats_loading = false;
        match result {
            Ok((seats, booked)) => {
                self.seats = seats;
                self.selection.set_booked(booked);
            }
            Err(e) => {
                log::warn!("seat map load failed: {e}");
                self.seats_error = Some(SEAT_MAP_ERROR.to_owned());
            }
        }
    }

    pub fn toggle(&mut self, seat_id: i64) {
        if self.status.is_submitting() || self.status.success().is_some() {
            return;
        }
        self.selection.toggle(seat_id);
    }

    /// Labels of the selected seats, in pick order.
    pub fn selected_labels(&self) -> Vec<String> {
        self.selection
            .selected()
            .iter()
            .filter_map(|id| self.seats.iter().find(|s| s.id == *id))
            .map(|s| s.seat_label.clone())
            .collect()
    }

    pub fn total_price(&self) -> u32 {
        self.trip.as_ref().map_or(0, |t| self.selection.total_price(t.price))
    }

    pub fn can_submit(&self) -> bool {
        self.trip.is_some() && !self.selection.is_empty() && !self.status.is_submitting()
    }

    /// Enter `Submitting` and return the lines to send, or `None` when there
    /// is nothing to book.
    pub fn begin_submit(&mut self) -> Option<Vec<BookingLine>> {
        if !self.can_submit() {
            return None;
        }
        let lines = self.selection.booking_lines(self.trip.as_ref()?);
        self.status.begin();
        Some(lines)
    }

    /// Success clears the selection and shows the confirmation; failure
    /// keeps the selection so the user can retry.
    pub fn submit_finished(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                let count = self.selection.len();
                self.selection.clear();
                self.status = FormStatus::Success(format!(
                    "Your tickets for {count} passenger(s) have been booked successfully."
                ));
            }
            Err(e) => self.status.fail(e.to_string()),
        }
    }
}

/// Seat layout of the trip's bus plus the ids already booked on the trip.
///
/// # Errors
///
/// Fails when the trip carries no bus id or the layout cannot be loaded.
pub async fn load_seat_map<T: Transport>(transport: &T, trip: &Trip) -> Result<(Vec<Seat>, Vec<i64>), ApiError> {
    let bus_id = trip.bus_id.ok_or_else(|| ApiError::Decode(format!("trip {} has no bus id", trip.id)))?;
    let seats = api::fetch_seats(transport, bus_id).await?;
    let booked = api::fetch_booked_seat_ids(transport, trip.id).await?;
    Ok((seats, booked))
}
