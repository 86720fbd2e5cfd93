//! "My Bookings" view state: the fetched list, the active tab, and cancel
//! progress.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use super::form::LoadState;
use crate::net::types::{Booking, BookingStatus};
use crate::util::time::{clock, format_booking_date};

/// Confirmation prompt shown before a cancel request.
pub const CANCEL_CONFIRM: &str = "Are you sure you want to cancel this ticket? This action cannot be undone.";

/// Which bookings the page lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingTab {
    #[default]
    Upcoming,
    /// Completed and cancelled trips.
    History,
}

impl BookingTab {
    pub fn includes(self, status: BookingStatus) -> bool {
        match self {
            Self::Upcoming => status == BookingStatus::Upcoming,
            Self::History => matches!(status, BookingStatus::Completed | BookingStatus::Cancelled),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::History => "History",
        }
    }
}

/// Display projection of one booking row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingView {
    pub id: i64,
    pub status: BookingStatus,
    pub operator: String,
    pub bus_type: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub departure: String,
    pub arrival: String,
    pub total_amount: u32,
    pub passenger_count: u32,
    pub reference: String,
}

impl BookingView {
    /// Only trips that have not run yet may be cancelled.
    pub fn cancellable(&self) -> bool {
        self.status == BookingStatus::Upcoming
    }
}

impl From<&Booking> for BookingView {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            status: b.booking_status,
            operator: b.operator.clone(),
            bus_type: format!("{} {}", b.air_type.label(), b.seat_type.label()),
            from: b.start_city.clone(),
            to: b.end_city.clone(),
            date: format_booking_date(&b.date),
            departure: clock(&b.departure_time).to_owned(),
            arrival: clock(&b.arrival_time).to_owned(),
            total_amount: b.total_price,
            passenger_count: b.passenger_count,
            reference: format!("PNR-{:06}", b.id),
        }
    }
}

/// Everything the bookings page renders.
#[derive(Clone, Debug, Default)]
pub struct BookingsState {
    pub items: Vec<BookingView>,
    pub load: LoadState,
    pub tab: BookingTab,
    /// Booking whose cancel request is in flight.
    pub cancelling: Option<i64>,
    /// Outcome of the last cancel, shown above the list.
    pub notice: Option<String>,
}

impl BookingsState {
    pub fn replace(&mut self, bookings: &[Booking]) {
        self.items = bookings.iter().map(BookingView::from).collect();
    }

    pub fn visible(&self) -> Vec<BookingView> {
        self.items.iter().filter(|b| self.tab.includes(b.status)).cloned().collect()
    }

    pub fn count(&self, tab: BookingTab) -> usize {
        self.items.iter().filter(|b| tab.includes(b.status)).count()
    }

    /// Mark `id` as cancelling. Returns `false` if another cancel is pending.
    pub fn begin_cancel(&mut self, id: i64) -> bool {
        if self.cancelling.is_some() {
            return false;
        }
        self.cancelling = Some(id);
        self.notice = None;
        true
    }

    pub fn finish_cancel<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        self.cancelling = None;
        self.notice = Some(match result {
            Ok(()) => "Ticket cancelled successfully.".to_owned(),
            Err(e) => format!("Failed to cancel: {e}"),
        });
    }
}
