//! Search-results view state: criteria from the URL, filters, and sort order.
//!
//! DESIGN
//! ======
//! The fetched trip list is kept as returned. Filtering and sorting are a
//! pure projection (`display_trips`) recomputed on every render, so toggling a
//! filter never needs another backend call.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::cmp::Ordering;

use super::form::LoadState;
use crate::net::types::{AirType, SeatType, Trip};

pub const DEFAULT_FROM: &str = "Mangalore";
pub const DEFAULT_TO: &str = "Bangalore";
pub const DEFAULT_DATE: &str = "Today";

/// Routes offered as one-click searches on the home page.
pub const POPULAR_ROUTES: [(&str, &str); 3] =
    [("Mangalore", "Bangalore"), ("Mysore", "Chennai"), ("Udupi", "Hyderabad")];

/// Origin, destination, travel date, and head count for one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    pub from: String,
    pub to: String,
    pub date: String,
    pub passengers: Option<u32>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_owned(),
            to: DEFAULT_TO.to_owned(),
            date: DEFAULT_DATE.to_owned(),
            passengers: None,
        }
    }
}

impl SearchCriteria {
    pub fn route(from: &str, to: &str) -> Self {
        Self { from: from.to_owned(), to: to.to_owned(), ..Self::default() }
    }

    /// Build criteria from URL query lookups; absent or blank keys take the
    /// defaults.
    pub fn from_query<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            get(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            from: value("from", DEFAULT_FROM),
            to: value("to", DEFAULT_TO),
            date: value("date", DEFAULT_DATE),
            passengers: get("passengers").and_then(|p| p.trim().parse().ok()).filter(|&p| p > 0),
        }
    }

    /// Validate the home-page form. Blank date means today.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a city is missing, both cities are
    /// the same, or the passenger count is not a positive number.
    pub fn from_form(from: &str, to: &str, date: &str, passengers: &str) -> Result<Self, &'static str> {
        let (from, to, date) = (from.trim(), to.trim(), date.trim());
        if from.is_empty() || to.is_empty() {
            return Err("Enter both origin and destination.");
        }
        if from.eq_ignore_ascii_case(to) {
            return Err("Origin and destination must differ.");
        }
        let passengers = match passengers.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err("Passengers must be a positive number."),
            },
        };
        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
            date: if date.is_empty() { DEFAULT_DATE.to_owned() } else { date.to_owned() },
            passengers,
        })
    }
}

/// Result ordering chosen in the sort dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Backend order.
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Recommended, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Parse a dropdown value; unknown values fall back to `Recommended`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price_low" => Self::PriceLow,
            "price_high" => Self::PriceHigh,
            "rating" => Self::Rating,
            _ => Self::Recommended,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceLow => "Cheapest First",
            Self::PriceHigh => "Price High to Low",
            Self::Rating => "Top Rated",
        }
    }

    fn compare(self, a: &Trip, b: &Trip) -> Ordering {
        match self {
            Self::Recommended => Ordering::Equal,
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// One "Bus Type" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BusFilter {
    Air(AirType),
    Seat(SeatType),
}

impl BusFilter {
    pub const ALL: [Self; 4] = [
        Self::Air(AirType::Ac),
        Self::Air(AirType::NonAc),
        Self::Seat(SeatType::Sleeper),
        Self::Seat(SeatType::Seater),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Air(air) => air.label(),
            Self::Seat(seat) => seat.label(),
        }
    }
}

/// The set of checked bus-type filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripFilters {
    active: Vec<BusFilter>,
}

impl TripFilters {
    pub fn toggle(&mut self, filter: BusFilter) {
        if let Some(pos) = self.active.iter().position(|f| *f == filter) {
            self.active.remove(pos);
        } else {
            self.active.push(filter);
        }
    }

    pub fn contains(&self, filter: BusFilter) -> bool {
        self.active.contains(&filter)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Air filters are OR-ed, seat filters are OR-ed, and the two groups are
    /// AND-ed. An empty group matches everything.
    pub fn matches(&self, trip: &Trip) -> bool {
        let mut air = Vec::new();
        let mut seat = Vec::new();
        for filter in &self.active {
            match *filter {
                BusFilter::Air(a) => air.push(a),
                BusFilter::Seat(s) => seat.push(s),
            }
        }
        (air.is_empty() || air.contains(&trip.air_type)) && (seat.is_empty() || seat.contains(&trip.seat_type))
    }
}

/// Filtered and sorted view of `trips`. The sort is stable, so ties keep
/// backend order.
pub fn display_trips(trips: &[Trip], filters: &TripFilters, sort: SortKey) -> Vec<Trip> {
    let mut out: Vec<Trip> = trips.iter().filter(|t| filters.matches(t)).cloned().collect();
    out.sort_by(|a, b| sort.compare(a, b));
    out
}

/// Everything the search page renders.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub criteria: SearchCriteria,
    pub trips: Vec<Trip>,
    pub load: LoadState,
    pub filters: TripFilters,
    pub sort: SortKey,
}

impl SearchState {
    pub fn visible(&self) -> Vec<Trip> {
        display_trips(&self.trips, &self.filters, self.sort)
    }
}
