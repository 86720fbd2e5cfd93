//! Result card for one trip on the search page.

use leptos::prelude::*;

use crate::net::types::Trip;
use crate::util::time::{clock, trip_duration};

/// Seats-left count below which the card highlights scarcity.
const LOW_SEATS: u32 = 5;

/// A trip summary with a "Select Seats" action.
#[component]
pub fn TripCard(trip: Trip, on_select: Callback<Trip>) -> impl IntoView {
    let departure = clock(&trip.departure_time).to_owned();
    let arrival = clock(&trip.arrival_time).to_owned();
    let duration = trip_duration(&trip.departure_time, &trip.arrival_time);
    let bus_type = trip.bus_type_label();
    let low = trip.seats_available < LOW_SEATS;
    let seats_left = format!("{} Seats left", trip.seats_available);
    let price = format!("₹ {}", trip.price);
    let rating = format!("{:.1}", trip.rating);
    let operator = trip.operator.clone();

    view! {
        <article class="trip-card">
            <div class="trip-card__operator">
                <h3>{operator}</h3>
                <span class="trip-card__type">{bus_type}</span>
            </div>
            <div class="trip-card__schedule">
                <span class="trip-card__time">{departure}</span>
                <span class="trip-card__duration">{duration}</span>
                <span class="trip-card__time">{arrival}</span>
            </div>
            <div class="trip-card__rating" title="Rating">"★ "{rating}</div>
            <div class="trip-card__fare">
                <span class="trip-card__price">{price}</span>
                <span class="trip-card__seats" class:trip-card__seats--low=low>{seats_left}</span>
                <button class="btn btn--primary" on:click=move |_| on_select.run(trip.clone())>
                    "Select Seats"
                </button>
            </div>
        </article>
    }
}
