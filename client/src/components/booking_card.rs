//! One row of the "My Bookings" list.

use leptos::prelude::*;

use crate::net::types::BookingStatus;
use crate::state::bookings::BookingView;

fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Upcoming => "badge badge--upcoming",
        BookingStatus::Completed => "badge badge--completed",
        BookingStatus::Cancelled => "badge badge--cancelled",
    }
}

/// Booking summary with a cancel action for upcoming trips.
#[component]
pub fn BookingCard(
    booking: BookingView,
    #[prop(into)] cancelling: Signal<bool>,
    on_cancel: Callback<i64>,
) -> impl IntoView {
    let id = booking.id;
    let cancellable = booking.cancellable();
    let passengers = format!("{} passenger(s)", booking.passenger_count);
    let amount = format!("₹ {}", booking.total_amount);

    view! {
        <article class="booking-card">
            <header class="booking-card__header">
                <span class=status_class(booking.status)>{booking.status.label()}</span>
                <span class="booking-card__date">{booking.date}</span>
            </header>
            <div class="booking-card__route">
                <span>{booking.from}</span>
                " → "
                <span>{booking.to}</span>
            </div>
            <div class="booking-card__details">
                <span>{booking.operator}</span>
                <span>{booking.bus_type}</span>
                <span>{booking.departure}" - "{booking.arrival}</span>
                <span>{passengers}</span>
            </div>
            <footer class="booking-card__footer">
                <span class="booking-card__pnr">"PNR: "{booking.reference}</span>
                <span class="booking-card__amount">{amount}</span>
                <Show when=move || cancellable>
                    <button
                        class="btn btn--danger"
                        disabled=move || cancelling.get()
                        on:click=move |_| on_cancel.run(id)
                    >
                        {move || if cancelling.get() { "Cancelling..." } else { "Cancel Booking" }}
                    </button>
                </Show>
            </footer>
        </article>
    }
}
