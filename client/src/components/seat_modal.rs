//! Seat-picker dialog for the booking flow.
//!
//! DESIGN
//! ======
//! Renders `BookingModal` state only. Seat toggles mutate the signal
//! directly; confirm and close are forwarded to the page, which owns the
//! booking request.

use leptos::prelude::*;

use crate::state::seats::{BookingModal, MAX_SEATS_PER_BOOKING};

#[component]
pub fn SeatModal(
    modal: RwSignal<BookingModal>,
    #[prop(into)] from: Signal<String>,
    #[prop(into)] to: Signal<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let close = move |_| {
        modal.update(|m| {
            m.close();
        });
    };
    let operator = move || modal.with(|m| m.trip.as_ref().map(|t| t.operator.clone()).unwrap_or_default());
    let unit_price = move || modal.with(|m| m.trip.as_ref().map_or(0, |t| t.price));
    let succeeded = move || modal.with(|m| m.status.success().is_some());

    view! {
        <Show when=move || modal.with(BookingModal::is_open)>
            <div class="modal-backdrop">
                <div class="modal seat-modal" role="dialog" aria-modal="true">
                    <header class="modal__header">
                        <div>
                            <h2>"Select Seats"</h2>
                            <p class="modal__subtitle">{operator}</p>
                        </div>
                        <button
                            class="modal__close"
                            aria-label="Close"
                            disabled=move || modal.with(|m| m.status.is_submitting())
                            on:click=close
                        >
                            "✕"
                        </button>
                    </header>
                    <Show
                        when=succeeded
                        fallback=move || {
                            view! {
                                <div class="seat-modal__body">
                                    <section class="seat-modal__map">
                                        <h4>"Lower Deck"</h4>
                                        <Show
                                            when=move || !modal.with(|m| m.seats_loading)
                                            fallback=|| view! { <p class="muted">"Loading seats..."</p> }
                                        >
                                            <Show when=move || modal.with(|m| m.seats_error.is_some())>
                                                <p class="form-error">
                                                    {move || modal.with(|m| m.seats_error.clone().unwrap_or_default())}
                                                </p>
                                            </Show>
                                            <div class="seat-grid">
                                                {move || {
                                                    modal
                                                        .with(|m| m.seats.clone())
                                                        .into_iter()
                                                        .map(|seat| {
                                                            let id = seat.id;
                                                            let booked = move || modal.with(|m| m.selection.is_booked(id));
                                                            let selected = move || modal.with(|m| m.selection.is_selected(id));
                                                            view! {
                                                                <button
                                                                    class="seat"
                                                                    class:seat--booked=booked
                                                                    class:seat--selected=selected
                                                                    disabled=booked
                                                                    title=format!("Seat {}", seat.seat_label)
                                                                    on:click=move |_| modal.update(|m| m.toggle(id))
                                                                >
                                                                    {seat.seat_label.clone()}
                                                                </button>
                                                            }
                                                        })
                                                        .collect_view()
                                                }}
                                            </div>
                                        </Show>
                                        <div class="seat-legend">
                                            <span class="seat-legend__item">"Available"</span>
                                            <span class="seat-legend__item seat-legend__item--selected">"Selected"</span>
                                            <span class="seat-legend__item seat-legend__item--booked">"Booked"</span>
                                        </div>
                                    </section>
                                    <aside class="seat-modal__summary">
                                        <p class="label">"Route"</p>
                                        <p class="seat-modal__route">{move || from.get()}" → "{move || to.get()}</p>
                                        <p class="label">"Selected Seats"</p>
                                        <p class="seat-modal__picked">
                                            {move || {
                                                let labels = modal.with(BookingModal::selected_labels);
                                                if labels.is_empty() { "No seats selected".to_owned() } else { labels.join(", ") }
                                            }}
                                        </p>
                                        <p class="muted">{format!("Up to {MAX_SEATS_PER_BOOKING} seats per booking")}</p>
                                        <div class="seat-modal__totals">
                                            <span>"Unit Price"</span>
                                            <span>{move || format!("₹ {}", unit_price())}</span>
                                            <strong>"Total"</strong>
                                            <strong>{move || format!("₹ {}", modal.with(BookingModal::total_price))}</strong>
                                        </div>
                                        <Show when=move || modal.with(|m| m.status.error().is_some())>
                                            <p class="form-error">
                                                {move || modal.with(|m| m.status.error().unwrap_or_default().to_owned())}
                                            </p>
                                        </Show>
                                        <button
                                            class="btn btn--primary btn--block"
                                            disabled=move || !modal.with(BookingModal::can_submit)
                                            on:click=move |_| on_confirm.run(())
                                        >
                                            {move || {
                                                if modal.with(|m| m.status.is_submitting()) {
                                                    "Processing..."
                                                } else {
                                                    "Confirm Booking"
                                                }
                                            }}
                                        </button>
                                    </aside>
                                </div>
                            }
                        }
                    >
                        <div class="seat-modal__success">
                            <h3>"Booking Confirmed!"</h3>
                            <p>{move || modal.with(|m| m.status.success().unwrap_or_default().to_owned())}</p>
                            <button class="btn btn--dark" on:click=close>"Done"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
