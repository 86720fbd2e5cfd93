//! Search results page with filters, sort, and the seat-booking dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Criteria come from the URL query (`from`, `to`, `date`, `passengers`).
//! The trip list is fetched once per criteria change; filters and sort are a
//! local projection. Booking runs through `SeatModal`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::seat_modal::SeatModal;
use crate::components::trip_card::TripCard;
use crate::net::types::Trip;
use crate::state::search::{BusFilter, SearchCriteria, SearchState, SortKey};
use crate::state::seats::BookingModal;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let criteria = Memo::new(move |_| query.with(|q| SearchCriteria::from_query(|key| q.get(key))));
    let state = RwSignal::new(SearchState::default());
    let modal = RwSignal::new(BookingModal::default());

    Effect::new(move || {
        let criteria = criteria.get();
        state.update(|s| {
            s.criteria = criteria.clone();
            s.trips.clear();
            s.load.start();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::search_trips(&crate::net::request::BrowserTransport, &criteria.from, &criteria.to)
                    .await;
            state.update(|s| {
                // A newer search superseded this one.
                if s.criteria != criteria {
                    return;
                }
                if let Some(trips) = s.load.settle(result) {
                    s.trips = trips;
                }
            });
        });
    });

    let on_select = Callback::new(move |trip: Trip| {
        modal.update(|m| m.open(trip.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::state::seats::load_seat_map(&crate::net::request::BrowserTransport, &trip).await;
            modal.update(|m| {
                if m.trip.as_ref().is_some_and(|t| t.id == trip.id) {
                    m.seats_loaded(result);
                }
            });
        });
    });

    let on_confirm = Callback::new(move |()| {
        let mut lines = None;
        modal.update(|m| lines = m.begin_submit());
        let Some(lines) = lines else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_booking(&crate::net::request::BrowserTransport, &lines).await;
            modal.update(|m| m.submit_finished(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = lines;
    });

    let from = Signal::derive(move || criteria.get().from);
    let to = Signal::derive(move || criteria.get().to);
    let summary = move || {
        let c = criteria.get();
        match c.passengers {
            Some(n) => format!("{} · {} passenger(s)", c.date, n),
            None => c.date,
        }
    };

    view! {
        <div class="search-page">
            <header class="search-page__header">
                <a class="btn btn--ghost" href="/">"← Modify"</a>
                <div>
                    <h1>{move || from.get()}" → "{move || to.get()}</h1>
                    <p class="muted">{summary}</p>
                </div>
            </header>

            <div class="search-page__layout">
                <aside class="filters">
                    <div class="filters__header">
                        <h3>"Filters"</h3>
                        <button class="link-button" on:click=move |_| state.update(|s| s.filters.clear())>
                            "Clear All"
                        </button>
                    </div>
                    <h4>"Bus Type"</h4>
                    {BusFilter::ALL
                        .into_iter()
                        .map(|filter| view! {
                            <label class="filters__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.filters.contains(filter))
                                    on:change=move |_| state.update(|s| s.filters.toggle(filter))
                                />
                                <span>{filter.label()}</span>
                            </label>
                        })
                        .collect_view()}
                </aside>

                <section class="results">
                    <div class="results__bar">
                        <span class="results__count">
                            {move || {
                                if state.with(|s| s.load.loading) {
                                    "Searching...".to_owned()
                                } else {
                                    format!("{} Buses found", state.with(|s| s.visible().len()))
                                }
                            }}
                        </span>
                        <label class="results__sort">
                            "Sort by: "
                            <select
                                prop:value=move || state.with(|s| s.sort.as_str())
                                on:change=move |ev| state.update(|s| s.sort = SortKey::parse(&event_target_value(&ev)))
                            >
                                {SortKey::ALL
                                    .into_iter()
                                    .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>

                    <Show when=move || state.with(|s| s.load.error.is_some())>
                        <p class="form-error">{move || state.with(|s| s.load.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <Show when=move || state.with(|s| !s.load.loading && s.load.error.is_none() && s.visible().is_empty())>
                        <p class="muted">"No buses match this route and these filters."</p>
                    </Show>

                    <div class="results__list">
                        {move || {
                            state
                                .with(SearchState::visible)
                                .into_iter()
                                .map(|trip| view! { <TripCard trip=trip on_select=on_select/> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>

            <SeatModal modal=modal from=from to=to on_confirm=on_confirm/>
        </div>
    }
}
