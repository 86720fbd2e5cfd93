//! "My Bookings" page with upcoming/history tabs and cancellation.

use leptos::prelude::*;

use crate::components::booking_card::BookingCard;
use crate::state::bookings::{BookingTab, BookingsState};
use crate::state::form::LoadState;
#[cfg(feature = "hydrate")]
use crate::state::bookings::CANCEL_CONFIRM;

/// Fetch the booking list into `state`.
#[cfg(feature = "hydrate")]
fn load_bookings(state: RwSignal<BookingsState>) {
    state.update(|s| s.load.start());
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_bookings(&crate::net::request::BrowserTransport).await;
        state.update(|s| {
            if let Some(bookings) = s.load.settle(result) {
                s.replace(&bookings);
            }
        });
    });
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let state = RwSignal::new(BookingsState { load: LoadState { loading: true, error: None }, ..Default::default() });

    #[cfg(feature = "hydrate")]
    load_bookings(state);

    let on_cancel = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().and_then(|w| w.confirm_with_message(CANCEL_CONFIRM).ok()).unwrap_or(false);
            if !confirmed {
                return;
            }
            let mut started = false;
            state.update(|s| started = s.begin_cancel(id));
            if !started {
                return;
            }
            leptos::task::spawn_local(async move {
                let result = crate::net::api::cancel_booking(&crate::net::request::BrowserTransport, id).await;
                let ok = result.is_ok();
                state.update(|s| s.finish_cancel(result));
                if ok {
                    load_bookings(state);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let tab_button = move |tab: BookingTab| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || state.with(|s| s.tab == tab)
                on:click=move |_| state.update(|s| s.tab = tab)
            >
                {tab.label()}
                <span class="tabs__count">{move || state.with(|s| s.count(tab))}</span>
            </button>
        }
    };

    view! {
        <div class="bookings-page">
            <h1>"My Bookings"</h1>
            <div class="tabs">
                {tab_button(BookingTab::Upcoming)}
                {tab_button(BookingTab::History)}
            </div>

            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.load.loading)
                fallback=|| view! { <p class="muted">"Loading your bookings..."</p> }
            >
                <Show
                    when=move || state.with(|s| s.load.error.is_none())
                    fallback=move || view! {
                        <p class="form-error">{move || state.with(|s| s.load.error.clone().unwrap_or_default())}</p>
                    }
                >
                    <div class="bookings-list">
                        {move || {
                            let visible = state.with(BookingsState::visible);
                            if visible.is_empty() {
                                return view! {
                                    <div class="empty-state">
                                        <p>"No bookings here yet."</p>
                                        <a class="btn btn--primary" href="/">"Book a Trip"</a>
                                    </div>
                                }
                                .into_any();
                            }
                            visible
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id;
                                    let cancelling = Signal::derive(move || state.with(|s| s.cancelling == Some(id)));
                                    view! { <BookingCard booking=booking cancelling=cancelling on_cancel=on_cancel/> }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
