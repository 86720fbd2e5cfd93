//! Landing page: route search form, popular routes, and feature highlights.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::search::{POPULAR_ROUTES, SearchCriteria};
use crate::util::query::search_href;

const FEATURES: [(&str, &str); 6] = [
    ("Instant Booking", "Book your tickets in seconds with our seamless process."),
    ("Real-Time Availability", "Check live seat updates and book your preferred seat."),
    ("Secure Payments", "We support UPI, cards, and net banking for secure transactions."),
    ("Booking History", "Easily manage and view your past and current bookings."),
    ("24/7 Support", "Our customer support team is available around the clock."),
    ("Wide Network", "Travel to any destination with our wide network of routes."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let passengers = RwSignal::new("1".to_owned());
    let error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match SearchCriteria::from_form(&from.get(), &to.get(), &date.get(), &passengers.get()) {
            Ok(criteria) => {
                error.set(None);
                navigate(&search_href(&criteria), NavigateOptions::default());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let swap = move |_| {
        let (a, b) = (from.get(), to.get());
        from.set(b);
        to.set(a);
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Your Journey Starts Here"</h1>
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__field"
                        type="text"
                        placeholder="From"
                        aria-label="From"
                        prop:value=move || from.get()
                        on:input=move |ev| from.set(event_target_value(&ev))
                    />
                    <button class="search-form__swap" type="button" title="Swap cities" on:click=swap>
                        "⇄"
                    </button>
                    <input
                        class="search-form__field"
                        type="text"
                        placeholder="To"
                        aria-label="To"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                    <input
                        class="search-form__field"
                        type="date"
                        aria-label="Date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                    <input
                        class="search-form__field search-form__field--narrow"
                        type="number"
                        min="1"
                        aria-label="Passengers"
                        prop:value=move || passengers.get()
                        on:input=move |ev| passengers.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search Buses"</button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="home-section">
                <h2>"Popular Routes"</h2>
                <div class="route-grid">
                    {POPULAR_ROUTES
                        .iter()
                        .map(|(from, to)| {
                            let href = search_href(&SearchCriteria::route(from, to));
                            view! {
                                <a class="route-card" href=href>
                                    <h3>{format!("{from} → {to}")}</h3>
                                    <span class="route-card__cta">"View buses"</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section home-section--muted">
                <h2>"Why Choose Us?"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
