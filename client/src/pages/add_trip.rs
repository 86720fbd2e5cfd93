//! Operator form for scheduling a trip on an existing bus.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TripFieldInputs;
use crate::state::auth::AuthState;
use crate::state::form::FormStatus;
use crate::state::trip_form::{TripFields, TripForm};
use crate::util::auth::install_operator_gate;

#[component]
pub fn AddTripPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_operator_gate(auth, use_navigate());
    #[cfg(feature = "hydrate")]
    crate::util::auth::load_profile_strict(auth);

    let form = RwSignal::new(TripForm::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let payload = match form.get().to_payload() {
            Ok(p) => p,
            Err(msg) => {
                status.update(|s| s.fail(msg));
                return;
            }
        };
        status.update(|s| {
            s.begin();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_trip(&crate::net::request::BrowserTransport, &payload).await;
            if result.is_ok() {
                form.update(TripForm::reset);
            }
            status.update(|s| s.finish(result.map(|()| crate::state::trip_form::CREATED_MESSAGE.to_owned())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    view! {
        <div class="operator-page">
            <Show
                when=move || auth.get().is_operator()
                fallback=|| view! { <p class="muted">"Checking access..."</p> }
            >
                <div class="operator-card">
                    <h1>"Add New Trip"</h1>
                    <p class="muted">"Schedule a run for a bus that is already registered."</p>
                    <StatusBanner status=status/>
                    <form class="operator-form" on:submit=on_submit>
                        <TripFieldInputs
                            fields=Signal::derive(move || form.get().trip)
                            on_edit=Callback::new(move |trip: TripFields| form.update(|f| f.trip = trip))
                        />
                        <button
                            class="btn btn--primary btn--block"
                            type="submit"
                            disabled=move || status.get().is_submitting()
                        >
                            {move || if status.get().is_submitting() { "Creating Trip..." } else { "Create Trip" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

/// Success or error banner for an operator form.
#[component]
pub(crate) fn StatusBanner(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        {move || match status.get() {
            FormStatus::Success(msg) => view! { <div class="banner banner--success">{msg}</div> }.into_any(),
            FormStatus::Error(msg) => view! { <div class="banner banner--error">{msg}</div> }.into_any(),
            FormStatus::Idle | FormStatus::Submitting => ().into_any(),
        }}
    }
}
