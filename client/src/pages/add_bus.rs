//! Operator form for registering a bus together with its first trip.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::add_trip::StatusBanner;
use crate::components::form_field::{FormField, TripFieldInputs};
use crate::net::types::{AirType, SeatType};
use crate::state::auth::AuthState;
use crate::state::form::FormStatus;
use crate::state::trip_form::{BusTripForm, CREATED_MESSAGE, TripFields};
use crate::util::auth::install_operator_gate;

#[component]
pub fn AddBusPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_operator_gate(auth, use_navigate());
    #[cfg(feature = "hydrate")]
    crate::util::auth::load_profile_strict(auth);

    let form = RwSignal::new(BusTripForm::default());
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
            let result = crate::net::api::create_bus_trip(&crate::net::request::BrowserTransport, &payload).await;
            if result.is_ok() {
                form.update(BusTripForm::reset);
            }
            status.update(|s| s.finish(result.map(|()| CREATED_MESSAGE.to_owned())));
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
                    <h1>"Add Bus & Trip"</h1>
                    <p class="muted">"Register a bus and schedule its first run."</p>
                    <StatusBanner status=status/>
                    <form class="operator-form" on:submit=on_submit>
                        <h3>"Bus Details"</h3>
                        <FormField
                            label="Operator Name"
                            placeholder="e.g. VRL Travels"
                            value=Signal::derive(move || form.get().operator)
                            on_input=Callback::new(move |v: String| form.update(|f| f.operator = v))
                        />
                        <div class="form-row">
                            <label class="form-field">
                                <span class="form-field__label">"AC Type"</span>
                                <select
                                    prop:value=move || form.get().air_type.wire()
                                    on:change=move |ev| {
                                        if let Some(air) = AirType::from_wire(&event_target_value(&ev)) {
                                            form.update(|f| f.air_type = air);
                                        }
                                    }
                                >
                                    <option value=AirType::Ac.wire()>{AirType::Ac.label()}</option>
                                    <option value=AirType::NonAc.wire()>{AirType::NonAc.label()}</option>
                                </select>
                            </label>
                            <label class="form-field">
                                <span class="form-field__label">"Seat Type"</span>
                                <select
                                    prop:value=move || form.get().seat_type.label()
                                    on:change=move |ev| {
                                        if let Some(seat) = SeatType::from_wire(&event_target_value(&ev)) {
                                            form.update(|f| f.seat_type = seat);
                                        }
                                    }
                                >
                                    <option value="Sleeper">"Sleeper"</option>
                                    <option value="Seater">"Seater"</option>
                                </select>
                            </label>
                        </div>
                        <FormField
                            label="Total Seats"
                            input_type="number"
                            placeholder="e.g. 30"
                            value=Signal::derive(move || form.get().total_seat)
                            on_input=Callback::new(move |v: String| form.update(|f| f.total_seat = v))
                        />
                        <h3>"Trip Details"</h3>
                        <TripFieldInputs
                            fields=Signal::derive(move || form.get().trip)
                            on_edit=Callback::new(move |trip: TripFields| form.update(|f| f.trip = trip))
                        />
                        <button
                            class="btn btn--primary btn--block"
                            type="submit"
                            disabled=move || status.get().is_submitting()
                        >
                            {move || if status.get().is_submitting() { "Creating..." } else { "Create Bus & Trip" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
