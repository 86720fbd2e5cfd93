//! Labelled inputs for the operator forms.

use leptos::prelude::*;

use crate::state::trip_form::TripFields;

/// One labelled `<input>` bound to a string value.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Route, schedule, and fare inputs shared by the add-trip and add-bus forms.
#[component]
pub fn TripFieldInputs(#[prop(into)] fields: Signal<TripFields>, on_edit: Callback<TripFields>) -> impl IntoView {
    let edit = move |apply: fn(&mut TripFields, String)| {
        Callback::new(move |value: String| {
            let mut next = fields.get_untracked();
            apply(&mut next, value);
            on_edit.run(next);
        })
    };
    let read = move |get: fn(&TripFields) -> String| Signal::derive(move || fields.with(get));

    view! {
        <FormField
            label="Bus Number"
            placeholder="e.g. KA-19-AB-1234"
            value=read(|f| f.bus_number.clone())
            on_input=edit(|f, v| f.bus_number = v)
        />
        <div class="form-row">
            <FormField
                label="Start City"
                placeholder="e.g. Bangalore"
                value=read(|f| f.start_city.clone())
                on_input=edit(|f, v| f.start_city = v)
            />
            <FormField
                label="End City"
                placeholder="e.g. Mumbai"
                value=read(|f| f.end_city.clone())
                on_input=edit(|f, v| f.end_city = v)
            />
        </div>
        <div class="form-row">
            <FormField
                label="Departure Time"
                input_type="time"
                value=read(|f| f.departure_time.clone())
                on_input=edit(|f, v| f.departure_time = v)
            />
            <FormField
                label="Arrival Time"
                input_type="time"
                value=read(|f| f.arrival_time.clone())
                on_input=edit(|f, v| f.arrival_time = v)
            />
        </div>
        <FormField
            label="Price (₹)"
            input_type="number"
            placeholder="e.g. 1200"
            value=read(|f| f.price.clone())
            on_input=edit(|f, v| f.price = v)
        />
    }
}
