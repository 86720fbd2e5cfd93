//! Contact page. The message form is local only; nothing is sent to the
//! backend.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

/// Contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactForm {
    fn validate(&self) -> Result<(), &'static str> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err("Please fill in every field.");
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address.");
        }
        Ok(())
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get().validate() {
            Ok(()) => {
                log::info!("contact message recorded locally");
                form.set(ContactForm::default());
                error.set(None);
                sent.set(true);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="contact-page">
            <section class="contact-info">
                <h1>"Get in touch"</h1>
                <p>"Have a question about a booking? We are here to help."</p>
                <div class="contact-card">
                    <h3>"Phone Support"</h3>
                    <p class="muted">"24/7 Available"</p>
                    <p>"+91 98765 43210"</p>
                </div>
                <div class="contact-card">
                    <h3>"Email Us"</h3>
                    <p class="muted">"For queries & grievances"</p>
                    <p>"support@busgo.com"</p>
                </div>
            </section>
            <section class="contact-form">
                <h2>"Send us a message"</h2>
                <Show
                    when=move || !sent.get()
                    fallback=move || view! {
                        <div class="form-success">
                            <h3>"Message Sent!"</h3>
                            <p>"Thanks for reaching out. We will get back to you shortly."</p>
                            <button class="btn btn--ghost" on:click=move |_| sent.set(false)>"Send another"</button>
                        </div>
                    }
                >
                    <form on:submit=on_submit>
                        <label>"Your Name"</label>
                        <input
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <label>"Email Address"</label>
                        <input
                            type="email"
                            placeholder="john@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <label>"Subject"</label>
                        <input
                            type="text"
                            placeholder="Booking Issue / Refund / Feedback"
                            prop:value=move || form.get().subject
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        />
                        <label>"Message"</label>
                        <textarea
                            rows="5"
                            placeholder="Tell us how we can help..."
                            prop:value=move || form.get().message
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary btn--block" type="submit">"Send Message"</button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
