//! Site header with navigation and session controls.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Top navigation bar. Operator links appear only for admin sessions.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&crate::net::request::BrowserTransport).await;
            auth.set(AuthState::anonymous());
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    let initials = move || auth.get().profile.map(|p| p.initials()).unwrap_or_default();
    let name = move || auth.get().profile.map(|p| p.name).unwrap_or_default();

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"BusGo"</a>
            <nav class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/bookings">"My Bookings"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
                <Show when=move || auth.get().is_operator()>
                    <a href="/add-trip">"Add Trip"</a>
                    <a href="/add-bus">"Add Bus"</a>
                </Show>
            </nav>
            <div class="navbar__session">
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href="/login">"Login"</a>
                            <a class="btn btn--primary" href="/register">"Register"</a>
                        }
                    }
                >
                    <span class="navbar__avatar" title=name>{initials}</span>
                    <button class="btn btn--ghost" on:click=on_logout disabled=move || busy.get()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
