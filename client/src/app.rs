//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, add_bus::AddBusPage, add_trip::AddTripPage, bookings::BookingsPage, contact::ContactPage,
    home::HomePage, login::LoginPage, register::RegisterPage, search::SearchPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, probes for an existing session once in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let profile = crate::net::api::current_user(&crate::net::request::BrowserTransport).await;
        // An operator page may already have loaded the profile strictly.
        auth.update(|state| {
            if !state.checked {
                *state = profile.map_or_else(AuthState::anonymous, AuthState::signed_in);
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/busgo.css"/>
        <Title text="BusGo"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("bookings") view=BookingsPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("add-trip") view=AddTripPage/>
                    <Route path=StaticSegment("add-bus") view=AddBusPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
