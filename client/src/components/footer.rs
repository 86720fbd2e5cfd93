//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"BusGo"</span>
                <p>"Book bus tickets across India in a few clicks."</p>
            </div>
            <nav class="footer__links">
                <a href="/about">"About Us"</a>
                <a href="/contact">"Contact"</a>
                <a href="/bookings">"My Bookings"</a>
            </nav>
            <p class="footer__copy">"© 2026 BusGo. All rights reserved."</p>
        </footer>
    }
}
