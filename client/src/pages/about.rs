//! Static "About Us" page.

use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("2M+", "Happy Travelers"),
    ("1,500+", "Bus Operators"),
    ("5,000+", "Routes Covered"),
    ("10+", "Years of Service"),
];

const VALUES: [(&str, &str); 3] = [
    ("Safety First", "Every operator is verified and every bus is tracked."),
    ("Customer Obsession", "Our support team is ready to help with any query during your journey."),
    ("High Standards", "Comfort and punctuality on every local route."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="hero hero--compact">
                <h1>"Redefining the Way You Travel"</h1>
                <p>"BusGo connects travelers with trusted operators across the country."</p>
            </section>
            <section class="stat-grid">
                {STATS
                    .iter()
                    .map(|(value, label)| view! {
                        <div class="stat-card">
                            <h3>{*value}</h3>
                            <p>{*label}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
            <section class="home-section">
                <h2>"Who We Are"</h2>
                <p>
                    "BusGo started with a simple idea: booking a bus ticket should not be complicated. "
                    "We built a digital bridge between travelers and operators."
                </p>
                <blockquote>
                    "Our goal is not just to get you from A to B, but to make you enjoy the distance in between."
                </blockquote>
            </section>
            <section class="home-section home-section--muted">
                <h2>"Our Core Values"</h2>
                <div class="feature-grid">
                    {VALUES
                        .iter()
                        .map(|(title, desc)| view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="cta">
                <h2>"Ready to travel with us?"</h2>
                <a class="btn btn--primary" href="/">"Book a Ticket"</a>
            </section>
        </div>
    }
}
