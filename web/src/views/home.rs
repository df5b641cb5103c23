use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::ServiceType;

use crate::components::{ContactForm, ReviewsCarousel};

const SERVICES: [(&str, &str, &str); 5] = [
    (
        "/weddings",
        "Weddings",
        "Ceremony through last dance, with packages built around your day.",
    ),
    (
        "/saint-lucia",
        "Saint Lucia Destination Weddings",
        "Check open dates and price your package online.",
    ),
    (
        "/private-events",
        "Private Events",
        "Birthdays, anniversaries, corporate nights and more.",
    ),
    (
        "/minnesota",
        "Minnesota Events",
        "Bringing the island energy back home to the Twin Cities.",
    ),
    (
        "/equipment-rentals",
        "Equipment Rentals",
        "Sound, lighting and effects for your own event.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container">
            <section class="hero">
                <h1 class="hero-title">"DJ Bigg Slim Events"</h1>
                <p class="hero-subtitle">
                    "Wedding and event entertainment in Saint Lucia and Minnesota"
                </p>
                <div class="hero-actions">
                    <A href="/saint-lucia" attr:class="btn-primary">"Check Availability"</A>
                    <a href="#contact" class="btn-outlined">"Get in Touch"</a>
                </div>
            </section>

            <section class="services">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|(href, title, blurb)| {
                            view! {
                                <A href=*href attr:class="service-card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ReviewsCarousel/>

            <ContactForm service_type=ServiceType::General title="Let's Talk About Your Event"/>
        </div>
    }
}
