use leptos::prelude::*;
use shared_types::ServiceType;

use crate::components::ContactForm;

#[component]
pub fn MinnesotaPage() -> impl IntoView {
    view! {
        <div class="page minnesota-page">
            <section class="page-hero">
                <h1>"Minnesota Events"</h1>
                <p>"Weddings, parties and community events across the Twin Cities and beyond."</p>
            </section>

            <section class="minnesota-highlights">
                <ul>
                    <li>"Full sound and lighting setups"</li>
                    <li>"Caribbean, Afrobeats, hip-hop and top 40 sets"</li>
                    <li>"MC service for receptions and programs"</li>
                </ul>
            </section>

            <ContactForm
                service_type=ServiceType::MinnesotaEvents
                title="Book a Minnesota Date"
                fixed_location="Minnesota"
                submit_label="Send Message"
            />
        </div>
    }
}
