use leptos::prelude::*;
use shared_types::calendar::business_today;
use shared_types::{PricingCalculator, PricingConfig};

use crate::components::BookingForm;

#[component]
pub fn SaintLuciaPage() -> impl IntoView {
    let today = business_today(chrono::Utc::now());
    let calculator = PricingCalculator::new(PricingConfig::default());

    view! {
        <div class="page saint-lucia-page">
            <section class="page-hero">
                <h1>"Saint Lucia Destination Weddings"</h1>
                <p>"Pick your date, build your package, and send your request in one go."</p>
            </section>

            <section class="booking-section" id="booking">
                <BookingForm calculator=calculator today=today/>
            </section>
        </div>
    }
}
