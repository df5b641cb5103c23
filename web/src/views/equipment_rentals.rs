use std::collections::BTreeSet;

use leptos::prelude::*;
use shared_types::ServiceType;

use crate::components::{ContactForm, EquipmentField};

const EQUIPMENT: [(&str, &str, &str); 6] = [
    ("sound-system", "Sound System", "Powered speakers and subs sized to your crowd."),
    ("wireless-microphones", "Wireless Microphones", "Handheld and lapel mics for speeches."),
    ("dj-lighting", "DJ Lighting", "Moving heads and dance floor effects."),
    ("uplighting", "Wireless Uplighting", "Color-matched uplights for any room."),
    ("cold-sparks", "Cold Spark Machines", "Indoor-safe spark effects."),
    ("fog-machine", "Fog / Haze Machine", "Low fog for first dances and entrances."),
];

#[component]
pub fn EquipmentRentalsPage() -> impl IntoView {
    let selected = RwSignal::new(BTreeSet::<String>::new());
    let equipment = EquipmentField {
        options: EQUIPMENT.iter().map(|(value, label, _)| (*value, *label)).collect(),
        selected,
    };

    view! {
        <div class="page equipment-page">
            <section class="page-hero">
                <h1>"Equipment Rentals"</h1>
                <p>"Professional gear, delivered and set up."</p>
            </section>

            <section class="equipment">
                <div class="equipment-grid">
                    {EQUIPMENT
                        .iter()
                        .map(|(value, label, blurb)| {
                            let value = *value;
                            view! {
                                <div
                                    class=move || {
                                        if selected.with(|s| s.contains(value)) {
                                            "equipment-card selected"
                                        } else {
                                            "equipment-card"
                                        }
                                    }
                                    on:click=move |_| {
                                        selected.update(|s| {
                                            if !s.remove(value) {
                                                s.insert(value.to_string());
                                            }
                                        })
                                    }
                                >
                                    <h3>{*label}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ContactForm
                service_type=ServiceType::EquipmentRental
                title="Request a Rental Quote"
                equipment=equipment
                submit_label="Request Quote"
            />
        </div>
    }
}
