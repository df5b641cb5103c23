use leptos::prelude::*;
use shared_types::ServiceType;

use crate::components::contact_form::scroll_to_contact;
use crate::components::{ChoiceField, ContactForm};

const EVENT_TYPES: [(&str, &str, &str); 6] = [
    ("birthday", "Birthday Party", "Milestone birthdays to backyard celebrations."),
    ("anniversary", "Anniversary", "Music that takes you back to where it started."),
    ("corporate", "Corporate Event", "Launches, galas and staff parties."),
    ("graduation", "Graduation", "Send them off with a proper party."),
    ("holiday", "Holiday Party", "Seasonal sets for any crowd."),
    ("other", "Other", "Tell us what you have in mind."),
];

#[component]
pub fn PrivateEventsPage() -> impl IntoView {
    let event_type = RwSignal::new(String::new());
    let choice = ChoiceField {
        key: "eventType",
        label: "Event Type",
        options: EVENT_TYPES
            .iter()
            .map(|(value, label, _)| (value.to_string(), label.to_string()))
            .collect(),
        selected: event_type,
    };

    view! {
        <div class="page private-events-page">
            <section class="page-hero">
                <h1>"Private Events"</h1>
                <p>"A DJ who reads the room, whatever the occasion."</p>
            </section>

            <section class="event-types">
                <div class="event-types-grid">
                    {EVENT_TYPES
                        .iter()
                        .map(|(value, label, blurb)| {
                            let value = *value;
                            view! {
                                <div
                                    class=move || {
                                        if event_type.get() == value {
                                            "event-type-card selected"
                                        } else {
                                            "event-type-card"
                                        }
                                    }
                                    on:click=move |_| {
                                        event_type.set(value.to_string());
                                        scroll_to_contact();
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
                service_type=ServiceType::PrivateEvents
                title="Plan Your Event"
                choice=choice
            />
        </div>
    }
}
