use std::collections::{BTreeMap, BTreeSet};

use leptos::prelude::*;
use shared_types::forms::SUBMIT_ERROR_MESSAGE;
use shared_types::{ContactSubmission, ServiceType};
use thaw::*;

use crate::components::banner::{show_banner, Banner, FeedbackBanner};
use crate::server::{error_message, submit_contact, SubmissionReceipt};

/// A page-specific `<select>`, e.g. package interest or event type. The
/// signal is shared so cards elsewhere on the page can preselect it.
#[derive(Clone)]
pub struct ChoiceField {
    pub key: &'static str,
    pub label: &'static str,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub selected: RwSignal<String>,
}

/// Equipment checkboxes; `selected` holds item ids.
#[derive(Clone)]
pub struct EquipmentField {
    pub options: Vec<(&'static str, &'static str)>,
    pub selected: RwSignal<BTreeSet<String>>,
}

pub const CONTACT_ANCHOR: &str = "contact";

/// Brings the contact section into view after a card preselects a field.
pub fn scroll_to_contact() {
    if let Some(section) = document().get_element_by_id(CONTACT_ANCHOR) {
        section.scroll_into_view();
    }
}

#[component]
pub fn ContactForm(
    service_type: ServiceType,
    #[prop(into)] title: String,
    #[prop(optional)] choice: Option<ChoiceField>,
    #[prop(optional)] equipment: Option<EquipmentField>,
    /// Sent as `location` instead of showing the location input.
    #[prop(optional)]
    fixed_location: Option<&'static str>,
    #[prop(optional, into)] submit_label: Option<String>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let banner = RwSignal::new(None::<Banner>);

    let submit = Action::new(move |submission: &ContactSubmission| {
        let submission = submission.clone();
        async move { submit_contact(submission).await }
    });
    let pending = submit.pending();

    let choice_signal = choice.as_ref().map(|c| (c.key, c.selected));
    let equipment_signal = equipment.as_ref().map(|e| e.selected);

    let reset_form = move || {
        for field in [name, email, phone, event_date, location, message] {
            field.set(String::new());
        }
        if let Some((_, selected)) = choice_signal {
            selected.set(String::new());
        }
        if let Some(selected) = equipment_signal {
            selected.set(BTreeSet::new());
        }
    };

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(SubmissionReceipt { message: text, .. }) => {
                    show_banner(banner, Banner::success(text));
                    reset_form();
                }
                Err(e) => {
                    leptos::logging::error!("contact submission failed: {}", error_message(&e));
                    show_banner(banner, Banner::error(SUBMIT_ERROR_MESSAGE));
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), name.get_untracked());
        fields.insert("email".to_string(), email.get_untracked());
        fields.insert("phone".to_string(), phone.get_untracked());
        fields.insert("eventDate".to_string(), event_date.get_untracked());
        let place = fixed_location
            .map(str::to_string)
            .unwrap_or_else(|| location.get_untracked());
        fields.insert("location".to_string(), place);
        fields.insert("message".to_string(), message.get_untracked());
        if let Some((key, selected)) = choice_signal {
            fields.insert(key.to_string(), selected.get_untracked());
        }

        let validated = ContactSubmission::new(service_type, fields, chrono::Utc::now()).and_then(|s| {
            match equipment_signal {
                Some(selected) => s.with_equipment(selected.get_untracked().into_iter().collect()),
                None => Ok(s),
            }
        });

        match validated {
            Ok(submission) => {
                submit.dispatch(submission);
            }
            Err(e) => show_banner(banner, Banner::validation(e.to_string())),
        }
    };

    let submit_label = submit_label.unwrap_or_else(|| "Send Inquiry".to_string());

    view! {
        <section id=CONTACT_ANCHOR class="contact-section">
            <h2 class="section-title">{title}</h2>
            <form class="contact-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-name">"Full Name *"</label>
                        <Input id="contact-name" placeholder="Your full name" value=name/>
                    </div>
                    <div class="form-group">
                        <label for="contact-email">"Email Address *"</label>
                        <Input
                            id="contact-email"
                            input_type=InputType::Email
                            placeholder="your@email.com"
                            value=email
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-phone">"Phone Number"</label>
                        <Input
                            id="contact-phone"
                            input_type=InputType::Tel
                            placeholder="(555) 123-4567"
                            value=phone
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-date">"Event Date"</label>
                        <Input id="contact-date" input_type=InputType::Date value=event_date/>
                    </div>
                </div>
                {fixed_location
                    .is_none()
                    .then(|| {
                        view! {
                            <div class="form-group">
                                <label for="contact-location">"Event Location"</label>
                                <Input id="contact-location" placeholder="Venue or city" value=location/>
                            </div>
                        }
                    })}

                {choice.map(|c| {
                    let selected = c.selected;
                    view! {
                        <div class="form-group">
                            <label for=c.key>{c.label}</label>
                            <select
                                id=c.key
                                name=c.key
                                prop:value=move || selected.get()
                                on:change=move |ev| selected.set(event_target_value(&ev))
                            >
                                <option value="">"Select an option"</option>
                                {c.options
                                    .into_iter()
                                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                })}

                {equipment.map(|e| {
                    let selected = e.selected;
                    view! {
                        <fieldset class="form-group equipment-checklist">
                            <legend>"Equipment Needed *"</legend>
                            {e.options
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <label class="checkbox-option">
                                            <input
                                                type="checkbox"
                                                name="equipment-needed"
                                                value=value
                                                prop:checked=move || selected.with(|s| s.contains(value))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    selected.update(|s| {
                                                        if checked {
                                                            s.insert(value.to_string());
                                                        } else {
                                                            s.remove(value);
                                                        }
                                                    });
                                                }
                                            />
                                            <span>{label}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </fieldset>
                    }
                })}

                <div class="form-group">
                    <label for="contact-message">"Message"</label>
                    <Textarea
                        id="contact-message"
                        placeholder="Tell us about your event..."
                        value=message
                    />
                </div>

                <FeedbackBanner banner=banner/>

                <Button
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::from(pending)
                    loading=pending
                >
                    {move || if pending.get() { "Sending...".to_string() } else { submit_label.clone() }}
                </Button>
            </form>
        </section>
    }
}
