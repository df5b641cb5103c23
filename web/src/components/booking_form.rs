use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::forms::SUBMIT_ERROR_MESSAGE;
use shared_types::pricing::{format_usd, QUOTE_SUFFIX};
use shared_types::{
    Availability, BookingDraft, BookingSubmission, CalendarState, PricingCalculator,
    PricingSelection,
};
use thaw::*;

use crate::components::banner::{show_banner, Banner, FeedbackBanner};
use crate::components::booking_calendar::BookingCalendar;
use crate::components::pricing_calculator::PricingCalculatorView;
use crate::server::{error_message, submit_booking, BookingReceipt, DATE_UNAVAILABLE_MESSAGE};

/// What the confirmation panel shows after a booking goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Confirmation {
    client_name: String,
    client_email: String,
    date_label: String,
    total: String,
    reference: String,
}

impl Confirmation {
    fn new(submission: &BookingSubmission, receipt: &BookingReceipt) -> Self {
        let suffix = if receipt.quote_required { QUOTE_SUFFIX } else { "" };
        Self {
            client_name: submission.client_name.clone(),
            client_email: submission.client_email.clone(),
            date_label: shared_types::calendar::format_long_date(submission.event_date),
            total: format!("{}{}", format_usd(receipt.total_amount), suffix),
            reference: receipt.id.clone(),
        }
    }
}

/// Keystroke filter for the guest count; the empty string stays allowed so
/// the field can be cleared.
fn digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

#[component]
pub fn BookingForm(calculator: PricingCalculator, today: NaiveDate) -> impl IntoView {
    let calculator = StoredValue::new(calculator);
    let calendar = RwSignal::new(CalendarState::new(today, Availability::default()));
    let selection = RwSignal::new(PricingSelection::default());

    let client_name = RwSignal::new(String::new());
    let client_email = RwSignal::new(String::new());
    let client_phone = RwSignal::new(String::new());
    let guest_count = RwSignal::new(String::new());
    let venue = RwSignal::new(String::new());
    let special_requests = RwSignal::new(String::new());

    let banner = RwSignal::new(None::<Banner>);
    let confirmation = RwSignal::new(None::<Confirmation>);

    let submit = Action::new(move |submission: &BookingSubmission| {
        let submission = submission.clone();
        async move {
            let result = submit_booking(submission.clone()).await;
            (submission, result)
        }
    });
    let pending = submit.pending();

    let reset_form = move || {
        for field in [client_name, client_email, client_phone, guest_count, venue, special_requests] {
            field.set(String::new());
        }
        selection.set(PricingSelection::default());
        calendar.update(|c| c.clear_selection());
    };

    Effect::new(move |_| {
        if let Some((submission, result)) = submit.value().get() {
            match result {
                Ok(receipt) => {
                    show_banner(banner, Banner::success(receipt.message.clone()));
                    confirmation.set(Some(Confirmation::new(&submission, &receipt)));
                    reset_form();
                }
                Err(e) => {
                    let message = error_message(&e);
                    leptos::logging::error!("booking submission failed: {}", message);
                    if message == DATE_UNAVAILABLE_MESSAGE {
                        calendar.update(|c| c.clear_selection());
                        show_banner(banner, Banner::error(message));
                    } else {
                        show_banner(banner, Banner::error(SUBMIT_ERROR_MESSAGE));
                    }
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let draft = BookingDraft {
            event_date: calendar.with_untracked(|c| c.selected()),
            selection: selection.get_untracked(),
            client_name: client_name.get_untracked(),
            client_email: client_email.get_untracked(),
            client_phone: client_phone.get_untracked(),
            guest_count: guest_count.get_untracked(),
            venue: venue.get_untracked(),
            special_requests: special_requests.get_untracked(),
        };

        match calculator.with_value(|c| draft.submit(c, chrono::Utc::now())) {
            Ok(submission) => {
                submit.dispatch(submission);
            }
            Err(e) => show_banner(banner, Banner::validation(e.to_string())),
        }
    };

    view! {
        <form class="wedding-booking-form" on:submit=on_submit>
            <div class="booking-step">
                <h3>"1. Choose Your Date"</h3>
                <BookingCalendar state=calendar today=today/>
            </div>

            <div class="booking-step">
                <h3>"2. Build Your Package"</h3>
                <PricingCalculatorView calculator=calculator selection=selection/>
            </div>

            <div class="booking-step">
                <h3>"3. Your Details"</h3>
                <div class="form-row">
                    <div class="form-group">
                        <label for="clientName">"Full Name *"</label>
                        <Input id="clientName" placeholder="Your full name" value=client_name/>
                    </div>
                    <div class="form-group">
                        <label for="clientEmail">"Email Address *"</label>
                        <Input
                            id="clientEmail"
                            input_type=InputType::Email
                            placeholder="your@email.com"
                            value=client_email
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="clientPhone">"Phone Number"</label>
                        <Input
                            id="clientPhone"
                            input_type=InputType::Tel
                            placeholder="(555) 123-4567"
                            value=client_phone
                        />
                    </div>
                    <div class="form-group">
                        <label for="guestCount">"Guest Count"</label>
                        <Input
                            id="guestCount"
                            placeholder="e.g., 120"
                            value=guest_count
                            allow_value=move |value: String| digits_only(&value)
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="venue">"Venue / Resort"</label>
                    <Input id="venue" placeholder="e.g., Royalton Saint Lucia" value=venue/>
                </div>
                <div class="form-group">
                    <label for="specialRequests">"Special Requests"</label>
                    <Textarea
                        id="specialRequests"
                        placeholder="Must-play songs, timeline notes, anything else..."
                        value=special_requests
                    />
                </div>
            </div>

            <FeedbackBanner banner=banner/>

            <Button
                button_type=ButtonType::Submit
                appearance=ButtonAppearance::Primary
                disabled=Signal::from(pending)
                loading=pending
            >
                {move || if pending.get() { "Processing..." } else { "Request Booking" }}
            </Button>
        </form>

        {move || {
            confirmation.get().map(|c| {
                view! {
                    <div class="booking-confirmation">
                        <div class="booking-confirmation__card">
                            <h3>"Booking Request Received!"</h3>
                            <p>
                                {format!(
                                    "Thank you {}! We've received your wedding booking request for {}. We'll contact you within 24 hours to confirm availability and arrange payment.",
                                    c.client_name,
                                    c.date_label,
                                )}
                            </p>
                            <div class="booking-confirmation__details">
                                <p><strong>"Total: "</strong>{c.total.clone()}</p>
                                <p><strong>"Email: "</strong>{c.client_email.clone()}</p>
                                <p><strong>"Reference: "</strong>{c.reference.clone()}</p>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| confirmation.set(None)
                            >
                                "Close"
                            </Button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
