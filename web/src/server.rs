use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use leptos::server_fn::codec::Json;
use serde::{Deserialize, Serialize};
use shared_types::{
    Availability, BookingSubmission, ContactSubmission, DayStatus, PaymentIntentResponse,
    ReviewsResponse,
};

#[cfg(feature = "ssr")]
use shared_types::calendar::business_today;
#[cfg(feature = "ssr")]
use shared_types::{PaymentIntentRequest, PricingCalculator, ReviewSource};

#[cfg(feature = "ssr")]
use crate::config::get_config;
#[cfg(feature = "ssr")]
use crate::services::{firestore, google_places, stripe};

pub const DATE_UNAVAILABLE_MESSAGE: &str =
    "Sorry, this date is no longer available. Please select another date.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub success: bool,
    pub id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub success: bool,
    pub id: String,
    pub total_amount: u32,
    pub quote_required: bool,
    pub message: String,
}

/// Rejects event dates that are past or already booked. Limited dates still
/// go through.
pub fn check_event_date(
    availability: &Availability,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), &'static str> {
    match availability.status_of(date, today) {
        DayStatus::Past | DayStatus::Booked => Err(DATE_UNAVAILABLE_MESSAGE),
        DayStatus::Limited | DayStatus::Available => Ok(()),
    }
}

/// Marks the response 400 and wraps `message` for the client.
#[cfg(feature = "ssr")]
fn bad_request(message: impl std::fmt::Display) -> ServerFnError {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::BAD_REQUEST);
    }
    ServerFnError::new(message.to_string())
}

#[cfg(feature = "ssr")]
fn server_error(context: &str, err: impl std::fmt::Display) -> ServerFnError {
    tracing::error!(error = %err, "{}", context);
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    }
    ServerFnError::new(shared_types::forms::SUBMIT_ERROR_MESSAGE)
}

#[server(prefix = "/api", endpoint = "contact", input = Json)]
pub async fn submit_contact(
    #[server(flatten)] submission: ContactSubmission,
) -> Result<SubmissionReceipt, ServerFnError> {
    let submission = submission.validated().map_err(bad_request)?;
    let config = get_config().map_err(|e| server_error("configuration unavailable", e))?;

    let id = firestore::save_document(
        config,
        firestore::CONTACT_COLLECTION,
        &submission,
        firestore::STATUS_NEW,
    )
    .await
    .map_err(|e| server_error("failed to save contact inquiry", e))?;

    tracing::info!(
        service = submission.service_type.label(),
        event_date = submission.field("eventDate").unwrap_or("-"),
        id = %id,
        "contact inquiry received"
    );
    Ok(SubmissionReceipt {
        success: true,
        id,
        message: submission.service_type.success_message().to_string(),
    })
}

#[server(prefix = "/api", endpoint = "booking", input = Json)]
pub async fn submit_booking(
    #[server(flatten)] booking: BookingSubmission,
) -> Result<BookingReceipt, ServerFnError> {
    let config = get_config().map_err(|e| server_error("configuration unavailable", e))?;
    let calculator = PricingCalculator::new(config.pricing.clone());

    let client_total = booking.total_amount;
    let (booking, quote) = booking.reprice(&calculator).map_err(bad_request)?;
    if client_total != booking.total_amount {
        tracing::warn!(client_total, total = booking.total_amount, "client total did not match catalog");
    }

    let today = business_today(chrono::Utc::now());
    check_event_date(&config.availability, booking.event_date, today).map_err(bad_request)?;
    let taken = firestore::is_date_taken(config, booking.event_date)
        .await
        .map_err(|e| server_error("failed to check date availability", e))?;
    if taken {
        return Err(bad_request(DATE_UNAVAILABLE_MESSAGE));
    }

    let id = firestore::save_document(
        config,
        firestore::BOOKING_COLLECTION,
        &booking,
        firestore::STATUS_PENDING,
    )
    .await
    .map_err(|e| server_error("failed to save booking request", e))?;

    tracing::info!(id = %id, date = %booking.event_date, total = quote.total(), "booking request received");
    Ok(BookingReceipt {
        success: true,
        id,
        total_amount: booking.total_amount,
        quote_required: booking.quote_required,
        message: booking.service_type.success_message().to_string(),
    })
}

#[server(prefix = "/api", endpoint = "create-payment-intent", input = Json)]
pub async fn create_payment_intent(
    amount: i64,
    currency: Option<String>,
    metadata: Option<BTreeMap<String, String>>,
) -> Result<PaymentIntentResponse, ServerFnError> {
    let request = PaymentIntentRequest {
        amount,
        currency: currency.unwrap_or_else(|| "usd".to_string()),
        metadata: metadata.unwrap_or_default(),
    };
    request.validate().map_err(bad_request)?;

    let config = get_config().map_err(|e| server_error("configuration unavailable", e))?;
    stripe::create_payment_intent(config, &request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create payment intent");
            ServerFnError::new(e.to_string())
        })
}

/// Live Google reviews, or the bundled list when they can't be fetched.
#[server(prefix = "/api", endpoint = "google-places-reviews", input = Json)]
pub async fn google_places_reviews(
    #[server(rename = "placeId")] place_id: Option<String>,
) -> Result<ReviewsResponse, ServerFnError> {
    let fetched = match get_config() {
        Ok(config) => google_places::fetch_place_reviews(config, place_id.as_deref()).await,
        Err(e) => Err(e.into()),
    };

    let (reviews, info) = match fetched {
        Ok(place) => (Ok(place.reviews), Some(place.info)),
        Err(e) => {
            tracing::warn!(error = %e, "serving fallback reviews");
            (Err(e), None)
        }
    };
    Ok(ReviewSource::from_result(reviews).into_response(info))
}

#[server(prefix = "/api", endpoint = "calendar-availability", input = Json)]
pub async fn get_calendar_availability() -> Result<Availability, ServerFnError> {
    let config = get_config().map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(config.availability.clone())
}

/// Unwraps the message a server function failed with.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::ServiceType;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_date_check() {
        let availability = Availability::new([ymd(2025, 6, 14)], [ymd(2025, 6, 21)]);
        let today = ymd(2025, 6, 1);

        assert_eq!(
            check_event_date(&availability, ymd(2025, 5, 31), today),
            Err(DATE_UNAVAILABLE_MESSAGE)
        );
        assert_eq!(
            check_event_date(&availability, ymd(2025, 6, 14), today),
            Err(DATE_UNAVAILABLE_MESSAGE)
        );
        assert_eq!(check_event_date(&availability, ymd(2025, 6, 21), today), Ok(()));
        assert_eq!(check_event_date(&availability, ymd(2025, 6, 28), today), Ok(()));
        assert_eq!(check_event_date(&availability, today, today), Ok(()));
    }

    #[test]
    fn test_reviews_input_reads_place_id() {
        let input: GooglePlacesReviews =
            serde_json::from_value(json!({"placeId": "ChIJ123"})).unwrap();
        assert_eq!(input.place_id.as_deref(), Some("ChIJ123"));

        let input: GooglePlacesReviews = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.place_id, None);
    }

    #[test]
    fn test_contact_body_is_flat() {
        let input: SubmitContact = serde_json::from_value(json!({
            "name": "Ana Joseph",
            "email": "ana@example.com",
            "eventDate": "2025-06-14",
            "packageInterest": "ceremony",
            "serviceType": "Wedding",
            "timestamp": "2025-01-20T15:30:00.000Z"
        }))
        .unwrap();
        let submission = input.submission.clone().validated().unwrap();
        assert_eq!(submission.service_type, ServiceType::Wedding);
        assert_eq!(submission.field("packageInterest"), Some("ceremony"));
        assert_eq!(submission.field("eventDate"), Some("2025-06-14"));

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["name"], "Ana Joseph");
        assert!(body.get("submission").is_none());
    }

    #[test]
    fn test_booking_body_is_flat() {
        let input: SubmitBooking = serde_json::from_value(json!({
            "serviceType": "Saint Lucia Wedding",
            "timestamp": "2025-01-20T15:30:00.000Z",
            "eventDate": "2025-06-14",
            "package": "ceremony",
            "addons": ["cold-sparks"],
            "clientName": "Ana Joseph",
            "clientEmail": "ana@example.com",
            "guestCount": "120",
            "venue": "Royalton Saint Lucia",
            "totalAmount": 3498
        }))
        .unwrap();
        let booking = input.booking;
        assert_eq!(booking.event_date, ymd(2025, 6, 14));
        assert_eq!(booking.guest_count, Some(120));
        assert_eq!(booking.total_amount, 3498);
        assert_eq!(booking.addons, vec!["cold-sparks".to_string()]);

        let blank: SubmitBooking = serde_json::from_value(json!({
            "serviceType": "Saint Lucia Wedding",
            "timestamp": "2025-01-20T15:30:00Z",
            "eventDate": "2025-06-14",
            "clientName": "Ana",
            "clientEmail": "ana@example.com",
            "guestCount": "",
            "totalAmount": 0
        }))
        .unwrap();
        assert_eq!(blank.booking.guest_count, None);
    }
}
