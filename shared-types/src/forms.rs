//! Contact and booking submissions, and the validation that runs before any
//! network call is made.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::pricing::{PriceQuote, PricingCalculator, PricingError, PricingSelection};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a wedding date from the calendar.")]
    NoDateSelected,
    #[error("Please select at least one equipment item.")]
    NoEquipmentSelected,
    #[error("The {0} must be a whole number.")]
    InvalidNumber(&'static str),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Wedding")]
    Wedding,
    #[serde(rename = "Saint Lucia Wedding")]
    SaintLuciaWedding,
    #[serde(rename = "Private Events")]
    PrivateEvents,
    #[serde(rename = "Minnesota Events")]
    MinnesotaEvents,
    #[serde(rename = "Equipment Rental")]
    EquipmentRental,
    #[serde(rename = "General Inquiry")]
    General,
}

impl ServiceType {
    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Wedding => "Wedding",
            ServiceType::SaintLuciaWedding => "Saint Lucia Wedding",
            ServiceType::PrivateEvents => "Private Events",
            ServiceType::MinnesotaEvents => "Minnesota Events",
            ServiceType::EquipmentRental => "Equipment Rental",
            ServiceType::General => "General Inquiry",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ServiceType::Wedding => {
                "Thank you! We've received your wedding inquiry and will contact you soon."
            }
            ServiceType::SaintLuciaWedding => {
                "Booking request received! We'll contact you within 24 hours to confirm availability and arrange payment."
            }
            ServiceType::PrivateEvents => {
                "Thank you! We've received your private event inquiry and will contact you soon."
            }
            ServiceType::MinnesotaEvents => {
                "Thank you! We've received your Minnesota event inquiry and will contact you soon."
            }
            ServiceType::EquipmentRental => {
                "Thank you! We've received your equipment rental request and will contact you soon with a quote."
            }
            ServiceType::General => {
                "Thank you! Your inquiry has been sent successfully. We'll get back to you soon!"
            }
        }
    }
}

pub const SUBMIT_ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";

fn require(value: &str, label: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(label))
    } else {
        Ok(value.to_string())
    }
}

fn require_email(value: &str) -> Result<String, ValidationError> {
    let email = require(value, "email address")?;
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(ValidationError::InvalidEmail),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Form posts carry numbers as strings; accept either, blank meaning none.
fn count_from_form<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Number(n)) => Ok(Some(n)),
        Some(Count::Text(text)) => match optional(&text) {
            None => Ok(None),
            Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
        },
    }
}

/// A contact-form inquiry. Page-specific fields travel in `fields`, next to
/// the injected `serviceType` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub service_type: ServiceType,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment_selected: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// `name` and `email` are required; blank optional fields are dropped.
    pub fn new(
        service_type: ServiceType,
        fields: BTreeMap<String, String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = require(fields.get("name").map(String::as_str).unwrap_or_default(), "name")?;
        let email = require_email(fields.get("email").map(String::as_str).unwrap_or_default())?;

        let mut fields: BTreeMap<String, String> = fields
            .into_iter()
            .filter_map(|(k, v)| optional(&v).map(|v| (k, v)))
            .collect();
        fields.insert("name".to_string(), name);
        fields.insert("email".to_string(), email);

        Ok(Self {
            service_type,
            timestamp,
            equipment_selected: Vec::new(),
            equipment_needed: None,
            fields,
        })
    }

    /// Attaches the equipment checklist; at least one item is required.
    pub fn with_equipment(mut self, equipment: Vec<String>) -> Result<Self, ValidationError> {
        if equipment.is_empty() {
            return Err(ValidationError::NoEquipmentSelected);
        }
        self.equipment_needed = Some(equipment.join(", "));
        self.equipment_selected = equipment;
        Ok(self)
    }

    /// Re-runs the form rules on a submission received over the wire.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let equipment = self.equipment_selected;
        let checked = Self::new(self.service_type, self.fields, self.timestamp)?;
        if checked.service_type == ServiceType::EquipmentRental {
            checked.with_equipment(equipment)
        } else {
            Ok(checked)
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// What the booking form holds before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub event_date: Option<NaiveDate>,
    pub selection: PricingSelection,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub guest_count: String,
    pub venue: String,
    pub special_requests: String,
}

impl BookingDraft {
    /// Validates the draft and prices it, yielding the payload for the
    /// booking endpoint.
    pub fn submit(
        &self,
        calculator: &PricingCalculator,
        timestamp: DateTime<Utc>,
    ) -> Result<BookingSubmission, ValidationError> {
        let event_date = self.event_date.ok_or(ValidationError::NoDateSelected)?;
        let client_name = require(&self.client_name, "name")?;
        let client_email = require_email(&self.client_email)?;
        let guest_count = match optional(&self.guest_count) {
            Some(count) => Some(
                count
                    .parse::<u32>()
                    .map_err(|_| ValidationError::InvalidNumber("guest count"))?,
            ),
            None => None,
        };
        let quote = calculator.quote(&self.selection)?;

        Ok(BookingSubmission {
            service_type: ServiceType::SaintLuciaWedding,
            timestamp,
            event_date,
            package: self.selection.package().map(str::to_string),
            standalone: self.selection.standalone().map(str::to_string),
            addons: self.selection.addons.iter().cloned().collect(),
            client_name,
            client_email,
            client_phone: optional(&self.client_phone),
            guest_count,
            venue: optional(&self.venue),
            special_requests: optional(&self.special_requests),
            total_amount: quote.total(),
            quote_required: quote.quote_required,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub service_type: ServiceType,
    pub timestamp: DateTime<Utc>,
    pub event_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone: Option<String>,
    #[serde(default)]
    pub addons: Vec<String>,
    pub client_name: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "count_from_form",
        skip_serializing_if = "Option::is_none"
    )]
    pub guest_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Whole dollars, computed by the client.
    pub total_amount: u32,
    #[serde(default)]
    pub quote_required: bool,
}

impl BookingSubmission {
    pub fn selection(&self) -> Result<PricingSelection, PricingError> {
        PricingSelection::from_form(
            self.package.as_deref(),
            self.standalone.as_deref(),
            self.addons.iter().cloned(),
        )
    }

    /// Re-validates a received booking and re-prices it from `calculator`,
    /// overwriting whatever total the client sent.
    pub fn reprice(mut self, calculator: &PricingCalculator) -> Result<(Self, PriceQuote), ValidationError> {
        self.client_name = require(&self.client_name, "name")?;
        self.client_email = require_email(&self.client_email)?;
        let quote = calculator.quote(&self.selection()?)?;
        self.total_amount = quote.total();
        self.quote_required = quote.quote_required;
        Ok((self, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 15, 30, 0).unwrap()
    }

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn draft() -> BookingDraft {
        let mut draft = BookingDraft {
            event_date: NaiveDate::from_ymd_opt(2025, 6, 14),
            client_name: " Ana Joseph ".to_string(),
            client_email: "ana@example.com".to_string(),
            guest_count: "120".to_string(),
            ..Default::default()
        };
        draft.selection.select_package("ceremony");
        draft.selection.set_addon("cold-sparks", true);
        draft
    }

    #[test]
    fn test_contact_submission_json() {
        let submission = ContactSubmission::new(
            ServiceType::Wedding,
            fields(&[("name", "Ana"), ("email", "ana@example.com"), ("phone", "  "), ("packageInterest", "ceremony")]),
            now(),
        )
        .unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["serviceType"], "Wedding");
        assert_eq!(json["timestamp"], "2025-01-20T15:30:00Z");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["packageInterest"], "ceremony");
        assert!(json.get("phone").is_none());
        assert!(json.get("equipmentSelected").is_none());

        let back: ContactSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(back, submission);
    }

    #[test]
    fn test_contact_requires_name_and_email() {
        assert_eq!(
            ContactSubmission::new(ServiceType::General, fields(&[("email", "a@b.co")]), now()),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            ContactSubmission::new(ServiceType::General, fields(&[("name", "A"), ("email", "nope")]), now()),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_equipment_required() {
        let base = ContactSubmission::new(
            ServiceType::EquipmentRental,
            fields(&[("name", "Ana"), ("email", "ana@example.com")]),
            now(),
        )
        .unwrap();
        assert_eq!(
            base.clone().with_equipment(vec![]),
            Err(ValidationError::NoEquipmentSelected)
        );
        let submission = base
            .with_equipment(vec!["sound-system".to_string(), "lighting".to_string()])
            .unwrap();
        assert_eq!(submission.equipment_needed.as_deref(), Some("sound-system, lighting"));
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["equipmentSelected"], serde_json::json!(["sound-system", "lighting"]));
        assert_eq!(json["serviceType"], "Equipment Rental");
    }

    #[test]
    fn test_validated_rechecks_wire_payload() {
        let json = serde_json::json!({
            "serviceType": "Equipment Rental",
            "timestamp": "2025-01-20T15:30:00Z",
            "name": "Ana",
            "email": "ana@example.com"
        });
        let received: ContactSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(received.clone().validated(), Err(ValidationError::NoEquipmentSelected));

        let mut received = received;
        received.equipment_selected = vec!["sound-system".to_string()];
        let checked = received.validated().unwrap();
        assert_eq!(checked.equipment_needed.as_deref(), Some("sound-system"));

        let tampered: ContactSubmission = serde_json::from_value(serde_json::json!({
            "serviceType": "Wedding",
            "timestamp": "2025-01-20T15:30:00Z",
            "name": "   ",
            "email": "ana@example.com"
        }))
        .unwrap();
        assert_eq!(tampered.validated(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_booking_requires_date() {
        let mut draft = draft();
        draft.event_date = None;
        assert_eq!(
            draft.submit(&PricingCalculator::default(), now()),
            Err(ValidationError::NoDateSelected)
        );
    }

    #[test]
    fn test_booking_submission() {
        let submission = draft().submit(&PricingCalculator::default(), now()).unwrap();
        assert_eq!(submission.client_name, "Ana Joseph");
        assert_eq!(submission.total_amount, 3498);
        assert_eq!(submission.guest_count, Some(120));
        assert_eq!(submission.package.as_deref(), Some("ceremony"));
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["totalAmount"], 3498);
        assert_eq!(json["eventDate"], "2025-06-14");
        assert_eq!(json["serviceType"], "Saint Lucia Wedding");
    }

    #[test]
    fn test_booking_guest_count_must_be_numeric() {
        let mut draft = draft();
        draft.guest_count = "lots".to_string();
        assert_eq!(
            draft.submit(&PricingCalculator::default(), now()),
            Err(ValidationError::InvalidNumber("guest count"))
        );
    }

    #[test]
    fn test_reprice_overrides_client_total() {
        let mut submission = draft().submit(&PricingCalculator::default(), now()).unwrap();
        submission.total_amount = 1;
        let (repriced, quote) = submission.reprice(&PricingCalculator::default()).unwrap();
        assert_eq!(repriced.total_amount, 3498);
        assert_eq!(quote.total(), 3498);
    }

    #[test]
    fn test_reprice_rejects_conflicting_base() {
        let mut submission = draft().submit(&PricingCalculator::default(), now()).unwrap();
        submission.standalone = Some("dj-only".to_string());
        assert_eq!(
            submission.reprice(&PricingCalculator::default()).map(|(s, _)| s.total_amount),
            Err(ValidationError::Pricing(PricingError::ConflictingBase))
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingField("name").to_string(), "Please enter your name.");
        assert_eq!(
            ValidationError::NoDateSelected.to_string(),
            "Please select a wedding date from the calendar."
        );
    }
}
