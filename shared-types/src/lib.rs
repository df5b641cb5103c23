pub mod calendar;
pub mod forms;
pub mod payment;
pub mod pricing;
pub mod reviews;

pub use calendar::{Availability, CalendarGrid, CalendarState, DayCell, DayStatus, GridCell, MonthView};
pub use forms::{BookingDraft, BookingSubmission, ContactSubmission, ServiceType, ValidationError};
pub use payment::{PaymentIntentRequest, PaymentIntentResponse};
pub use pricing::{PriceQuote, PricingCalculator, PricingConfig, PricingDisplay, PricingSelection};
pub use reviews::{fallback_reviews, Carousel, Review, ReviewSource, ReviewsResponse};
