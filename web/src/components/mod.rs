pub mod banner;
pub mod booking_calendar;
pub mod booking_form;
pub mod contact_form;
pub mod loading;
pub mod navbar;
pub mod pricing_calculator;
pub mod reviews_carousel;

pub use booking_form::BookingForm;
pub use contact_form::{ChoiceField, ContactForm, EquipmentField};
pub use navbar::{Footer, Navbar};
pub use reviews_carousel::ReviewsCarousel;
