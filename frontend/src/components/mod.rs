mod booking_form;
mod field;
mod footer;
mod gallery;

pub use booking_form::BookingForm;
pub use field::Field;
pub use footer::Footer;
pub use gallery::Gallery;
