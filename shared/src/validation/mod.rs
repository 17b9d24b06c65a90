pub mod party_request;

pub use party_request::{PartyFieldError, PartyRequestValidation};
