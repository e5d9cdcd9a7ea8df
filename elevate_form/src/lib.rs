//! Client side of the contact form.
//!
//! [`ContactForm`] holds the field values, the loading flag and the status
//! line. It validates locally and sends at most one relay request per
//! submission.

pub use controller::{
    ContactForm, SUCCESS_MESSAGE, SUCCESS_STATUS_TTL, REJECTED_MESSAGE, TRANSPORT_ERROR_MESSAGE,
};
pub use status::SubmissionStatus;
pub use validation::{validate, ContactFormFields, ValidationError};

mod controller;
mod status;
mod validation;
