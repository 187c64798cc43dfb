//! `tel:`, `mailto:` and `sms:` deep links.

pub mod error;
pub mod links;

pub use error::ContactError;
pub use links::{email_link, phone_call_link, sms_link, EmailDraft};
