use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("phone number is empty")]
    EmptyPhoneNumber,

    #[error("email recipient is empty")]
    EmptyRecipient,
}
