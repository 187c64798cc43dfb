use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MapsError {
    /// No rule in the table produced a parameter, so there is nothing to open.
    #[error("map link request produced no query parameters")]
    EmptyComposition,

    #[error("invalid coordinate \"{input}\": {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("unknown map type: {0}")]
    UnknownMapType(String),

    #[error("unknown transport type: {0}")]
    UnknownTransportType(String),
}
