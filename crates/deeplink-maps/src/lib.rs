//! Native maps deep-link composition.
//!
//! A [`LocationQueryConfig`] holds a sparse set of optional map intents
//! (search, pin, span, directions). [`LocationQueryComposer`] runs it through a
//! fixed, ordered rule table and produces a [`MapLink`] whose query string
//! lists the parameters in canonical precedence order.

pub mod composer;
pub mod error;
pub mod types;

mod encoding;
mod rules;

pub use composer::{compose_pairs, LocationQueryComposer, MapLink, QueryPairList};
pub use encoding::decode_value;
pub use error::MapsError;
pub use types::{Coordinate, LocationQueryConfig, MapType, TransportType};
