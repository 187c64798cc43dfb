//! The ordered parameter table behind every map link.
//!
//! Each rule owns one query key and decides on its own whether to emit a
//! value. Guards only look at which input fields are present, never at
//! whether an earlier rule fired. Table order is the wire order.

use crate::encoding::encode_value;
use crate::types::LocationQueryConfig;

pub(crate) const MIN_ZOOM: f64 = 2.0;
pub(crate) const MAX_ZOOM: f64 = 21.0;

pub(crate) struct Rule {
    pub key: &'static str,
    pub emit: fn(&LocationQueryConfig) -> Option<String>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        key: "t",
        emit: map_type,
    },
    Rule {
        key: "q",
        emit: query,
    },
    Rule {
        key: "address",
        emit: address,
    },
    Rule {
        key: "near",
        emit: near,
    },
    Rule {
        key: "ll",
        emit: coordinate,
    },
    Rule {
        key: "z",
        emit: zoom,
    },
    Rule {
        key: "spn",
        emit: span,
    },
    Rule {
        key: "sspn",
        emit: screen_span,
    },
    Rule {
        key: "sll",
        emit: search_location,
    },
    Rule {
        key: "daddr",
        emit: destination,
    },
    Rule {
        key: "saddr",
        emit: source,
    },
    Rule {
        key: "dirflag",
        emit: dirflag,
    },
];

fn map_type(config: &LocationQueryConfig) -> Option<String> {
    config.map_type.map(|t| t.query_code().to_string())
}

fn query(config: &LocationQueryConfig) -> Option<String> {
    config.query.as_deref().map(encode_value)
}

fn address(config: &LocationQueryConfig) -> Option<String> {
    config.address.as_deref().map(encode_value)
}

fn near(config: &LocationQueryConfig) -> Option<String> {
    config.near_location.map(|c| c.to_string())
}

fn coordinate(config: &LocationQueryConfig) -> Option<String> {
    config.coordinate.map(|c| c.to_string())
}

fn zoom(config: &LocationQueryConfig) -> Option<String> {
    let zoom = config.zoom?;
    if config.search_location.is_none() || config.span.is_some() || config.screen_span.is_some()
    {
        return None;
    }
    // NaN has no position in 2..=21; skip rather than emit "NaN".
    if zoom.is_nan() {
        return None;
    }
    Some(zoom.clamp(MIN_ZOOM, MAX_ZOOM).to_string())
}

fn span(config: &LocationQueryConfig) -> Option<String> {
    if config.zoom.is_some() || config.coordinate.is_none() {
        return None;
    }
    config.span.map(|c| c.to_string())
}

fn screen_span(config: &LocationQueryConfig) -> Option<String> {
    config.search_location?;
    config.screen_span.map(|c| c.to_string())
}

fn search_location(config: &LocationQueryConfig) -> Option<String> {
    config.search_location.map(|c| c.to_string())
}

/// Destination that switches on directions mode, if any.
fn directions_destination(config: &LocationQueryConfig) -> Option<&str> {
    config
        .destination_address
        .as_deref()
        .filter(|d| !d.trim().is_empty())
}

fn destination(config: &LocationQueryConfig) -> Option<String> {
    directions_destination(config).map(encode_value)
}

fn source(config: &LocationQueryConfig) -> Option<String> {
    directions_destination(config)?;
    config
        .source_address
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(encode_value)
}

fn dirflag(config: &LocationQueryConfig) -> Option<String> {
    directions_destination(config)?;
    config.transport_type.map(|t| t.query_code().to_string())
}
