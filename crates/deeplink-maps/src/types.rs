use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MapsError;

/// A latitude/longitude pair, also used for span deltas.
///
/// Deserialization rejects NaN and infinite components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate, rejecting non-finite components.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::InvalidCoordinate`] if either component is NaN or
    /// infinite.
    pub fn checked(lat: f64, lon: f64) -> Result<Self, MapsError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(MapsError::InvalidCoordinate {
                input: format!("{lat},{lon}"),
                reason: "components must be finite".to_string(),
            });
        }
        Ok(Self { lat, lon })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = MapsError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::checked(raw.lat, raw.lon)
    }
}

/// Serialized as `lat,lon` using the shortest decimal form that round-trips
/// through `f64` parsing. Never uses exponent notation.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = MapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MapsError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"lat,lon\""))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        Coordinate::checked(lat, lon).map_err(|_| invalid("components must be finite"))
    }
}

/// Rendering style of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Standard,
    Satellite,
    Hybrid,
    Transit,
}

impl MapType {
    /// Single-letter value of the `t` parameter.
    #[must_use]
    pub const fn query_code(self) -> &'static str {
        match self {
            MapType::Standard => "m",
            MapType::Satellite => "k",
            MapType::Hybrid => "h",
            MapType::Transit => "r",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapType::Standard => write!(f, "standard"),
            MapType::Satellite => write!(f, "satellite"),
            MapType::Hybrid => write!(f, "hybrid"),
            MapType::Transit => write!(f, "transit"),
        }
    }
}

impl FromStr for MapType {
    type Err = MapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(MapType::Standard),
            "satellite" => Ok(MapType::Satellite),
            "hybrid" => Ok(MapType::Hybrid),
            "transit" => Ok(MapType::Transit),
            _ => Err(MapsError::UnknownMapType(s.to_string())),
        }
    }
}

/// Means of travel for directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Drive,
    Walk,
    #[serde(alias = "public_transit")]
    Transit,
}

impl TransportType {
    /// Single-letter value of the `dirflag` parameter.
    #[must_use]
    pub const fn query_code(self) -> &'static str {
        match self {
            TransportType::Drive => "d",
            TransportType::Walk => "w",
            TransportType::Transit => "r",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportType::Drive => write!(f, "drive"),
            TransportType::Walk => write!(f, "walk"),
            TransportType::Transit => write!(f, "transit"),
        }
    }
}

impl FromStr for TransportType {
    type Err = MapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drive" => Ok(TransportType::Drive),
            "walk" => Ok(TransportType::Walk),
            "transit" | "public-transit" | "public_transit" => Ok(TransportType::Transit),
            _ => Err(MapsError::UnknownTransportType(s.to_string())),
        }
    }
}

/// Sparse description of what the maps app should show.
///
/// Every field is optional; which combinations end up in the link is decided
/// by the composer's rule table, not by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationQueryConfig {
    pub map_type: Option<MapType>,
    /// Search term. Doubles as the pin label when `coordinate` is set.
    pub query: Option<String>,
    /// Address to display without performing a search.
    pub address: Option<String>,
    /// Search hint used when `search_location` is missing or incomplete.
    pub near_location: Option<Coordinate>,
    /// Map center, or pin location when combined with `query`.
    pub coordinate: Option<Coordinate>,
    /// Zoom level, clamped to `2..=21`. Only emitted alongside
    /// `search_location` and without either span.
    pub zoom: Option<f64>,
    /// Visible extent around `coordinate`. Ignored when `zoom` is set.
    pub span: Option<Coordinate>,
    /// Visible extent around `search_location`.
    pub screen_span: Option<Coordinate>,
    /// Directions origin. Defaults to the current location in the maps app.
    pub source_address: Option<String>,
    /// Directions destination. A non-empty value switches on directions mode.
    pub destination_address: Option<String>,
    pub transport_type: Option<TransportType>,
    pub search_location: Option<Coordinate>,
}

impl LocationQueryConfig {
    /// Search for `query`, optionally near a location.
    #[must_use]
    pub fn search_for(
        query: impl Into<String>,
        near: Option<Coordinate>,
        map_type: Option<MapType>,
    ) -> Self {
        Self {
            query: Some(query.into()),
            near_location: near,
            map_type,
            ..Self::default()
        }
    }

    /// Display an address without searching for it.
    #[must_use]
    pub fn address(address: impl Into<String>, map_type: Option<MapType>) -> Self {
        Self {
            address: Some(address.into()),
            map_type,
            ..Self::default()
        }
    }

    /// Drop a pin at `coordinate`, optionally labelled.
    #[must_use]
    pub fn pin_at(coordinate: Coordinate, label: Option<String>, map_type: Option<MapType>) -> Self {
        Self {
            coordinate: Some(coordinate),
            query: label,
            map_type,
            ..Self::default()
        }
    }

    /// Directions to `destination`, starting from `source` or the current
    /// location.
    #[must_use]
    pub fn directions_to(
        destination: impl Into<String>,
        source: Option<String>,
        transport_type: Option<TransportType>,
        map_type: Option<MapType>,
    ) -> Self {
        Self {
            destination_address: Some(destination.into()),
            source_address: source,
            transport_type,
            map_type,
            ..Self::default()
        }
    }
}
