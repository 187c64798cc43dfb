//! `map` command: build a [`LocationQueryConfig`] from an optional request
//! file plus flag overrides, then compose the link.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use deeplink_core::AppConfig;
use deeplink_maps::{
    Coordinate, LocationQueryComposer, LocationQueryConfig, MapType, MapsError, TransportType,
};

#[derive(Debug, Default, Args)]
pub(crate) struct MapArgs {
    /// YAML or JSON request file; flags override its fields
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// standard, satellite, hybrid or transit
    #[arg(long)]
    pub map_type: Option<MapType>,
    /// Search term, or pin label when --coordinate is set
    #[arg(long)]
    pub query: Option<String>,
    /// Address to display without searching
    #[arg(long)]
    pub address: Option<String>,
    /// Search hint as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub near: Option<Coordinate>,
    /// Map center or pin as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub coordinate: Option<Coordinate>,
    /// Zoom level (clamped to 2..21)
    #[arg(long)]
    pub zoom: Option<f64>,
    /// Span around --coordinate as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub span: Option<Coordinate>,
    /// Span around --search-location as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub screen_span: Option<Coordinate>,
    /// Search anchor as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub search_location: Option<Coordinate>,
    /// Directions origin
    #[arg(long = "from")]
    pub source_address: Option<String>,
    /// Directions destination
    #[arg(long = "to")]
    pub destination_address: Option<String>,
    /// drive, walk or transit
    #[arg(long = "transport")]
    pub transport_type: Option<TransportType>,
}

impl MapArgs {
    /// Merge flags over the request file (if any).
    pub(crate) fn into_config(self) -> anyhow::Result<LocationQueryConfig> {
        let mut config: LocationQueryConfig = match &self.file {
            Some(path) => deeplink_core::load_request_file(path)?,
            None => LocationQueryConfig::default(),
        };

        overlay(&mut config.map_type, self.map_type);
        overlay(&mut config.query, self.query);
        overlay(&mut config.address, self.address);
        overlay(&mut config.near_location, self.near);
        overlay(&mut config.coordinate, self.coordinate);
        overlay(&mut config.zoom, self.zoom);
        overlay(&mut config.span, self.span);
        overlay(&mut config.screen_span, self.screen_span);
        overlay(&mut config.search_location, self.search_location);
        overlay(&mut config.source_address, self.source_address);
        overlay(&mut config.destination_address, self.destination_address);
        overlay(&mut config.transport_type, self.transport_type);

        Ok(config)
    }
}

fn overlay<T>(field: &mut Option<T>, flag: Option<T>) {
    if flag.is_some() {
        *field = flag;
    }
}

pub(crate) fn run_map(args: MapArgs, app_config: &AppConfig) -> anyhow::Result<String> {
    let config = args.into_config()?;
    let composer = LocationQueryComposer::from_app_config(app_config);

    match composer.compose(&config) {
        Ok(link) => Ok(link.into_string()),
        Err(MapsError::EmptyComposition) => {
            tracing::warn!("map request has no usable fields");
            Err(MapsError::EmptyComposition).context("nothing to display")
        }
        Err(e) => Err(e.into()),
    }
}
