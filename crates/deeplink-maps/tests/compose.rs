//! End-to-end composition checks against the public API.

use deeplink_maps::{
    compose_pairs, decode_value, Coordinate, LocationQueryComposer, LocationQueryConfig, MapType,
    MapsError, QueryPairList, TransportType,
};

const SAN_DIEGO: Coordinate = Coordinate::new(32.7157, -117.1611);

fn compose(config: &LocationQueryConfig) -> Result<String, MapsError> {
    LocationQueryComposer::new()
        .compose(config)
        .map(deeplink_maps::MapLink::into_string)
}

#[test]
fn all_absent_fields_produce_no_link() {
    assert_eq!(
        compose(&LocationQueryConfig::default()),
        Err(MapsError::EmptyComposition)
    );
}

#[test]
fn query_only_produces_single_pair() {
    let url = compose(&LocationQueryConfig::search_for("pizza", None, None)).unwrap();
    assert_eq!(url, "http://maps.apple.com/?q=pizza");
}

#[test]
fn query_with_reserved_characters_is_encoded() {
    let url = compose(&LocationQueryConfig::search_for("pizza & wings", None, None)).unwrap();
    assert_eq!(url, "http://maps.apple.com/?q=pizza%20%26%20wings");
}

#[test]
fn out_of_range_zoom_is_clamped() {
    let config = LocationQueryConfig {
        coordinate: Some(SAN_DIEGO),
        zoom: Some(25.0),
        search_location: Some(SAN_DIEGO),
        ..Default::default()
    };
    let pairs = compose_pairs(&config);
    assert_eq!(pairs.get("z"), Some("21"));
    assert_eq!(
        compose(&config).unwrap(),
        "http://maps.apple.com/?ll=32.7157,-117.1611&z=21&sll=32.7157,-117.1611"
    );
}

#[test]
fn span_and_zoom_are_mutually_exclusive() {
    let config = LocationQueryConfig {
        coordinate: Some(SAN_DIEGO),
        zoom: Some(12.0),
        span: Some(Coordinate::new(0.1, 0.2)),
        ..Default::default()
    };
    let pairs = compose_pairs(&config);
    assert!(!pairs.contains_key("z"));
    // zoom present blocks spn too; drop it and spn appears.
    assert!(!pairs.contains_key("spn"));

    let without_zoom = LocationQueryConfig {
        zoom: None,
        ..config
    };
    let pairs = compose_pairs(&without_zoom);
    assert!(!pairs.contains_key("z"));
    assert_eq!(pairs.get("spn"), Some("0.1,0.2"));
}

#[test]
fn span_with_zoom_and_search_location_suppresses_z() {
    let config = LocationQueryConfig {
        coordinate: Some(SAN_DIEGO),
        search_location: Some(SAN_DIEGO),
        zoom: Some(12.0),
        span: Some(Coordinate::new(0.1, 0.2)),
        ..Default::default()
    };
    let pairs = compose_pairs(&config);
    assert!(!pairs.contains_key("z"));
    assert!(pairs.contains_key("sll"));
}

#[test]
fn empty_destination_suppresses_directions_block() {
    let config = LocationQueryConfig {
        destination_address: Some(String::new()),
        source_address: Some("123 Main St".to_string()),
        transport_type: Some(TransportType::Drive),
        ..Default::default()
    };
    let pairs = compose_pairs(&config);
    for key in ["daddr", "saddr", "dirflag"] {
        assert!(!pairs.contains_key(key), "{key} should be absent");
    }
    assert_eq!(compose(&config), Err(MapsError::EmptyComposition));
}

#[test]
fn full_directions_request() {
    let config = LocationQueryConfig::directions_to(
        "Petco Park",
        Some("123 Main St".to_string()),
        Some(TransportType::Walk),
        Some(MapType::Standard),
    );
    assert_eq!(
        compose(&config).unwrap(),
        "http://maps.apple.com/?t=m&daddr=Petco%20Park&saddr=123%20Main%20St&dirflag=w"
    );
}

#[test]
fn documented_search_location_example() {
    let config = LocationQueryConfig {
        search_location: Some(Coordinate::new(50.894_967, 4.341_626)),
        zoom: Some(10.0),
        map_type: Some(MapType::Satellite),
        ..Default::default()
    };
    assert_eq!(
        compose(&config).unwrap(),
        "http://maps.apple.com/?t=k&z=10&sll=50.894967,4.341626"
    );
}

#[test]
fn round_trip_recovers_pairs_in_order() {
    let config = LocationQueryConfig {
        map_type: Some(MapType::Hybrid),
        query: Some("coffee, tea & more".to_string()),
        address: Some("Broadway/5th Ave".to_string()),
        near_location: Some(Coordinate::new(40.7, -74.0)),
        coordinate: Some(Coordinate::new(40.741_895, -73.989_308)),
        screen_span: Some(Coordinate::new(0.01, 0.02)),
        search_location: Some(Coordinate::new(40.75, -73.99)),
        destination_address: Some("Grand Central".to_string()),
        source_address: Some("Penn Station".to_string()),
        transport_type: Some(TransportType::Transit),
        ..Default::default()
    };

    let link = LocationQueryComposer::new().compose(&config).unwrap();
    let parsed = QueryPairList::parse_query_string(link.query());

    assert_eq!(&parsed, link.query_pairs());
    assert_eq!(
        parsed.keys(),
        [
            "t", "q", "address", "near", "ll", "sspn", "sll", "daddr", "saddr", "dirflag"
        ]
    );
    assert_eq!(
        parsed.get("q").map(decode_value).as_deref(),
        Some("coffee, tea & more")
    );
    assert_eq!(
        parsed.get("address").map(decode_value).as_deref(),
        Some("Broadway/5th Ave")
    );
}

#[test]
fn composer_is_shareable_across_threads() {
    let composer = std::sync::Arc::new(LocationQueryComposer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let composer = std::sync::Arc::clone(&composer);
            std::thread::spawn(move || {
                let config = LocationQueryConfig::search_for(format!("stop {i}"), None, None);
                composer.compose(&config).map(deeplink_maps::MapLink::into_string)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let url = handle.join().unwrap().unwrap();
        assert_eq!(url, format!("http://maps.apple.com/?q=stop%20{i}"));
    }
}
