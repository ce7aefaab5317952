use backend::{
    config::ApiConfig,
    http_utils::{highland_client::HighlandClient, places_client::PlacesClient},
};
use common::{
    data_sources::PlaceProvider,
    error::ApiError,
    venue_candidate::{VenueCandidate, resolve_candidate, search_all_sources},
    venue_models::{PlacePrediction, VenueStatus},
    venue_selection::{SelectionStep, VenueSelection},
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn clients_for(server: &ServerGuard) -> (HighlandClient, PlacesClient) {
    let base = server.url();
    let config = ApiConfig::from_lookup(|name| match name {
        "HIGHLAND_API_URL" => Some(format!("{base}/api")),
        "PLACES_API_URL" => Some(format!("{base}/maps/api")),
        "PLACES_API_KEY" => Some("test-key".to_string()),
        _ => None,
    })
    .unwrap();
    (HighlandClient::new(&config).unwrap(), PlacesClient::new(&config).unwrap())
}

fn eden_details() -> serde_json::Value {
    json!({
        "status": "OK",
        "result": {
            "place_id": "ChIJ-eden",
            "name": "Eden Court",
            "formatted_address": "Bishops Rd, Inverness IV3 5SA, UK",
            "geometry": {"location": {"lat": 57.4731, "lng": -4.2324}},
            "address_components": [
                {"long_name": "IV3 5SA", "short_name": "IV3 5SA", "types": ["postal_code"]}
            ]
        }
    })
}

#[tokio::test]
async fn picking_a_provider_place_creates_one_unverified_venue() {
    let mut server = Server::new_async().await;
    let (directory, places) = clients_for(&server);

    let internal = server
        .mock("GET", "/api/venues/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Eden Court".into()))
        .with_status(200)
        .with_body(r#"{"venues":[]}"#)
        .create_async()
        .await;
    let external = server
        .mock("GET", "/maps/api/place/autocomplete/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("input".into(), "Eden Court".into()),
            Matcher::UrlEncoded("components".into(), "country:gb".into()),
            Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "status": "OK",
                "predictions": [{
                    "place_id": "ChIJ-eden",
                    "description": "Eden Court, Bishops Road, Inverness, UK",
                    "structured_formatting": {"main_text": "Eden Court", "secondary_text": "Bishops Road, Inverness, UK"}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let details = server
        .mock("GET", "/maps/api/place/details/json")
        .match_query(Matcher::UrlEncoded("place_id".into(), "ChIJ-eden".into()))
        .with_status(200)
        .with_body(eden_details().to_string())
        .expect(1)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/venues")
        .match_body(Matcher::PartialJson(json!({"name": "Eden Court", "postcode": "IV3 5SA", "status": "unverified"})))
        .with_status(201)
        .with_body(r#"{"id":"v-eden","name":"Eden Court","address":"Bishops Rd, Inverness IV3 5SA, UK","status":"unverified"}"#)
        .expect(1)
        .create_async()
        .await;

    let groups = search_all_sources(&directory, &places, "Eden Court").await;
    internal.assert_async().await;
    external.assert_async().await;
    assert!(groups.internal.is_empty());
    assert_eq!(groups.external.len(), 1);

    let mut selection = VenueSelection::default();
    let candidate = groups.candidates().remove(0);
    assert!(candidate.is_external());

    let place = match selection.prepare(&candidate) {
        SelectionStep::NeedsResolution(place) => place,
        other => panic!("expected resolution step, got {other:?}"),
    };
    let venue = resolve_candidate(&directory, &places, VenueCandidate::External(place.clone())).await.unwrap();
    assert!(selection.add(venue.clone(), Some(&place.place_id)));

    assert_eq!(venue.id, "v-eden");
    assert_eq!(venue.status, VenueStatus::Unverified);

    // Picking the same suggestion again is answered from the selection.
    assert_eq!(selection.prepare(&candidate), SelectionStep::AlreadySelected);

    details.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn created_venue_without_status_keeps_requested_status() {
    let mut server = Server::new_async().await;
    let (directory, places) = clients_for(&server);

    server
        .mock("GET", "/maps/api/place/details/json")
        .match_query(Matcher::UrlEncoded("place_id".into(), "ChIJ-eden".into()))
        .with_status(200)
        .with_body(eden_details().to_string())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/venues")
        .match_body(Matcher::PartialJson(json!({"status": "unverified"})))
        .with_status(201)
        .with_body(r#"{"id":"v-eden","name":"Eden Court"}"#)
        .expect(1)
        .create_async()
        .await;

    let place = PlacePrediction {
        place_id: "ChIJ-eden".to_string(),
        description: "Eden Court, Bishops Road, Inverness, UK".to_string(),
        main_text: "Eden Court".to_string(),
        secondary_text: Some("Bishops Road, Inverness, UK".to_string()),
    };
    let venue = resolve_candidate(&directory, &places, VenueCandidate::External(place)).await.unwrap();
    create.assert_async().await;

    assert_eq!(venue.id, "v-eden");
    assert_eq!(venue.status, VenueStatus::Unverified);
    assert_eq!(venue.address, None);
}

#[tokio::test]
async fn provider_outage_still_returns_internal_venues() {
    let mut server = Server::new_async().await;
    let (directory, places) = clients_for(&server);

    server
        .mock("GET", "/api/venues/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"venues":[{"id":"v1","name":"Ironworks","address":"Academy St, Inverness"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/maps/api/place/autocomplete/json")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let groups = search_all_sources(&directory, &places, "Iron").await;
    assert_eq!(groups.internal.len(), 1);
    assert_eq!(groups.internal[0].status, VenueStatus::Verified);
    assert!(groups.external.is_empty());
}

#[tokio::test]
async fn zero_results_is_an_empty_list() {
    let mut server = Server::new_async().await;
    let (_, places) = clients_for(&server);
    server
        .mock("GET", "/maps/api/place/autocomplete/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"ZERO_RESULTS","predictions":[]}"#)
        .create_async()
        .await;

    assert_eq!(places.autocomplete("Nowhere-on-Spey").await.unwrap(), vec![]);
}

#[tokio::test]
async fn denied_key_is_a_server_error() {
    let mut server = Server::new_async().await;
    let (_, places) = clients_for(&server);
    server
        .mock("GET", "/maps/api/geocode/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("address".into(), "IV2 3PY".into()),
            Matcher::UrlEncoded("region".into(), "gb".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid.","results":[]}"#)
        .create_async()
        .await;

    let err = places.geocode("IV2 3PY").await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 502, ref message } if message.contains("REQUEST_DENIED")), "{err:?}");
}

#[tokio::test]
async fn geocode_returns_labelled_points() {
    let mut server = Server::new_async().await;
    let (_, places) = clients_for(&server);
    server
        .mock("GET", "/maps/api/geocode/json")
        .match_query(Matcher::UrlEncoded("address".into(), "Inverness".into()))
        .with_status(200)
        .with_body(
            json!({
                "status": "OK",
                "results": [{"formatted_address": "Inverness, UK", "geometry": {"location": {"lat": 57.4778, "lng": -4.2247}}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let found = places.geocode("Inverness").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].label, "Inverness, UK");
    assert!((found[0].latitude - 57.4778).abs() < 1e-9);
}
