//! HTTP contract tests for GeoportailClient using wiremock.

use geoportail_lib::GeoportailClient;
use geoportail_lib::error::ApiError;
use geoportail_lib::model::Coordinates;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeoportailClient {
    GeoportailClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

fn feature(label: &str, layer: &str, geometry: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "Feature",
        "properties": { "label": label, "layer_name": layer },
        "geometry": geometry
    })
}

#[tokio::test]
async fn test_search_addresses_maps_features() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fulltextsearch"))
        .and(query_param("limit", "5"))
        .and(query_param("layer", "Adresse"))
        .and(query_param("query", "rue de la gare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": [
                feature("1 Rue de la Gare, 1611 Luxembourg", "Adresse",
                    json!({ "type": "Point", "coordinates": [6.13, 49.61] })),
                feature("Rue de la Gare, Esch", "Adresse",
                    json!({ "type": "Polygon", "coordinates": [[[6.1, 49.6], [6.2, 49.7]]] })),
                feature("Gare line", "Adresse",
                    json!({ "type": "LineString", "coordinates": [[6.1, 49.6], [6.2, 49.7]] })),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client.search_addresses("rue de la gare", 5).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].label, "1 Rue de la Gare, 1611 Luxembourg");
    assert_eq!(results[0].value, results[0].label);
    assert_eq!(results[0].coordinates, vec![6.13, 49.61]);
    assert_eq!(results[1].coordinates, vec![6.1, 49.6]);
    assert!(results[2].coordinates.is_empty());
    assert!(!results[2].has_location());
}

#[tokio::test]
async fn test_search_localities_filters_layer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fulltextsearch"))
        .and(query_param("limit", "5"))
        .and(query_param("query", "esch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                feature("Esch-sur-Alzette", "Localité",
                    json!({ "type": "Polygon", "coordinates": [[[5.98, 49.49]]] })),
                feature("Rue d'Esch, Luxembourg", "Adresse",
                    json!({ "type": "Point", "coordinates": [6.1, 49.6] })),
                feature("Esch-sur-Sûre", "Localité",
                    json!({ "type": "Point", "coordinates": [5.93, 49.91] })),
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client.search_localities("esch", 5).await.unwrap();

    let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Esch-sur-Alzette", "Esch-sur-Sûre"]);
    assert_eq!(results[0].coordinates, vec![5.98, 49.49]);
}

#[tokio::test]
async fn test_reverse_geocode_builds_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/reverse"))
        .and(query_param("lon", "6.13"))
        .and(query_param("lat", "49.61"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{
                "number": 12,
                "street": "Rue Example",
                "postal_code": "1234",
                "locality": "Luxembourg",
                "geomlonlat": { "type": "Point", "coordinates": [6.1301, 49.6102] }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let location = client
        .reverse_geocode(Coordinates::new(49.61, 6.13))
        .await
        .unwrap()
        .expect("a location");

    assert_eq!(location.address, "12, Rue Example, L-1234 Luxembourg");
    assert_eq!(location.coordinates, vec![6.1301, 49.6102]);
}

#[tokio::test]
async fn test_reverse_geocode_empty_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "results": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let location = client
        .reverse_geocode(Coordinates::new(0.0, 0.0))
        .await
        .unwrap();

    assert!(location.is_none());
}

#[tokio::test]
async fn test_lookup_postcode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("zip", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "address": "1234,Luxembourg",
                "geom": { "type": "Point", "coordinates": [77000.0, 75000.0] },
                "geomlonlat": { "type": "Point", "coordinates": [6.13, 49.61] }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client.lookup_postcode("1234").await.unwrap().expect("a postcode");

    assert_eq!(postcode.location, "L-1234");
    assert_eq!(postcode.coordinates, vec![6.13, 49.61]);
}

#[tokio::test]
async fn test_lookup_postcode_without_geometry_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "address": "9999", "geom": null }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.lookup_postcode("9999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_http_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fulltextsearch"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_addresses("x", 5).await.unwrap_err();

    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fulltextsearch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_localities("x", 5).await.unwrap_err();

    match err {
        ApiError::Parse { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reverse_geocode_without_results_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "oops" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .reverse_geocode(Coordinates::new(6.13, 49.61))
        .await
        .unwrap_err();

    match err {
        ApiError::Parse { body, .. } => {
            assert_eq!(body.as_deref(), Some(r#"{"error":"oops"}"#));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_postcode_without_results_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "oops" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.lookup_postcode("1234").await.unwrap_err();

    assert!(matches!(err, ApiError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_postcode_with_partial_match_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("zip", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "geom": { "type": "Point" } }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.lookup_postcode("1234").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }), "got {err:?}");

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "address": "1234,Luxembourg", "geom": { "type": "Point" } }]
        })))
        .mount(&server)
        .await;

    let err = client.lookup_postcode("1234").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }), "got {err:?}");
}
