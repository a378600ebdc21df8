//! Collection API tests using wiremock.
//!
//! These tests drive the real `MuseumClient` + `ReqwestHttpClient` stack
//! against a local mock server and check the request shape (path, API key,
//! image filter, query encoding) and the error mapping.

mod common;

use common::{artwork_json, client_for, envelope, exhibition_json, TEST_API_KEY};
use museum_browser::error::CollectionError;
use museum_browser::models::ArtworkId;
use museum_browser::source::CollectionSource;
use museum_browser::traits::HttpError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_exhibitions_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exhibition"))
        .and(query_param("apikey", TEST_API_KEY))
        .and(query_param("hasimage", "1"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
            exhibition_json(1, "Edo Prints"),
            exhibition_json(2, "Bauhaus"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let exhibitions = client.list_exhibitions().await.expect("exhibitions load");

    assert_eq!(exhibitions.len(), 2);
    assert_eq!(exhibitions[0].title, "Edo Prints");
    assert_eq!(exhibitions[1].exhibitionid, 20);
    assert!(exhibitions[0].images.is_empty());
    assert_eq!(exhibitions[0].formatted_begin_date(), "Jan 12");
}

#[tokio::test]
async fn test_list_artworks_uses_exhibition_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("exhibition", "6203"))
        .and(query_param("hasimage", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(vec![artwork_json(11, "Bowl"), artwork_json(12, "Jar")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let artworks = client
        .list_artworks_for_exhibition(6203)
        .await
        .expect("artworks load");

    let ids: Vec<_> = artworks.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![ArtworkId(11), ArtworkId(12)]);
}

#[tokio::test]
async fn test_search_percent_encodes_query() {
    let mock_server = MockServer::start().await;

    // wiremock matches against the decoded value
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("q", "blue & white"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![artwork_json(
            21,
            "Blue and White Vase",
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search_artworks("blue & white").await.expect("search");

    assert_eq!(results.len(), 1);
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap().contains("q=blue%20%26%20white"));
}

#[tokio::test]
async fn test_search_with_no_records_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"info": {}, "records": null})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.search_artworks("zzzz").await.expect("search");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_get_artwork_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object/299843"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(artwork_json(299843, "Bowl")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let artwork = client.get_artwork(ArtworkId(299843)).await.expect("artwork");

    assert_eq!(artwork.title, "Bowl");
    assert_eq!(artwork.artist_line().as_deref(), Some("Test Artist (Artist)"));
    assert_eq!(artwork.primary_image_url(), Some("https://nrs.example/299843"));
}

#[tokio::test]
async fn test_get_artwork_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object/404404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Not Found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_artwork(ArtworkId(404404)).await;

    assert_eq!(
        result,
        Err(CollectionError::NotFound {
            id: ArtworkId(404404)
        })
    );
}

#[tokio::test]
async fn test_list_404_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exhibition"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.list_exhibitions().await;

    match result {
        Err(CollectionError::Transport(HttpError::ServerError { status, message })) => {
            assert_eq!(status, 404);
            assert_eq!(message, "missing");
        }
        other => panic!("Expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_artwork(ArtworkId(1)).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.error_code(), "TRANSPORT_STATUS");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exhibition"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_exhibitions().await.unwrap_err();

    assert!(matches!(err, CollectionError::Decode { .. }));
    assert_eq!(err.error_code(), "DECODE");
}

#[tokio::test]
async fn test_missing_required_field_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 5})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_artwork(ArtworkId(5)).await.unwrap_err();
    assert!(matches!(err, CollectionError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);
    drop(mock_server);

    let err = client.list_exhibitions().await.unwrap_err();
    assert!(err.is_transport(), "Expected transport error, got {:?}", err);
}
