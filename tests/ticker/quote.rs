use httpmock::MockServer;
use serde_json::json;
use signalist::{FhError, Ticker};

use crate::common::{client_for, keyless_client_for, mock_json, mock_status, quote_body};

#[tokio::test]
async fn quote_maps_short_field_names() {
    let server = MockServer::start();
    let m = mock_json(&server, "/quote", "AAPL", quote_body(189.84, 1.25));

    let client = client_for(&server);
    let q = Ticker::new(&client, "aapl").quote().await.unwrap();

    m.assert();
    assert_eq!(q.symbol, "AAPL");
    assert!((q.current - 189.84).abs() < 1e-9);
    assert_eq!(q.percent_change, Some(1.25));
    assert_eq!(q.timestamp, Some(1_741_600_000));
    assert_eq!(q.price_formatted(), "$189.84");
    assert_eq!(q.change_formatted().as_deref(), Some("+1.25%"));
}

#[tokio::test]
async fn all_zero_quote_means_unknown_symbol() {
    let server = MockServer::start();
    let _m = mock_json(
        &server,
        "/quote",
        "NOPE",
        json!({ "c": 0, "d": null, "dp": null, "h": 0, "l": 0, "o": 0, "pc": 0, "t": 0 }),
    );

    let client = client_for(&server);
    let err = signalist::quote(&client, "NOPE").await.unwrap_err();

    match err {
        FhError::NotFound { url } => {
            assert!(url.contains("symbol=NOPE"));
            assert!(!url.contains("token"), "token leaked into error: {url}");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn status_codes_map_to_error_variants() {
    let server = MockServer::start();
    let _a = mock_status(&server, "/quote", "LIMIT", 429);
    let _b = mock_status(&server, "/quote", "DOWN", 503);
    let _c = mock_status(&server, "/quote", "AUTH", 401);

    let client = client_for(&server);

    assert!(matches!(
        signalist::quote(&client, "LIMIT").await,
        Err(FhError::RateLimited { .. })
    ));
    assert!(matches!(
        signalist::quote(&client, "DOWN").await,
        Err(FhError::ServerError { status: 503, .. })
    ));
    assert!(matches!(
        signalist::quote(&client, "AUTH").await,
        Err(FhError::Status { status: 401, .. })
    ));
}

#[tokio::test]
async fn quote_without_key_is_config_error() {
    let server = MockServer::start();
    let m = mock_json(&server, "/quote", "AAPL", quote_body(1.0, 0.0));

    let client = keyless_client_for(&server);
    let err = signalist::quote(&client, "AAPL").await.unwrap_err();

    assert!(err.is_config());
    m.assert_calls(0);
}
