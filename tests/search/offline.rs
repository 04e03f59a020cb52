use httpmock::{Method::GET, MockServer};
use serde_json::json;
use signalist::{CacheMode, SearchBuilder};

use crate::common::{TOKEN, client_for, keyless_client_for, mock_json, mock_status, profile_body};

fn search_body() -> serde_json::Value {
    json!({
        "count": 4,
        "result": [
            { "description": "APPLE INC", "displaySymbol": "AAPL", "symbol": "AAPL", "type": "Common Stock" },
            { "description": "APPLE INC", "displaySymbol": "AAPL.SW", "symbol": "AAPL.SW", "type": "Common Stock" },
            { "description": "no symbol", "displaySymbol": "", "symbol": "", "type": "" },
            { "description": "APPLE HOSPITALITY REIT", "displaySymbol": "APLE", "symbol": "APLE", "type": "REIT" }
        ]
    })
}

#[tokio::test]
async fn query_results_are_mapped_and_capped() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "apple")
            .query_param("token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(search_body());
    });

    let client = client_for(&server);
    let results = SearchBuilder::new(&client)
        .query("  apple ")
        .limit(2)
        .fetch()
        .await
        .unwrap();

    m.assert();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].symbol, "AAPL");
    assert_eq!(results[0].description, "APPLE INC");
    assert_eq!(results[0].kind.as_deref(), Some("Common Stock"));
    assert_eq!(results[1].display_symbol, "AAPL.SW");
}

#[tokio::test]
async fn entries_without_symbol_are_skipped() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "apple");
        then.status(200).json_body(search_body());
    });

    let client = client_for(&server);
    let results = signalist::search(&client, "apple").await.unwrap();

    let symbols: Vec<_> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "AAPL.SW", "APLE"]);
}

#[tokio::test]
async fn query_results_are_cached() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "msft");
        then.status(200).json_body(search_body());
    });

    let client = client_for(&server);
    let _ = signalist::search(&client, "msft").await.unwrap();
    let _ = signalist::search(&client, "msft").await.unwrap();
    m.assert_calls(1);

    let _ = SearchBuilder::new(&client)
        .query("msft")
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await
        .unwrap();
    m.assert_calls(2);
}

#[tokio::test]
async fn search_status_is_an_error() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(429).body("slow down");
    });

    let client = client_for(&server);
    let err = signalist::search(&client, "tsla").await.unwrap_err();
    assert!(matches!(err, signalist::FhError::RateLimited { .. }));
}

#[tokio::test]
async fn blank_query_falls_back_to_popular_symbols() {
    let server = MockServer::start();
    let search = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(search_body());
    });
    let aapl = mock_json(&server, "/stock/profile2", "AAPL", profile_body("Apple Inc", "AAPL", 1.0));
    let msft = mock_status(&server, "/stock/profile2", "MSFT", 500);
    let googl = mock_json(
        &server,
        "/stock/profile2",
        "GOOGL",
        profile_body("Alphabet Inc", "GOOGL", 1.0),
    );

    let client = client_for(&server);
    let results = SearchBuilder::new(&client)
        .query("   ")
        .limit(3)
        .fetch()
        .await
        .unwrap();

    search.assert_calls(0);
    aapl.assert();
    msft.assert();
    googl.assert();

    let symbols: Vec<_> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "GOOGL"]);
    assert_eq!(results[1].description, "Alphabet Inc");
    assert_eq!(results[1].kind.as_deref(), Some("Common Stock"));
    assert_eq!(results[1].exchange.as_deref(), Some("NASDAQ NMS - GLOBAL MARKET"));
}

#[tokio::test]
async fn no_query_uses_default_limit() {
    let server = MockServer::start();
    let any_profile = server.mock(|when, then| {
        when.method(GET).path("/stock/profile2");
        then.status(200).json_body(profile_body("Some Co", "X", 1.0));
    });

    let client = client_for(&server);
    let results = SearchBuilder::new(&client).fetch().await.unwrap();

    any_profile.assert_calls(10);
    assert_eq!(results.len(), 10);
    assert_eq!(results[0].symbol, "AAPL");
}

#[tokio::test]
async fn search_requires_a_key() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({}));
    });

    let client = keyless_client_for(&server);
    assert!(signalist::search(&client, "aapl").await.unwrap_err().is_config());
    assert!(SearchBuilder::new(&client).fetch().await.unwrap_err().is_config());
    any.assert_calls(0);
}
