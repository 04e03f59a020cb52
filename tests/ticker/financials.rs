use httpmock::{Method::GET, MockServer};
use serde_json::json;

use crate::common::{TOKEN, client_for, metric_body};

#[tokio::test]
async fn financials_pick_ratios_and_keep_numeric_metrics() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/metric")
            .query_param("symbol", "MSFT")
            .query_param("metric", "all")
            .query_param("token", TOKEN);
        then.status(200).json_body(metric_body("MSFT", 34.21));
    });

    let client = client_for(&server);
    let f = signalist::financials(&client, "MSFT").await.unwrap();

    m.assert();
    assert_eq!(f.symbol, "MSFT");
    assert_eq!(f.pe_ratio, Some(34.21));
    assert_eq!(f.week52_high, Some(260.1));
    assert_eq!(f.beta, Some(1.2));
    assert_eq!(f.pe_formatted().as_deref(), Some("34.2"));
    // The date entry is not numeric and is dropped.
    assert!(!f.metrics.contains_key("52WeekHighDate"));
    assert!((f.metrics["peTTM"] - 35.21).abs() < 1e-9);
}

#[tokio::test]
async fn pe_falls_back_to_ttm() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/stock/metric").query_param("symbol", "X");
        then.status(200)
            .json_body(json!({ "metric": { "peTTM": 12.0 }, "symbol": "X" }));
    });

    let client = client_for(&server);
    let f = signalist::financials(&client, "X").await.unwrap();

    assert_eq!(f.pe_ratio, Some(12.0));
    assert_eq!(f.dividend_yield, None);
}

#[tokio::test]
async fn negative_pe_is_not_displayed() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/stock/metric").query_param("symbol", "LOSS");
        then.status(200)
            .json_body(json!({ "metric": { "peNormalizedAnnual": -4.5 }, "symbol": "LOSS" }));
    });

    let client = client_for(&server);
    let f = signalist::financials(&client, "LOSS").await.unwrap();

    assert_eq!(f.pe_ratio, Some(-4.5));
    assert_eq!(f.pe_formatted(), None);
}
