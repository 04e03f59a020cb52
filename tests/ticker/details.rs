use httpmock::MockServer;
use signalist::Ticker;

use crate::common::{
    client_for, keyless_client_for, metric_body, mock_json, mock_status, profile_body, quote_body,
};

#[tokio::test]
async fn details_join_all_three_parts() {
    let server = MockServer::start();
    let q = mock_json(&server, "/quote", "NVDA", quote_body(1_120.5, -2.3));
    let p = mock_json(
        &server,
        "/stock/profile2",
        "NVDA",
        profile_body("NVIDIA Corp", "NVDA", 310_200.0),
    );
    let f = mock_json(&server, "/stock/metric", "NVDA", metric_body("NVDA", 58.77));

    let client = client_for(&server);
    let d = Ticker::new(&client, "nvda").details().await.unwrap();

    q.assert();
    p.assert();
    f.assert();
    assert_eq!(d.symbol, "NVDA");
    assert_eq!(d.company, "NVIDIA Corp");
    assert_eq!(d.price_formatted().as_deref(), Some("$1,120.50"));
    assert_eq!(d.change_formatted().as_deref(), Some("-2.30%"));
    assert_eq!(d.market_cap_formatted().as_deref(), Some("$310.20B"));
    assert_eq!(d.pe_formatted().as_deref(), Some("58.8"));
}

#[tokio::test]
async fn failing_parts_are_isolated() {
    let server = MockServer::start();
    let _q = mock_json(&server, "/quote", "AMD", quote_body(101.0, 0.5));
    let _p = mock_status(&server, "/stock/profile2", "AMD", 500);
    let _f = mock_status(&server, "/stock/metric", "AMD", 429);

    let client = client_for(&server);
    let d = Ticker::new(&client, "AMD").details().await.unwrap();

    assert!(d.quote.is_some());
    assert!(d.profile.is_none());
    assert!(d.financials.is_none());
    // Without a profile the company name falls back to the symbol.
    assert_eq!(d.company, "AMD");
    assert_eq!(d.market_cap_formatted(), None);
    assert_eq!(d.price_formatted().as_deref(), Some("$101.00"));
}

#[tokio::test]
async fn details_need_a_key() {
    let server = MockServer::start();
    let client = keyless_client_for(&server);
    let err = Ticker::new(&client, "AMD").details().await.unwrap_err();
    assert!(err.is_config());
}
