#![allow(dead_code)]

use chrono::NaiveDate;
use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{Value, json};
use signalist::FhClient;
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "test-token";

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn base(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

/// A client pointed at `server` with caching on and a test key.
pub fn client_for(server: &MockServer) -> FhClient {
    FhClient::builder()
        .api_key(TOKEN)
        .base_url(base(server))
        .build()
        .unwrap()
}

/// Same as `client_for` but without an API key.
pub fn keyless_client_for(server: &MockServer) -> FhClient {
    FhClient::builder().base_url(base(server)).build().unwrap()
}

/// Fixed reference date so the personalized window is deterministic.
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub const FROM: &str = "2025-03-05";
pub const TO: &str = "2025-03-10";

pub fn article(id: i64, headline: &str, datetime: i64) -> Value {
    json!({
        "category": "company",
        "datetime": datetime,
        "headline": headline,
        "id": id,
        "image": "",
        "related": "",
        "source": "Reuters",
        "summary": format!("  summary of {headline}  "),
        "url": format!("https://news.example.com/{id}")
    })
}

pub fn mock_company_news<'a>(server: &'a MockServer, symbol: &'a str, body: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/company-news")
            .query_param("symbol", symbol)
            .query_param("from", FROM)
            .query_param("to", TO)
            .query_param("token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

pub fn mock_company_news_status<'a>(
    server: &'a MockServer,
    symbol: &'a str,
    status: u16,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/company-news")
            .query_param("symbol", symbol);
        then.status(status).body("upstream unavailable");
    })
}

pub fn mock_general_news(server: &MockServer, body: Value) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/news")
            .query_param("category", "general")
            .query_param("token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

pub fn mock_json<'a>(
    server: &'a MockServer,
    path: &'a str,
    symbol: &'a str,
    body: Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("symbol", symbol)
            .query_param("token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

pub fn mock_status<'a>(
    server: &'a MockServer,
    path: &'a str,
    symbol: &'a str,
    status: u16,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path).query_param("symbol", symbol);
        then.status(status).body("error");
    })
}

pub fn quote_body(price: f64, dp: f64) -> Value {
    json!({ "c": price, "d": price * dp / 100.0, "dp": dp, "h": price + 1.0, "l": price - 1.0,
            "o": price, "pc": price - 0.5, "t": 1_741_600_000 })
}

pub fn profile_body(name: &str, ticker: &str, cap_millions: f64) -> Value {
    json!({
        "country": "US", "currency": "USD", "exchange": "NASDAQ NMS - GLOBAL MARKET",
        "finnhubIndustry": "Technology", "ipo": "1980-12-12", "logo": "",
        "marketCapitalization": cap_millions, "name": name, "shareOutstanding": 15000.0,
        "ticker": ticker, "weburl": "https://example.com/"
    })
}

pub fn metric_body(symbol: &str, pe: f64) -> Value {
    json!({
        "metric": { "peNormalizedAnnual": pe, "peTTM": pe + 1.0, "52WeekHigh": 260.1,
                    "52WeekLow": 164.08, "beta": 1.2, "52WeekHighDate": "2024-12-26" },
        "metricType": "all",
        "symbol": symbol
    })
}

pub fn live_key() -> Option<String> {
    std::env::var("FINNHUB_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}
