#[tokio::test]
#[ignore]
async fn live_search_smoke() {
    if crate::common::live_key().is_none() {
        return;
    }

    let client = signalist::FhClientBuilder::from_env().unwrap().build().unwrap();
    let results = signalist::search(&client, "apple").await.unwrap();

    assert!(!results.is_empty());
    assert!(results.len() <= 10);
    assert!(results.iter().any(|r| r.symbol == "AAPL"));
}
