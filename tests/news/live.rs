use signalist::{FhClientBuilder, NewsBuilder};

#[tokio::test]
#[ignore]
async fn live_personalized_news_smoke() {
    if crate::common::live_key().is_none() {
        return;
    }

    let client = FhClientBuilder::from_env().unwrap().build().unwrap();
    let articles = NewsBuilder::new(&client)
        .symbols(["AAPL", "MSFT"])
        .fetch()
        .await
        .unwrap();

    assert!(articles.len() <= 6);
    for a in &articles {
        assert!(matches!(a.symbol.as_deref(), Some("AAPL" | "MSFT")));
        assert!(!a.headline.is_empty());
        assert!(a.datetime > 1_000_000_000);
    }
}

#[tokio::test]
#[ignore]
async fn live_general_news_smoke() {
    if crate::common::live_key().is_none() {
        return;
    }

    let client = FhClientBuilder::from_env().unwrap().build().unwrap();
    let articles = signalist::fetch_news(&client, None::<&[&str]>).await.unwrap();

    assert!(!articles.is_empty(), "expected general market news");
    assert!(articles.windows(2).all(|w| w[0].datetime >= w[1].datetime));
}
