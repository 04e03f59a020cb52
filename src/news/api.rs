use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::core::{
    FhClient, FhError,
    client::{CacheMode, RetryConfig},
    net,
};
use crate::news::{
    GENERAL_CATEGORY, MAX_ARTICLES, MAX_ROUNDS, WINDOW_DAYS,
    model::{NewsArticle, NewsKind},
    wire::{self, RawArticle},
};

/// Trim, uppercase and drop blank entries. Duplicates are kept.
pub(crate) fn clean_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.as_ref().trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `[as_of - WINDOW_DAYS, as_of]` as `YYYY-MM-DD` strings.
pub(crate) fn date_window(as_of: NaiveDate) -> (String, String) {
    let from = as_of
        .checked_sub_days(Days::new(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    (
        from.format("%Y-%m-%d").to_string(),
        as_of.format("%Y-%m-%d").to_string(),
    )
}

/// Symbol visited in each round: round `i` takes `symbols[i % len]`.
pub(crate) fn round_robin(symbols: &[String]) -> impl Iterator<Item = (usize, &str)> {
    let rounds = if symbols.is_empty() { 0 } else { MAX_ROUNDS };
    (0..rounds).map(|round| (round, symbols[round % symbols.len()].as_str()))
}

async fn fetch_company_news(
    client: &FhClient,
    symbol: &str,
    from: &str,
    to: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<RawArticle>, FhError> {
    let mut url = client.endpoint("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", from)
        .append_pair("to", to);

    let body = net::get_text(client, &url, None, CacheMode::Bypass, retry_override).await?;
    Ok(wire::parse_articles(&body)?)
}

async fn fetch_general_news(
    client: &FhClient,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<RawArticle>, FhError> {
    let mut url = client.endpoint("news")?;
    url.query_pairs_mut().append_pair("category", GENERAL_CATEGORY);

    let body = net::get_text(client, &url, None, CacheMode::Bypass, retry_override).await?;
    Ok(wire::parse_articles(&body)?)
}

/// One article per round, rotating through `symbols`, newest first.
///
/// A round takes the first valid article whose dedup key no earlier round picked, so a
/// story shared by two symbols, or a symbol listed twice, is never returned twice. A round
/// with nothing new contributes no article.
pub(crate) async fn personalized(
    client: &FhClient,
    symbols: &[String],
    as_of: NaiveDate,
    retry_override: Option<&RetryConfig>,
) -> Vec<NewsArticle> {
    let (from, to) = date_window(as_of);
    let mut seen: HashSet<String> = HashSet::new();
    let mut picked: Vec<(RawArticle, &str, usize)> = Vec::with_capacity(MAX_ROUNDS);

    for (round, symbol) in round_robin(symbols) {
        let raw = match fetch_company_news(client, symbol, &from, &to, retry_override).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(symbol, round, error = %e, "company news fetch failed; skipping round");
                continue;
            }
        };

        // First valid article not already taken by an earlier round.
        let choice = raw.into_iter().find_map(|a| {
            if !a.is_valid() {
                return None;
            }
            let key = a.dedup_key()?;
            (!seen.contains(&key)).then_some((a, key))
        });

        match choice {
            Some((article, key)) => {
                seen.insert(key);
                picked.push((article, symbol, round));
            }
            None => tracing::debug!(symbol, round, "no usable article this round"),
        }
    }

    let mut articles: Vec<NewsArticle> = picked
        .into_iter()
        .map(|(a, symbol, round)| a.normalize(NewsKind::Company, Some(symbol), round))
        .collect();
    sort_newest_first(&mut articles);
    articles.truncate(MAX_ARTICLES);
    articles
}

/// The general category feed, deduplicated. Any failure yields an empty list.
pub(crate) async fn general(
    client: &FhClient,
    rank_before_truncate: bool,
    retry_override: Option<&RetryConfig>,
) -> Vec<NewsArticle> {
    match fetch_general_news(client, retry_override).await {
        Ok(raw) => select_general(raw, rank_before_truncate),
        Err(e) => {
            tracing::warn!(error = %e, "general news fetch failed; returning no articles");
            Vec::new()
        }
    }
}

/// Validate, dedup (first occurrence wins), bound to [`MAX_ARTICLES`] and order newest first.
///
/// By default the first `MAX_ARTICLES` unique articles are kept in feed order and only then
/// sorted, so an older article early in the feed can outrank a newer one further down.
/// `rank_before_truncate` sorts the whole unique set first instead.
pub(crate) fn select_general(raw: Vec<RawArticle>, rank_before_truncate: bool) -> Vec<NewsArticle> {
    let mut seen: HashSet<String> = HashSet::new();
    let unique = raw.into_iter().filter(|a| {
        a.is_valid()
            && a
                .dedup_key()
                .is_some_and(|key| seen.insert(key))
    });

    let mut articles: Vec<NewsArticle> = unique
        .enumerate()
        .map(|(i, a)| a.normalize(NewsKind::General, None, i))
        .collect();

    if rank_before_truncate {
        sort_newest_first(&mut articles);
        articles.truncate(MAX_ARTICLES);
    } else {
        articles.truncate(MAX_ARTICLES);
        sort_newest_first(&mut articles);
    }
    articles
}

// Stable, so equal timestamps keep their round/feed order.
fn sort_newest_first(articles: &mut [NewsArticle]) {
    articles.sort_by(|a, b| b.datetime.cmp(&a.datetime));
}
