//! Body of the scheduled news email job: one news feed per user, built from that user's
//! watchlist. Sending is left to the caller.

use serde::Serialize;

use crate::core::{DigestUser, FhClient, FhError, UserDirectory, WatchlistSource};
use crate::news::{NewsArticle, NewsBuilder};

/// The news selected for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDigest {
    pub user: DigestUser,
    pub articles: Vec<NewsArticle>,
    /// `true` when the user had no watchlist symbols and got the general feed.
    pub general_feed: bool,
}

/// Build a digest for every eligible user.
///
/// A user whose watchlist cannot be read is served the general feed, and a user directory
/// that fails counts as having no users. Users with no articles are still returned.
///
/// # Errors
///
/// Returns `FhError::Config` if the client has no API key.
#[tracing::instrument(skip_all, err)]
pub async fn run_news_digest(
    client: &FhClient,
    users: &dyn UserDirectory,
    watchlists: &dyn WatchlistSource,
) -> Result<Vec<NewsDigest>, FhError> {
    client.api_key()?;

    let users = match users.users_for_news_email().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "user directory unavailable; no digests built");
            Vec::new()
        }
    };
    tracing::debug!(count = users.len(), "building news digests");

    let mut digests = Vec::with_capacity(users.len());
    for user in users {
        let symbols = match watchlists.symbols_for(&user.email).await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(user = %user.id, error = %e, "watchlist lookup failed; using general feed");
                Vec::new()
            }
        };
        let general_feed = symbols.iter().all(|s| s.trim().is_empty());

        let articles = NewsBuilder::new(client).symbols(symbols).fetch().await?;

        digests.push(NewsDigest {
            user,
            articles,
            general_feed,
        });
    }

    Ok(digests)
}
