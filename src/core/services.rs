use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::core::FhError;

/// Boxed future returned by the service traits so they stay object-safe.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FhError>> + Send + 'a>>;

/// A registered user who should receive the news digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestUser {
    /// Stable user identifier from the auth provider.
    pub id: String,
    /// Display name used in the greeting.
    pub name: String,
    /// Delivery address.
    pub email: String,
}

/// Source of users eligible for the news email.
///
/// Implemented by whatever owns the user store; the crate only consumes it.
pub trait UserDirectory: Send + Sync {
    /// Users that have both a name and an email address.
    fn users_for_news_email(&self) -> ServiceFuture<'_, Vec<DigestUser>>;
}

/// Source of stored watchlist symbols for a user.
pub trait WatchlistSource: Send + Sync {
    /// The symbols on the watchlist of the user with this email. Unknown users yield an empty list.
    fn symbols_for<'a>(&'a self, email: &'a str) -> ServiceFuture<'a, Vec<String>>;
}
