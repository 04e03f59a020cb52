//! Core components of the `signalist` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FhClient`] and its builder.
//! - The primary [`FhError`] type.
//! - Display formatting shared by quotes and watchlist rows.
//! - Internal networking and caching logic.

/// The main client (`FhClient`), builder, and configuration.
pub mod client;
/// Conversion and formatting helpers.
pub mod conversions;
/// The primary error type (`FhError`) for the crate.
pub mod error;
/// Service traits for the stores this crate reads but does not own.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FhClient`
pub use client::{CacheMode, FhClient, FhClientBuilder, Revalidation, RetryConfig};
pub use error::FhError;
pub use services::{DigestUser, UserDirectory, WatchlistSource};
