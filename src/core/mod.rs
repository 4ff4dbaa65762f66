//! Core components of the `findash` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`DashClient`] and its builder.
//! - The primary [`DashError`] type.
//! - Internal networking helpers shared by the fetcher modules.

/// The main client (`DashClient`), builder, cache and retry configuration.
pub mod client;
/// The primary error type (`DashError`) for the crate.
pub mod error;

pub(crate) mod net;
pub(crate) mod summary;

// convenient re-exports so most code can just `use crate::core::DashClient`
pub use client::{Backoff, CacheMode, DashClient, DashClientBuilder, RetryConfig};
pub use error::DashError;
