//! Private-network client and data models for the Vultr v1 API.
//!
//! Provides the typed [`Network`] record and the asynchronous [`NetworkApi`]
//! for creating, destroying, and listing private networks.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::NetworkApi;
pub use models::Network;

/// Convenient result alias sharing the `vultr-core` error type.
pub type Result<T> = vultr_core::Result<T>;
