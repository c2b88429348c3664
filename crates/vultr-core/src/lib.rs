//! # vultr-core
//!
//! Core types and utilities for working with the Vultr v1 API.
//!
//! This crate provides foundational types, error handling, and the HTTP
//! request executor used by the per-resource client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status mapping
//! - [`client`] - Request executor trait and the `reqwest`-backed client
//! - [`params`] - Form parameter assembly helpers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod params;

// Re-export commonly used types
pub use client::{RequestExecutor, VultrClient, VultrClientBuilder};
pub use error::{Error, Result};
