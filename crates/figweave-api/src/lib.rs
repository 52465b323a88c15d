//! Blocking client for the Figma REST API.
//!
//! figweave only needs one endpoint, `GET /v1/files/:key`, which returns the
//! whole document tree of a file as JSON. [`FigmaClient`] issues that request
//! with the `X-Figma-Token` header and hands back the raw body, leaving
//! deserialization to the caller so the body can also be saved verbatim.
//!
//! # Example
//!
//! ```rust,no_run
//! use figweave_api::{ClientConfig, FetchOptions, FigmaClient};
//!
//! let client = FigmaClient::new(ClientConfig::new("my-token"));
//! let json = client
//!     .fetch_file("AbCdEf123", &FetchOptions::default())
//!     .expect("Failed to fetch file");
//! println!("{} bytes", json.len());
//! ```

mod client;
mod error;

pub use client::{ClientConfig, DEFAULT_BASE_URL, FetchOptions, FigmaClient};
pub use error::Error;
