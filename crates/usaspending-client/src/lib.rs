//! Typed client for the USAspending v2 REST API
//!
//! This crate wraps the public spending-data API at
//! `https://api.usaspending.gov/api/v2` with one async method per endpoint,
//! each returning a strongly-shaped response.
//!
//! # Features
//!
//! - **Typed responses**: every scalar is an `Option`, so a field the service
//!   left out or sent as `null` is never confused with a zero value
//! - **Opaque fields kept verbatim**: heterogeneous fields are `serde_json::Value`
//! - **Bring your own transport**: pass a pre-built `reqwest::Client` for
//!   proxies, custom TLS or middleware
//! - **One error type**: transport and decode failures carry the operation name
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use usaspending_client::UsaSpendingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UsaSpendingClient::new(Duration::from_secs(30))?;
//!
//!     let agency = client.agency().get("020").await?;
//!     println!("{}", agency.name.unwrap_or_default());
//!
//!     let resources = client.agency().budgetary_resources("020").await?;
//!     if let Some(fy) = resources.year(2024) {
//!         println!("FY2024 obligated: {:?}", fy.agency_total_obligated);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::UsaSpendingClient;
pub use config::{ClientConfig, USASPENDING_BASE_URL};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::UsaSpendingClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{AgencyApi, AgencyEndpoint};
    pub use crate::error::{ApiError, ApiResult};
}
