//! Async HTTP client for the Discord Extreme List API.
//!
//! Posts bot statistics and fetches public records (website stats and
//! health, bots, servers, templates, users) as raw JSON.
//!
//! # Example
//!
//! ```no_run
//! use dexl_client::{DexlClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = DexlClient::builder()
//!     .token("secret")
//!     .build()?;
//!
//! // Post guild and shard counts
//! client.bots().post_stats("123", 50, Some(4)).await?;
//!
//! // Fetch public records
//! let stats = client.website().stats().await?;
//! let user = client.users().get("456").await?;
//! println!("{} {}", stats, user);
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Only stats posts are checked for an `error` flag in the response body.
//! Read operations return whatever JSON the service sends back; transport
//! and parse failures surface as [`Error::Http`] or [`Error::Json`].

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, DexlClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use types::*;
