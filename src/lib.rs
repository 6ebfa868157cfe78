//! Async client for the BoardGameGeek XML API2.
//!
//! One method per endpoint, returning a typed result object; responses
//! are parsed into a generic XML tree first, so schema drift on the
//! server side surfaces as missing fields, not parse failures.
//!
//! ```ignore
//! let client = bgg_api::BggClient::new()?;
//! let results = client.search("Burgund", &[("type", "boardgame")]).await?;
//! for item in results.items() {
//!     println!("{:?}", item.id());
//! }
//! ```

// Export modules for each part of the client
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod result;
pub mod xml;

// Re-export key types for convenience
pub use client::BggClient;
pub use config::{ClientConfig, BGG_XMLAPI2_URL};
pub use endpoint::{Endpoint, Request};
pub use error::{BggError, Result};
pub use result::{Collection, Family, Guild, Hot, Plays, Search, User};
pub use xml::Element;
