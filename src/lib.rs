//! Client SDK for the IBM Cloud Direct Link v1 REST API.
//!
//! Typed request/response models and one async method per REST operation:
//! gateways, virtual connections, route filters, AS prepends, route reports,
//! MACsec configuration and CAKs, ports, and offering-type metadata.
//!
//! ```no_run
//! use directlink::{ClientConfig, DirectLink};
//!
//! #[tokio::main]
//! async fn main() -> directlink::Result<()> {
//!     let client = DirectLink::new(ClientConfig::from_env()?)?;
//!     for gateway in client.list_gateways().await?.gateways {
//!         println!("{} ({})", gateway.name, gateway.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_VERSION};
pub use crate::core::{DirectLink, ListPortsOptions, PortsPager, WithEtag};
pub use crate::utils::auth::{Authenticator, BasicAuth, BearerAuth, NoAuth};
pub use crate::utils::error::{DirectLinkError, Result};
