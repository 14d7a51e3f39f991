//! Typed client for the Zabbix JSON-RPC API.
//!
//! One [`ZbxClient`](zbx_client::ZbxClient) is one session: it logs in,
//! discovers the server version and picks the protocol
//! [`Dialect`](zbx_client::Dialect) (1.8 "legacy" or 2.0+ "current") that every
//! entity call is rewritten for.
//!
//! ```ignore
//! use secrecy::SecretString;
//! use zabbix_rpc::zbx_client::{Params, ZbxClient};
//!
//! let mut client = ZbxClient::new(url)?;
//! client.login("Admin", &SecretString::from("zabbix")).await?;
//! let hosts = client.hosts_get(Params::new().with("groupids", "2")).await?;
//! ```
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod zbx_client;

pub type Result<T> = std::result::Result<T, error::Error>;
