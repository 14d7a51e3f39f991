//! Zabbix JSON-RPC session, envelope codec and entity operations.

mod client;
pub(crate) mod de;
mod dialect;
pub mod models;
mod ops;
mod params;
mod rpc;
mod session;
mod version;
mod wire;

pub use client::ZbxClient;
pub use dialect::Dialect;
pub use models::*;
pub use params::{ParamValue, Params};
pub use rpc::{Decode, Response, RpcError};
pub use version::Version;
pub use wire::{TracingWireLog, WireLog};
