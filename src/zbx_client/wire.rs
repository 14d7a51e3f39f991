use tracing::debug;

use crate::error::ZbxError;

/// Sink for the raw text exchanged with the server.
///
/// `request` runs before the HTTP call, so a request is recorded even when the
/// call then fails. `response` gets any body the server sent back, error
/// statuses included.
pub trait WireLog: Send + Sync {
    fn request(&self, id: u64, body: &str);
    fn response(&self, id: u64, body: &str);
    fn failure(&self, id: u64, error: &ZbxError);
}

/// Writes wire traffic to `tracing` at debug level, target `zabbix_rpc::wire`.
///
/// Request bodies include the `auth` token.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingWireLog;

impl WireLog for TracingWireLog {
    fn request(&self, id: u64, body: &str) {
        debug!(target: "zabbix_rpc::wire", id, body, "request");
    }

    fn response(&self, id: u64, body: &str) {
        debug!(target: "zabbix_rpc::wire", id, body, "response");
    }

    fn failure(&self, id: u64, error: &ZbxError) {
        debug!(target: "zabbix_rpc::wire", id, error = %error, "transport failure");
    }
}
