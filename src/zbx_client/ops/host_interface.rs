use crate::Result;
use crate::error::ZbxError;

use super::super::client::ZbxClient;
use super::super::models::HostInterface;
use super::super::params::Params;

impl ZbxClient {
    /// `hostinterface.get`, which only exists from 2.0.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::UnsupportedVersion`] without calling the server
    /// on older sessions, and with transport, API and decoding errors
    /// otherwise.
    pub async fn host_interfaces_get(&self, mut params: Params) -> Result<Vec<HostInterface>> {
        if !self.dialect().supports_host_interfaces() {
            return Err(ZbxError::UnsupportedVersion {
                operation: "hostinterface.get",
                required: "2.0.0",
                found: self.version().to_string(),
            }
            .into());
        }
        params.merge_defaults(&[("output", "extend")]);
        self.get_records(&params).await
    }

    /// Interfaces of one host, optionally narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// See [`ZbxClient::host_interfaces_get`].
    pub async fn host_interfaces_get_by_host_id(
        &self,
        host_id: &str,
        mut params: Params,
        filter: Option<Params>,
    ) -> Result<Vec<HostInterface>> {
        params.insert("hostids", vec![host_id.to_string()]);
        if let Some(filter) = filter {
            params.insert("filter", filter);
        }
        self.host_interfaces_get(params).await
    }
}
