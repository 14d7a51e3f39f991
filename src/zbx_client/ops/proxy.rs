use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Proxy;
use super::super::params::Params;
use super::exactly_one;

impl ZbxClient {
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn proxies_get(&self, mut params: Params) -> Result<Vec<Proxy>> {
        params.merge_defaults(&[("output", "extend")]);
        self.get_records(&params).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one proxy matches.
    pub async fn proxy_get_by_id(&self, id: &str) -> Result<Proxy> {
        exactly_one(self.proxies_get(Params::new().with("proxyids", id)).await?)
    }
}
