use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::History;
use super::super::params::Params;

impl ZbxClient {
    /// `history.get`. Pass `history` (value type) and `itemids` to get
    /// anything useful back.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn histories_get(&self, mut params: Params) -> Result<Vec<History>> {
        params.merge_defaults(&[("output", "extend")]);
        self.get_records(&params).await
    }
}
