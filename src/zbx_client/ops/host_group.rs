use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::HostGroup;
use super::super::params::Params;
use super::exactly_one;

const HOST_GROUP_DEFAULTS: &[(&str, &str)] = &[("output", "extend")];

impl ZbxClient {
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn host_groups_get(&self, mut params: Params) -> Result<Vec<HostGroup>> {
        params.merge_defaults(HOST_GROUP_DEFAULTS);
        self.get_records(&params).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one group matches.
    pub async fn host_group_get_by_id(&self, id: &str) -> Result<HostGroup> {
        exactly_one(self.host_groups_get(Params::new().with("groupids", id)).await?)
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one group matches.
    pub async fn host_group_get_by_name(&self, name: &str) -> Result<HostGroup> {
        let params = Params::new().with("filter", Params::new().with("name", name));
        exactly_one(self.host_groups_get(params).await?)
    }

    /// Groups the host belongs to.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn host_groups_get_by_host_id(&self, host_id: &str) -> Result<Vec<HostGroup>> {
        self.host_groups_get(Params::new().with("hostids", host_id))
            .await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn host_groups_create(&self, groups: &mut [HostGroup]) -> Result<()> {
        self.create_records(groups).await
    }

    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn host_groups_update(&self, groups: &[HostGroup]) -> Result<()> {
        self.update_records::<HostGroup, _>(groups).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn host_groups_delete(&self, groups: &mut [HostGroup]) -> Result<()> {
        self.delete_records(groups).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn host_groups_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        self.delete_ids::<HostGroup, _>(ids, ids.len()).await
    }
}
