use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::{Host, HostGroup, HostId};
use super::super::params::Params;
use super::{clear_ids, exactly_one, record_ids};

const HOST_DEFAULTS: &[(&str, &str)] = &[
    ("output", "extend"),
    ("selectGroups", "extend"),
    ("selectInterfaces", "extend"),
];

impl ZbxClient {
    /// `host.get` with groups and interfaces inlined unless `params` says
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn hosts_get(&self, mut params: Params) -> Result<Vec<Host>> {
        params.merge_defaults(HOST_DEFAULTS);
        self.dialect().host_get(&mut params);
        self.get_records(&params).await
    }

    /// # Errors
    ///
    /// See [`ZbxClient::hosts_get`].
    pub async fn hosts_get_by_host_group_ids(&self, ids: &[String]) -> Result<Vec<Host>> {
        self.hosts_get(Params::new().with("groupids", ids)).await
    }

    /// # Errors
    ///
    /// See [`ZbxClient::hosts_get`].
    pub async fn hosts_get_by_host_groups(&self, groups: &[HostGroup]) -> Result<Vec<Host>> {
        let ids: Vec<String> = groups.iter().map(|group| group.group_id.clone()).collect();
        self.hosts_get_by_host_group_ids(&ids).await
    }

    /// # Errors
    ///
    /// See [`ZbxClient::hosts_get`].
    pub async fn hosts_get_by_template_ids(&self, ids: &[String]) -> Result<Vec<Host>> {
        self.hosts_get(Params::new().with("templateids", ids)).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one host matches.
    pub async fn host_get_by_id(&self, id: &str) -> Result<Host> {
        exactly_one(self.hosts_get(Params::new().with("hostids", id)).await?)
    }

    /// Looks a host up by its technical name.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one host matches.
    pub async fn host_get_by_host(&self, host: &str) -> Result<Host> {
        let params = Params::new().with("filter", Params::new().with("host", host));
        exactly_one(self.hosts_get(params).await?)
    }

    /// `host.create`; sets `host_id` on every host.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch),
    /// leaving the hosts untouched, when the server confirms a different
    /// number of ids.
    pub async fn hosts_create(&self, hosts: &mut [Host]) -> Result<()> {
        self.create_records(hosts).await
    }

    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn hosts_update(&self, hosts: &[Host]) -> Result<()> {
        self.update_records::<Host, _>(hosts).await
    }

    /// `host.delete`; clears `host_id` on every host once the server confirmed
    /// all of them.
    ///
    /// # Errors
    ///
    /// See [`ZbxClient::hosts_delete_by_ids`].
    pub async fn hosts_delete(&self, hosts: &mut [Host]) -> Result<()> {
        let ids = record_ids(hosts);
        self.hosts_delete_by_ids(&ids).await?;
        clear_ids(hosts);
        Ok(())
    }

    /// Servers before 2.4 expect `[{"hostid": ..}]` instead of plain ids.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn hosts_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        if self.is_version_at_least(2, 4, 0) {
            return self.delete_ids::<Host, _>(ids, ids.len()).await;
        }
        let objects: Vec<HostId> = ids.iter().map(|id| HostId::from(id.as_str())).collect();
        self.delete_ids::<Host, _>(&objects, ids.len()).await
    }
}
