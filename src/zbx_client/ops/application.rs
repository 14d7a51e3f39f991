use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Application;
use super::super::params::Params;
use super::exactly_one;

const APPLICATION_DEFAULTS: &[(&str, &str)] = &[("output", "extend")];

impl ZbxClient {
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn applications_get(&self, mut params: Params) -> Result<Vec<Application>> {
        params.merge_defaults(APPLICATION_DEFAULTS);
        self.get_records(&params).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one application matches.
    pub async fn application_get_by_id(&self, id: &str) -> Result<Application> {
        exactly_one(
            self.applications_get(Params::new().with("applicationids", id))
                .await?,
        )
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one application matches.
    pub async fn application_get_by_host_id_and_name(
        &self,
        host_id: &str,
        name: &str,
    ) -> Result<Application> {
        let params = Params::new()
            .with("hostids", host_id)
            .with("filter", Params::new().with("name", name));
        exactly_one(self.applications_get(params).await?)
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn applications_create(&self, applications: &mut [Application]) -> Result<()> {
        self.create_records(applications).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn applications_delete(&self, applications: &mut [Application]) -> Result<()> {
        self.delete_records(applications).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn applications_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        self.delete_ids::<Application, _>(ids, ids.len()).await
    }
}
