use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Template;
use super::super::params::Params;
use super::exactly_one;

const TEMPLATE_DEFAULTS: &[(&str, &str)] = &[("output", "extend")];

impl ZbxClient {
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn templates_get(&self, mut params: Params) -> Result<Vec<Template>> {
        params.merge_defaults(TEMPLATE_DEFAULTS);
        self.get_records(&params).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one template matches.
    pub async fn template_get_by_id(&self, id: &str) -> Result<Template> {
        exactly_one(self.templates_get(Params::new().with("templateids", id)).await?)
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one template matches.
    pub async fn template_get_by_host(&self, host: &str) -> Result<Template> {
        let params = Params::new().with("filter", Params::new().with("host", host));
        exactly_one(self.templates_get(params).await?)
    }

    /// Templates linked to any of the hosts.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn templates_get_by_host_ids(&self, ids: &[String]) -> Result<Vec<Template>> {
        self.templates_get(Params::new().with("hostids", ids)).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn templates_create(&self, templates: &mut [Template]) -> Result<()> {
        self.create_records(templates).await
    }

    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn templates_update(&self, templates: &[Template]) -> Result<()> {
        self.update_records::<Template, _>(templates).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn templates_delete(&self, templates: &mut [Template]) -> Result<()> {
        self.delete_records(templates).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn templates_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        self.delete_ids::<Template, _>(ids, ids.len()).await
    }
}
