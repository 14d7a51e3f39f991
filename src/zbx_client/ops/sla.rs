use std::collections::BTreeMap;

use crate::Result;
use crate::error::ZbxError;

use super::super::client::ZbxClient;
use super::super::models::{ServiceSla, Sla};
use super::super::params::Params;
use super::super::rpc::Decode;

impl ZbxClient {
    /// `service.getsla` for a single service.
    ///
    /// `params` must carry `serviceids` as one id string; the first interval
    /// reported for that service is returned, `None` when there is none.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::InvalidField`] when `serviceids` is missing or
    /// not a string, with [`ZbxError::MissingField`] when the answer has no
    /// entry for the service, and with transport, API and decoding errors
    /// otherwise.
    pub async fn sla_get(&self, mut params: Params) -> Result<Option<Sla>> {
        let service_id = params
            .get("serviceids")
            .and_then(|value| value.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| ZbxError::InvalidField {
                field: "serviceids",
                message: "a single service id string is required".to_string(),
            })?;
        params.merge_defaults(&[("output", "extend")]);

        let mut services: BTreeMap<String, ServiceSla> = self
            .fetch("service.getsla", &params, Decode::Direct, true)
            .await?;
        let service = services
            .remove(&service_id)
            .ok_or(ZbxError::MissingField { field: "sla" })?;
        Ok(service.sla.into_iter().next())
    }
}
