use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Trigger;
use super::super::params::Params;
use super::exactly_one;

const TRIGGER_DEFAULTS: &[(&str, &str)] = &[
    ("output", "extend"),
    ("expandExpression", "extend"),
    ("expandDescription", "flag"),
    ("selectFunctions", "extend"),
];

impl ZbxClient {
    /// `trigger.get` with expanded expression and description.
    ///
    /// On 1.8 servers a value of `2` (unknown) comes back as
    /// [`TriggerValue::Ok`](super::super::models::TriggerValue::Ok) with
    /// [`TriggerValueFlags::Unknown`](super::super::models::TriggerValueFlags::Unknown).
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn triggers_get(&self, mut params: Params) -> Result<Vec<Trigger>> {
        let dialect = self.dialect();
        params.merge_defaults(TRIGGER_DEFAULTS);
        dialect.trigger_get(&mut params);
        let mut triggers: Vec<Trigger> = self.get_records(&params).await?;
        dialect.trigger_results(&mut triggers);
        Ok(triggers)
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one trigger matches.
    pub async fn trigger_get_by_id(&self, id: &str) -> Result<Trigger> {
        exactly_one(self.triggers_get(Params::new().with("triggerids", id)).await?)
    }
}
