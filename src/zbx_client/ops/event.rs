use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Event;
use super::super::params::Params;

const EVENT_DEFAULTS: &[(&str, &str)] = &[("output", "extend"), ("selectAcknowledges", "extend")];

impl ZbxClient {
    /// `event.get` with acknowledges inlined.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn events_get(&self, mut params: Params) -> Result<Vec<Event>> {
        params.merge_defaults(EVENT_DEFAULTS);
        self.dialect().event_get(&mut params);
        self.get_records(&params).await
    }
}
