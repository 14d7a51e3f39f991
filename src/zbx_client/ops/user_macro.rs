use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::UserMacro;
use super::super::params::Params;
use super::exactly_one;

impl ZbxClient {
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn user_macros_get(&self, mut params: Params) -> Result<Vec<UserMacro>> {
        params.merge_defaults(&[("output", "extend")]);
        let mut macros: Vec<UserMacro> = self.get_records(&params).await?;
        for user_macro in &mut macros {
            user_macro.fill_id();
        }
        Ok(macros)
    }

    /// Global macro by name, e.g. `{$SNMP_COMMUNITY}`.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one macro matches.
    pub async fn user_macro_get_global_by_macro(&self, name: &str) -> Result<UserMacro> {
        let params = Params::new()
            .with("globalmacro", "1")
            .with("filter", Params::new().with("macro", name));
        exactly_one(self.user_macros_get(params).await?)
    }
}
