use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::error::Error as ZabbixRpcError;

mod defaults;
mod env;
mod raw;
mod serde;

use self::serde::HumantimeDuration;

/// Settings for building a [`ZbxClient`](crate::zbx_client::ZbxClient).
///
/// Either `user` and `password` (for `user.login`) or a pre-issued `token`
/// may be set; neither is required for unauthenticated calls such as
/// `APIInfo.version`.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub token: Option<SecretString>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Accept invalid TLS certificates.
    pub insecure_tls: bool,
    /// Install [`TracingWireLog`](crate::zbx_client::TracingWireLog).
    pub log_wire: bool,
}

impl Config {
    /// Load configuration from a file and the environment.
    ///
    /// The file is optional. `ZABBIX__SERVER__URL` style variables override
    /// it, and the `ZBX_*` shortcuts override both.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be read, parsed,
    /// when environment overrides are invalid, or when the resulting values
    /// fail validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(ZabbixRpcError::from)?;
        raw.apply_env_overrides().map_err(ZabbixRpcError::from)?;
        raw.validate_and_build()
    }

    /// Defaults for everything but the endpoint.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `url` is not an http(s) URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = raw::parse_url(url)?;
        Ok(Self {
            url,
            user: None,
            password: None,
            token: None,
            request_timeout: defaults::default_request_timeout(),
            connect_timeout: defaults::default_connect_timeout(),
            insecure_tls: false,
            log_wire: false,
        })
    }

    /// `(user, password)` when both are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Some((user.as_str(), password)),
            _ => None,
        }
    }
}
