use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::Result;

use super::client::ZbxClient;
use super::dialect::Dialect;
use super::params::Params;
use super::rpc::Decode;
use super::version::Version;

impl ZbxClient {
    /// Calls `user.login` and stores the returned token on the session.
    ///
    /// The API version is probed without `auth` first and, only if that
    /// failed, again with the new token. Neither probe can fail the login;
    /// the version stays `0.0.0` when both fail.
    ///
    /// # Errors
    ///
    /// Returns an error when `user.login` itself fails.
    pub async fn login(&mut self, user: &str, password: &SecretString) -> Result<SecretString> {
        let probed = self.probe_version(false).await;

        // 5.4 renamed the login parameter.
        let user_key = if self.version.is_at_least(5, 4, 0) {
            "username"
        } else {
            "user"
        };
        let params = Params::new()
            .with(user_key, user)
            .with("password", password.expose_secret());
        let token: String = self
            .fetch("user.login", &params, Decode::Direct, false)
            .await?;
        self.auth = Some(SecretString::from(token.clone()));

        if !probed {
            self.probe_version(true).await;
        }
        info!(user, version = %self.version, "logged in to Zabbix API");
        Ok(SecretString::from(token))
    }

    /// Raw `APIInfo.version` string, fetched without `auth`.
    ///
    /// # Errors
    ///
    /// Returns transport and API errors.
    pub async fn api_version(&self) -> Result<String> {
        self.fetch_version_string(false).await
    }

    /// Fetches and stores the API version.
    ///
    /// Tries without `auth`, then with the session token if one is set.
    ///
    /// # Errors
    ///
    /// Returns the last failure when no attempt produced a parsable version.
    pub async fn discover_version(&mut self) -> Result<Version> {
        let version = match self.fetch_version(false).await {
            Ok(version) => version,
            Err(err) if self.auth.is_none() => return Err(err),
            Err(_) => self.fetch_version(true).await?,
        };
        self.version = version;
        Ok(version)
    }

    /// Discovered version, `0.0.0` until discovery succeeds.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        Dialect::for_version(self.version)
    }

    #[must_use]
    pub const fn is_version_at_least(&self, major: u32, minor: u32, release: u32) -> bool {
        self.version.is_at_least(major, minor, release)
    }

    async fn probe_version(&mut self, with_auth: bool) -> bool {
        match self.fetch_version(with_auth).await {
            Ok(version) => {
                self.version = version;
                true
            }
            Err(err) => {
                warn!(authenticated = with_auth, error = %err, "API version discovery failed");
                false
            }
        }
    }

    async fn fetch_version(&self, with_auth: bool) -> Result<Version> {
        Ok(self.fetch_version_string(with_auth).await?.parse()?)
    }

    async fn fetch_version_string(&self, with_auth: bool) -> Result<String> {
        self.fetch(
            "APIInfo.version",
            &Map::<String, Value>::new(),
            Decode::Direct,
            with_auth,
        )
        .await
    }
}
