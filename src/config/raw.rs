use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_with::serde_as;
use url::Url;

use crate::Result;
use crate::error::ConfigError;

use super::defaults::{default_connect_timeout, default_request_timeout};
use super::env::{env_bool, env_duration, env_string};
use super::{Config, HumantimeDuration};

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let mut builder = ::config::Config::builder();
    let path = path.as_ref();
    builder = builder.add_source(::config::File::from(path).required(false));
    builder = builder.add_source(
        ::config::Environment::with_prefix("ZABBIX")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

pub(super) fn parse_url(raw: &str) -> std::result::Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidField {
        field: "server.url",
        message: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidField {
            field: "server.url",
            message: format!("unsupported scheme {other:?}, expected http or https"),
        }),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) server: RawServer,
    #[serde(default)]
    pub(super) http: RawHttp,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawServer {
    pub(super) url: Option<String>,
    pub(super) user: Option<String>,
    pub(super) password: Option<String>,
    pub(super) token: Option<String>,
    #[serde(default)]
    pub(super) log_wire: bool,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawHttp {
    #[serde(default = "default_request_timeout")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) request_timeout: Duration,
    #[serde(default = "default_connect_timeout")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) connect_timeout: Duration,
    #[serde(default)]
    pub(super) insecure_tls: bool,
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(url) = env_string("ZBX_URL")? {
            self.server.url = Some(url);
        }
        if let Some(user) = env_string("ZBX_USER")? {
            self.server.user = Some(user);
        }
        if let Some(password) = env_string("ZBX_PASSWORD")? {
            self.server.password = Some(password);
        }
        if let Some(token) = env_string("ZBX_TOKEN")? {
            self.server.token = Some(token);
        }
        if let Some(log_wire) = env_bool("ZBX_LOG_WIRE")? {
            self.server.log_wire = log_wire;
        }
        if let Some(timeout) = env_duration("ZBX_TIMEOUT")? {
            self.http.request_timeout = timeout;
        }
        if let Some(timeout) = env_duration("ZBX_CONNECT_TIMEOUT")? {
            self.http.connect_timeout = timeout;
        }
        if let Some(insecure) = env_bool("ZBX_INSECURE_TLS")? {
            self.http.insecure_tls = insecure;
        }
        Ok(())
    }

    pub(super) fn validate_and_build(self) -> Result<Config> {
        let url_str = self.server.url.ok_or(ConfigError::MissingField {
            field: "server.url",
        })?;
        let url = parse_url(&url_str)?;

        let user = self.server.user.filter(|user| !user.trim().is_empty());
        let password = self.server.password.filter(|password| !password.is_empty());
        match (&user, &password) {
            (Some(_), None) => {
                return Err(ConfigError::MissingField {
                    field: "server.password",
                }
                .into());
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingField {
                    field: "server.user",
                }
                .into());
            }
            _ => {}
        }
        let token = match self.server.token {
            Some(token) if token.trim().is_empty() => {
                return Err(ConfigError::InvalidField {
                    field: "server.token",
                    message: "token cannot be empty".to_string(),
                }
                .into());
            }
            other => other,
        };

        if self.http.request_timeout.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "http.request_timeout",
                message: "timeout must be greater than zero".to_string(),
            }
            .into());
        }
        if self.http.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "http.connect_timeout",
                message: "timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Config {
            url,
            user,
            password: password.map(Into::into),
            token: token.map(Into::into),
            request_timeout: self.http.request_timeout,
            connect_timeout: self.http.connect_timeout,
            insecure_tls: self.http.insecure_tls,
            log_wire: self.server.log_wire,
        })
    }
}

impl Default for RawHttp {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            insecure_tls: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RawConfig, RawServer};
    use crate::error::{ConfigError, Error};
    use secrecy::ExposeSecret;
    use std::time::Duration;

    fn raw(url: &str) -> RawConfig {
        RawConfig {
            server: RawServer {
                url: Some(url.to_string()),
                ..RawServer::default()
            },
            ..RawConfig::default()
        }
    }

    #[test]
    fn builds_with_credentials() {
        let mut source = raw("http://127.0.0.1/zabbix/api_jsonrpc.php");
        source.server.user = Some("Admin".to_string());
        source.server.password = Some("zabbix".to_string());
        let config = match source.validate_and_build() {
            Ok(config) => config,
            Err(err) => panic!("config should build: {err}"),
        };
        let (user, password) = match config.credentials() {
            Some(pair) => pair,
            None => panic!("credentials should be set"),
        };
        assert_eq!(user, "Admin");
        assert_eq!(password.expose_secret(), "zabbix");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn user_without_password_is_rejected() {
        let mut source = raw("https://zabbix.example.com/api_jsonrpc.php");
        source.server.user = Some("Admin".to_string());
        assert!(matches!(
            source.validate_and_build(),
            Err(Error::Config(ConfigError::MissingField {
                field: "server.password"
            }))
        ));
    }

    #[test]
    fn missing_url_is_reported() {
        assert!(matches!(
            RawConfig::default().validate_and_build(),
            Err(Error::Config(ConfigError::MissingField { field: "server.url" }))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut source = raw("https://zabbix.example.com/api_jsonrpc.php");
        source.http.request_timeout = Duration::ZERO;
        assert!(matches!(
            source.validate_and_build(),
            Err(Error::Config(ConfigError::InvalidField {
                field: "http.request_timeout",
                ..
            }))
        ));
    }

    #[test]
    fn parses_toml_durations() {
        let source: RawConfig = match ::config::Config::builder()
            .add_source(::config::File::from_str(
                "[server]\nurl = \"https://zbx.local/api_jsonrpc.php\"\n[http]\nrequest_timeout = \"30s\"\n",
                ::config::FileFormat::Toml,
            ))
            .build()
            .and_then(|built| built.try_deserialize())
        {
            Ok(source) => source,
            Err(err) => panic!("toml should parse: {err}"),
        };
        assert_eq!(source.http.request_timeout, Duration::from_secs(30));
        assert_eq!(source.http.connect_timeout, Duration::from_secs(5));
    }
}
