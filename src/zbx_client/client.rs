use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::value::RawValue;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::Result;
use crate::config::Config;
use crate::error::{ConfigError, ZbxError};

use super::rpc::{self, Decode, RpcRequest, Response};
use super::version::Version;
use super::wire::{TracingWireLog, WireLog};

const CORRELATION_HEADER: &str = "x-correlation-id";
const JSON_RPC: &str = "application/json-rpc";
const AGENT: &str = concat!("zabbix-rpc/", env!("CARGO_PKG_VERSION"));
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One Zabbix API session.
///
/// Entity calls take `&self` and may run concurrently; request ids come from
/// an atomic counter. [`ZbxClient::login`] takes `&mut self` because it
/// stores the token and the discovered version.
pub struct ZbxClient {
    http: reqwest::Client,
    url: Url,
    pub(super) auth: Option<SecretString>,
    next_id: AtomicU64,
    pub(super) version: Version,
    wire_log: Option<Arc<dyn WireLog>>,
}

impl ZbxClient {
    /// Session with a default HTTP client (10s request, 5s connect timeout).
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not http(s) or the HTTP client
    /// cannot be built.
    pub fn new(url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|source| ZbxError::Client { source })?;
        Self::with_http_client(url, http)
    }

    /// Session over a caller-built HTTP client.
    ///
    /// TLS verification, proxies and timeouts are whatever `http` was built
    /// with.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not http(s).
    pub fn with_http_client(url: Url, http: reqwest::Client) -> Result<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidField {
                field: "server.url",
                message: format!("unsupported scheme {:?}", url.scheme()),
            }
            .into());
        }
        Ok(Self {
            http,
            url,
            auth: None,
            next_id: AtomicU64::new(0),
            version: Version::default(),
            wire_log: None,
        })
    }

    /// Session built from loaded configuration.
    ///
    /// A configured token is installed as the session token; `user` and
    /// `password` are left to the caller's [`ZbxClient::login`].
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(30));
        if config.insecure_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder
            .build()
            .map_err(|source| ZbxError::Client { source })?;

        let mut client = Self::with_http_client(config.url.clone(), http)?;
        client.auth.clone_from(&config.token);
        if config.log_wire {
            client.set_wire_log(Arc::new(TracingWireLog));
        }
        Ok(client)
    }

    /// Use a pre-issued API token instead of logging in.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.auth = Some(token);
        self
    }

    /// Skip version discovery for a server whose version is already known.
    #[must_use]
    pub const fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_wire_log(mut self, sink: Arc<dyn WireLog>) -> Self {
        self.wire_log = Some(sink);
        self
    }

    pub fn set_wire_log(&mut self, sink: Arc<dyn WireLog>) {
        self.wire_log = Some(sink);
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Token sent as `auth`, if logged in.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&SecretString> {
        self.auth.as_ref()
    }

    /// Sends a request and returns the whole envelope.
    ///
    /// An error object in the answer is not a failure here; inspect
    /// [`Response::error`] or use [`ZbxClient::call_with_error`].
    ///
    /// # Errors
    ///
    /// Returns transport and envelope decoding errors.
    pub async fn call<P>(&self, method: &str, params: &P) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        let body = self.send(method, params, true).await?;
        Ok(rpc::parse_response(&body)?)
    }

    /// Like [`ZbxClient::call`], but an error object fails the call.
    ///
    /// # Errors
    ///
    /// Returns [`ZbxError::Api`] when the server answered with an error, and
    /// transport or decoding errors otherwise.
    pub async fn call_with_error<P>(&self, method: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        Ok(self.call(method, params).await?.into_result()?)
    }

    /// Sends `params` verbatim as the request's `params` member.
    ///
    /// # Errors
    ///
    /// Returns [`ZbxError::Json`] without sending anything when `params` is
    /// not valid JSON, and transport or decoding errors otherwise.
    pub async fn call_raw(&self, method: &str, params: &str) -> Result<Response> {
        let params =
            RawValue::from_string(params.to_string()).map_err(|err| ZbxError::json(&err))?;
        self.call(method, &*params).await
    }

    pub(crate) async fn fetch<T, P>(
        &self,
        method: &str,
        params: &P,
        strategy: Decode,
        with_auth: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = self.send(method, params, with_auth).await?;
        Ok(rpc::decode(&body, strategy)?)
    }

    async fn send<P>(
        &self,
        method: &str,
        params: &P,
        with_auth: bool,
    ) -> std::result::Result<Vec<u8>, ZbxError>
    where
        P: Serialize + ?Sized,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let auth = if with_auth {
            self.auth.as_ref().map(|token| token.expose_secret())
        } else {
            None
        };
        let payload = serde_json::to_vec(&RpcRequest::new(method, params, auth, id))
            .map_err(|err| ZbxError::json(&err))?;

        if let Some(sink) = &self.wire_log {
            sink.request(id, &String::from_utf8_lossy(&payload));
        }
        let correlation_id = Uuid::now_v7().to_string();
        let started = Instant::now();
        let exchanged = self.exchange(&correlation_id, payload).await;
        if let Some(sink) = &self.wire_log {
            match &exchanged {
                Ok((_, body)) => sink.response(id, &String::from_utf8_lossy(body)),
                Err(err) => sink.failure(id, err),
            }
        }

        let (status, body) = exchanged?;
        if !status.is_success() {
            return Err(ZbxError::HttpStatus { status });
        }
        debug!(
            method,
            id,
            %correlation_id,
            latency_ms = started.elapsed().as_millis(),
            "zabbix call completed"
        );
        Ok(body)
    }

    /// Posts `payload` and reads the body whatever the status.
    async fn exchange(
        &self,
        correlation_id: &str,
        payload: Vec<u8>,
    ) -> std::result::Result<(StatusCode, Vec<u8>), ZbxError> {
        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, JSON_RPC)
            .header(USER_AGENT, AGENT)
            .header(CORRELATION_HEADER, correlation_id)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        Ok((status, response.bytes().await?.to_vec()))
    }
}

impl fmt::Debug for ZbxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZbxClient")
            .field("url", &self.url.as_str())
            .field("authenticated", &self.auth.is_some())
            .field("version", &self.version)
            .field("wire_log", &self.wire_log.is_some())
            .finish_non_exhaustive()
    }
}
