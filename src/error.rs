use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Zabbix(#[from] ZbxError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("configuration error: {0}")]
    Other(String),
}

/// Failures raised while talking to the Zabbix API.
///
/// Use [`ZbxError::kind`] to branch on the broad category instead of matching
/// every variant.
#[derive(Debug, Error)]
pub enum ZbxError {
    #[error("failed to build HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: reqwest::StatusCode },
    #[error("invalid JSON payload: {message}")]
    Json { message: String },
    #[error("Zabbix API error {code} ({message}): {data}")]
    Api {
        code: i64,
        message: String,
        data: String,
    },
    #[error("expected exactly one result, got {got}")]
    ExpectedOne { got: usize },
    #[error("expected {expected} results, got {got}")]
    CountMismatch { expected: usize, got: usize },
    #[error("unable to determine API version: {message}")]
    Version { message: String },
    #[error("{operation} requires Zabbix API {required} or newer, server is {found}")]
    UnsupportedVersion {
        operation: &'static str,
        required: &'static str,
        found: String,
    },
    #[error("missing field in API response: {field}")]
    MissingField { field: &'static str },
    #[error("invalid field {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

/// Broad failure categories callers act on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Network or HTTP layer failed; the payload was never inspected.
    Transport,
    /// The server answered with a JSON-RPC error object.
    Protocol,
    /// A lookup or bulk operation saw a different number of records than required.
    Cardinality,
    /// The remote version string could not be fetched or parsed.
    VersionDiscovery,
    /// The response did not have the expected shape.
    Decode,
    /// The call cannot be made as requested (bad parameters, wrong server version).
    Usage,
}

impl From<reqwest::Error> for ZbxError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_status() {
            if let Some(status) = source.status() {
                return Self::HttpStatus { status };
            }
        }
        Self::Request { source }
    }
}

impl ZbxError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Client { .. } | Self::Request { .. } | Self::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            Self::Api { .. } => ErrorKind::Protocol,
            Self::ExpectedOne { .. } | Self::CountMismatch { .. } => ErrorKind::Cardinality,
            Self::Version { .. } => ErrorKind::VersionDiscovery,
            Self::Json { .. } | Self::MissingField { .. } => ErrorKind::Decode,
            Self::UnsupportedVersion { .. } | Self::InvalidField { .. } => ErrorKind::Usage,
        }
    }

    pub(crate) fn json(err: &serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

impl Error {
    /// The Zabbix failure category, if this is a Zabbix error.
    #[must_use]
    pub const fn zabbix_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Zabbix(err) => Some(err.kind()),
            _ => None,
        }
    }
}
