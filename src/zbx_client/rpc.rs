use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::error::ZbxError;

const BODY_PREVIEW_LIMIT: usize = 256;

/// How a `*_get` answer is turned into typed records.
///
/// Picked once per record type (see `Record::DECODE`) and never mixed within a
/// call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decode {
    /// Envelope and result decoded from the body in a single pass.
    Direct,
    /// Result kept as a raw fragment, the error object checked, then the
    /// fragment decoded on its own. Used for records with optional nested
    /// arrays.
    RawThenTyped,
}

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a, P: ?Sized> {
    pub(crate) jsonrpc: &'static str,
    pub(crate) method: &'a str,
    pub(crate) params: &'a P,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) auth: Option<&'a str>,
    pub(crate) id: u64,
}

impl<'a, P: ?Sized> RpcRequest<'a, P> {
    pub(crate) fn new(method: &'a str, params: &'a P, auth: Option<&'a str>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            auth: auth.filter(|token| !token.is_empty()),
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcEnvelope<T> {
    // no `default` here: on a generic field it would require `T: Default`
    pub(crate) result: Option<T>,
    #[serde(default)]
    pub(crate) error: Option<RpcError>,
}

/// JSON-RPC error object.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "super::de::string_lenient")]
    pub data: String,
}

impl From<RpcError> for ZbxError {
    fn from(err: RpcError) -> Self {
        Self::Api {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}

/// A full response envelope, as returned by [`ZbxClient::call`].
///
/// [`ZbxClient::call`]: super::ZbxClient::call
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub error: Option<RpcError>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub id: Value,
}

impl Response {
    /// Turns a populated error object into a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ZbxError::Api`] when the server answered with an error.
    pub fn into_result(self) -> Result<Value, ZbxError> {
        match self.error {
            Some(err) => Err(err.into()),
            None => Ok(self.result),
        }
    }
}

pub(crate) fn parse_response(body: &[u8]) -> Result<Response, ZbxError> {
    serde_json::from_slice(body).map_err(|err| decode_failure(&err, body))
}

/// Decodes a `result` payload with the requested strategy.
pub(crate) fn decode<T>(body: &[u8], strategy: Decode) -> Result<T, ZbxError>
where
    T: DeserializeOwned,
{
    match strategy {
        Decode::Direct => {
            let envelope: RpcEnvelope<T> =
                serde_json::from_slice(body).map_err(|err| decode_failure(&err, body))?;
            if let Some(err) = envelope.error {
                return Err(err.into());
            }
            envelope
                .result
                .ok_or(ZbxError::MissingField { field: "result" })
        }
        Decode::RawThenTyped => {
            let envelope: RpcEnvelope<Box<RawValue>> =
                serde_json::from_slice(body).map_err(|err| decode_failure(&err, body))?;
            if let Some(err) = envelope.error {
                return Err(err.into());
            }
            let raw = envelope
                .result
                .ok_or(ZbxError::MissingField { field: "result" })?;
            serde_json::from_str(raw.get())
                .map_err(|err| decode_failure(&err, raw.get().as_bytes()))
        }
    }
}

fn decode_failure(err: &serde_json::Error, body: &[u8]) -> ZbxError {
    ZbxError::Json {
        message: format!(
            "error decoding response body: {err}; body preview: {}",
            body_preview(body)
        ),
    }
}

pub(crate) fn body_preview(body: &[u8]) -> String {
    if body.is_empty() {
        return "<empty>".to_string();
    }
    let end = body.len().min(BODY_PREVIEW_LIMIT);
    let mut preview = String::from_utf8_lossy(&body[..end]).to_string();
    if body.len() > BODY_PREVIEW_LIMIT {
        preview.push_str("...");
    }
    preview.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::{Decode, RpcRequest, body_preview, decode};
    use crate::error::{ErrorKind, ZbxError};
    use serde_json::{Value, json};
    use std::num::NonZeroU32;

    fn encoded(request: &RpcRequest<'_, Value>) -> Value {
        match serde_json::to_value(request) {
            Ok(value) => value,
            Err(err) => panic!("request should serialize: {err}"),
        }
    }

    #[test]
    fn empty_auth_is_omitted() {
        let params = json!({});
        let value = encoded(&RpcRequest::new("APIInfo.version", &params, Some(""), 1));
        assert!(value.get("auth").is_none());
        let value = encoded(&RpcRequest::new("APIInfo.version", &params, None, 2));
        assert!(value.get("auth").is_none());
    }

    #[test]
    fn token_is_sent_as_auth() {
        let params = json!({"hostids": "10084"});
        let value = encoded(&RpcRequest::new("host.get", &params, Some("abc123"), 7));
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "host.get",
                "params": {"hostids": "10084"},
                "auth": "abc123",
                "id": 7
            })
        );
    }

    #[test]
    fn both_strategies_surface_the_error_object() {
        let body = br#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"No host"},"id":1}"#;
        for strategy in [Decode::Direct, Decode::RawThenTyped] {
            let err = match decode::<Vec<Value>>(body, strategy) {
                Ok(_) => panic!("error object must fail the call"),
                Err(err) => err,
            };
            assert_eq!(err.kind(), ErrorKind::Protocol);
            assert!(matches!(err, ZbxError::Api { code: -32602, .. }));
        }
    }

    #[test]
    fn raw_then_typed_decodes_the_fragment() {
        let body = br#"{"jsonrpc":"2.0","result":[{"hostid":"1"},{"hostid":"2"}],"id":3}"#;
        let rows: Vec<Value> = match decode(body, Decode::RawThenTyped) {
            Ok(rows) => rows,
            Err(err) => panic!("result should decode: {err}"),
        };
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn direct_decodes_results_without_a_default() {
        let body = br#"{"jsonrpc":"2.0","result":5,"id":1}"#;
        match decode::<NonZeroU32>(body, Decode::Direct) {
            Ok(value) => assert_eq!(value.get(), 5),
            Err(err) => panic!("result should decode: {err}"),
        }

        let missing = decode::<NonZeroU32>(br#"{"jsonrpc":"2.0","id":1}"#, Decode::Direct);
        assert!(matches!(
            missing,
            Err(ZbxError::MissingField { field: "result" })
        ));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = match decode::<Value>(b"<html>", Decode::Direct) {
            Ok(_) => panic!("html is not an envelope"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("<html>"));
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = vec![b'a'; 300];
        let preview = body_preview(&body);
        assert_eq!(preview.len(), 259);
        assert!(preview.ends_with("..."));
        assert_eq!(body_preview(b""), "<empty>");
    }
}
