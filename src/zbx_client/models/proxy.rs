use serde::{Deserialize, Serialize};

use super::super::de::string_lenient;
use super::super::rpc::Decode;
use super::Record;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Proxy {
    #[serde(rename = "proxyid", default, deserialize_with = "string_lenient")]
    pub proxy_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub host: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub error: String,
}

impl Record for Proxy {
    const API: &'static str = "proxy";
    const IDS_FIELD: &'static str = "proxyids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.proxy_id
    }

    fn set_id(&mut self, id: String) {
        self.proxy_id = id;
    }
}
