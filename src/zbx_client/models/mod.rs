//! Typed records for every entity the client exposes.
//!
//! Ids are kept as strings, the way the API transmits them; an empty id means
//! the record has not been created on the server yet.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::de::string_lenient;
use super::rpc::Decode;

mod application;
mod event;
mod history;
mod host;
mod host_group;
mod host_interface;
mod item;
mod proxy;
mod sla;
mod template;
mod trigger;
mod user_macro;

pub use application::Application;
pub use event::{Acknowledge, Event, EventObject, EventSource};
pub use history::History;
pub use host::{Availability, Host, HostStatus};
pub use host_group::{HostGroup, InternalType};
pub use host_interface::{HostInterface, InterfaceType};
pub use item::{AppInfo, DataType, DeltaType, Item, ItemType, ValueType};
pub use proxy::Proxy;
pub use sla::Sla;
pub(crate) use sla::ServiceSla;
pub use template::Template;
pub use trigger::{
    Function, Trigger, TriggerFlags, TriggerPriority, TriggerStatus, TriggerType, TriggerValue,
    TriggerValueFlags,
};
pub use user_macro::UserMacro;

/// A record with its own `<api>.get/create/update/delete` namespace.
pub trait Record: DeserializeOwned + Serialize {
    /// Method namespace, e.g. `"host"` for `host.get`.
    const API: &'static str;
    /// Key of the id list in create/update/delete answers, e.g. `"hostids"`.
    const IDS_FIELD: &'static str;
    /// How `<api>.get` results are decoded for this record.
    const DECODE: Decode;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// `{"groupid": ..}` reference used in host and template payloads.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HostGroupId {
    #[serde(rename = "groupid", default, deserialize_with = "string_lenient")]
    pub group_id: String,
}

/// `{"hostid": ..}` reference.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HostId {
    #[serde(rename = "hostid", default, deserialize_with = "string_lenient")]
    pub host_id: String,
}

/// `{"templateid": ..}` reference.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TemplateId {
    #[serde(rename = "templateid", default, deserialize_with = "string_lenient")]
    pub template_id: String,
}

impl From<&str> for HostGroupId {
    fn from(group_id: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
        }
    }
}

impl From<&str> for HostId {
    fn from(host_id: &str) -> Self {
        Self {
            host_id: host_id.to_string(),
        }
    }
}

impl From<&str> for TemplateId {
    fn from(template_id: &str) -> Self {
        Self {
            template_id: template_id.to_string(),
        }
    }
}
