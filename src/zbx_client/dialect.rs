//! Parameter and result rewrites between the 1.8 and 2.0+ API generations.

use serde_json::{Map, Value};

use super::Version;
use super::models::{Item, Trigger, TriggerValue, TriggerValueFlags};
use super::params::Params;

/// API generation a session talks to.
///
/// Decided from the discovered version: anything below 2.0.0, including an
/// undiscovered `0.0.0`, is [`Dialect::Legacy`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dialect {
    Legacy,
    Current,
}

impl Dialect {
    #[must_use]
    pub const fn for_version(version: Version) -> Self {
        if version.is_at_least(2, 0, 0) {
            Self::Current
        } else {
            Self::Legacy
        }
    }

    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }

    /// `hostinterface` only exists from 2.0.
    #[must_use]
    pub const fn supports_host_interfaces(self) -> bool {
        matches!(self, Self::Current)
    }

    pub(crate) fn host_get(self, params: &mut Params) {
        if self.is_legacy() {
            params.remove("selectInterfaces");
            params.rename("selectGroups", "select_groups");
        }
    }

    pub(crate) fn item_get(self, params: &mut Params) {
        // 1.8 ignores select_* options unless the hidden extendoutput flag is set.
        if self.is_legacy() && params.remove("selectApplications").is_some() {
            params.insert("select_applications", "extend");
            params.insert("extendoutput", 1);
        }
    }

    /// 1.8 keeps the display name in `description`.
    pub(crate) fn item_results(self, items: &mut [Item]) {
        if self.is_legacy() {
            for item in items {
                item.name = std::mem::take(&mut item.description);
            }
        }
    }

    pub(crate) fn item_write(self, item: &mut Map<String, Value>) {
        if self.is_legacy() {
            let name = item.remove("name").unwrap_or_else(|| Value::String(String::new()));
            item.insert("description".to_string(), name);
        }
    }

    pub(crate) fn trigger_get(self, params: &mut Params) {
        if self.is_legacy() {
            params.rename("selectFunctions", "select_functions");
        }
    }

    /// 1.8 reports an unknown trigger state as value `2`.
    pub(crate) fn trigger_results(self, triggers: &mut [Trigger]) {
        if !self.is_legacy() {
            return;
        }
        for trigger in triggers {
            if trigger.value == TriggerValue::Other(2) {
                trigger.value = TriggerValue::Ok;
                trigger.value_flags = TriggerValueFlags::Unknown;
            }
        }
    }

    pub(crate) fn event_get(self, params: &mut Params) {
        if self.is_legacy() {
            params.rename("selectAcknowledges", "select_acknowledges");
        }
    }
}
