use serde::{Deserialize, Serialize};

use super::super::de::{f64_lenient, i64_lenient, string_lenient};

/// One SLA interval from `service.getsla`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Sla {
    #[serde(default, deserialize_with = "i64_lenient")]
    pub from: i64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub to: i64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub sla: f64,
    #[serde(rename = "okTime", default, deserialize_with = "f64_lenient")]
    pub ok_time: f64,
    #[serde(rename = "problemTime", default, deserialize_with = "f64_lenient")]
    pub problem_time: f64,
    #[serde(rename = "downtimeTime", default, deserialize_with = "f64_lenient")]
    pub downtime_time: f64,
    #[serde(rename = "hostid", default, deserialize_with = "string_lenient")]
    pub host_id: String,
}

/// Per-service entry of the `service.getsla` answer, keyed by service id.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceSla {
    #[serde(default)]
    pub sla: Vec<Sla>,
}
