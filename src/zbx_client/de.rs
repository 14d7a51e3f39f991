//! Field codecs for Zabbix records.
//!
//! The API encodes almost every number as a JSON string, returns `null` or
//! `""` for unset values and, depending on the server version, sends some
//! lists as objects keyed by id. These helpers accept all of those shapes.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Declares a Zabbix integer code as a Rust enum.
///
/// Unknown codes land in `Other(code)` so new server values never break
/// decoding. Values serialize as numeric strings, the way the API sends them.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Other(i64),
        }

        impl $name {
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(code) => code,
                }
            }

            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Other(other),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_code(0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(&self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::zbx_client::de::i64_lenient(deserializer).map(Self::from_code)
            }
        }
    };
}

pub(crate) use code_enum;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}

pub(crate) fn i64_lenient<'de, D>(de: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(de)? {
        Scalar::Int(value) => Ok(value),
        #[allow(clippy::cast_possible_truncation)]
        Scalar::Float(value) => Ok(value as i64),
        Scalar::Str(value) if value.trim().is_empty() => Ok(0),
        Scalar::Str(value) => value
            .trim()
            .parse::<i64>()
            .map_err(serde::de::Error::custom),
        Scalar::Bool(value) => Ok(i64::from(value)),
        Scalar::Null => Ok(0),
    }
}

pub(crate) fn f64_lenient<'de, D>(de: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(de)? {
        #[allow(clippy::cast_precision_loss)]
        Scalar::Int(value) => Ok(value as f64),
        Scalar::Float(value) => Ok(value),
        Scalar::Str(value) if value.trim().is_empty() => Ok(0.0),
        Scalar::Str(value) => value
            .trim()
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
        Scalar::Bool(value) => Ok(if value { 1.0 } else { 0.0 }),
        Scalar::Null => Ok(0.0),
    }
}

/// Ids and free text: numbers are stringified, `null` becomes empty.
pub(crate) fn string_lenient<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(de)? {
        Scalar::Int(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Str(value) => value,
        Scalar::Bool(value) => value.to_string(),
        Scalar::Null => String::new(),
    })
}

/// A list that older servers send as an object keyed by id.
pub(crate) fn list_or_map<'de, D, T>(de: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrMap<T> {
        List(Vec<T>),
        Map(BTreeMap<String, T>),
        Null,
    }

    Ok(match ListOrMap::<T>::deserialize(de)? {
        ListOrMap::List(items) => items,
        ListOrMap::Map(items) => by_numeric_key(items),
        ListOrMap::Null => Vec::new(),
    })
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn i64_as_string<S>(value: &i64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Values of an object keyed by position or id, in numeric key order.
///
/// Non-numeric keys follow the numeric ones in string order.
fn by_numeric_key<T>(entries: impl IntoIterator<Item = (String, T)>) -> Vec<T> {
    let mut entries: Vec<(Option<u64>, T)> = entries
        .into_iter()
        .map(|(key, value)| (key.parse().ok(), value))
        .collect();
    entries.sort_by_key(|(index, _)| (index.is_none(), *index));
    entries.into_iter().map(|(_, value)| value).collect()
}

/// Flattens an id list from a create/update/delete answer.
///
/// Servers answer `["1","2"]`, `[1,2]` or, for some methods and versions,
/// `{"0":"1","1":"2"}`.
pub(crate) fn ids_from_value(value: Value) -> Option<Vec<String>> {
    let scalar = |value: Value| match value {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    };
    match value {
        Value::Array(items) => items.into_iter().map(scalar).collect(),
        Value::Object(items) => by_numeric_key(items).into_iter().map(scalar).collect(),
        _ => None,
    }
}
