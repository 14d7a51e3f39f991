//! Entity operations, one file per API namespace.
//!
//! Every `*_get` merges its defaults into the caller's [`Params`], lets the
//! session [`Dialect`](super::Dialect) rewrite them and decodes with the
//! record's [`Decode`] strategy. Bulk create and delete check the number of
//! ids the server confirmed before touching the caller's records.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::error::ZbxError;

use super::client::ZbxClient;
use super::de::ids_from_value;
use super::models::Record;
use super::params::Params;
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

impl ZbxClient {
    pub(crate) async fn get_records<T: Record>(&self, params: &Params) -> Result<Vec<T>> {
        self.fetch(&format!("{}.get", T::API), params, T::DECODE, true)
            .await
    }

    /// Calls a create/update/delete method and returns the confirmed ids.
    pub(crate) async fn mutate_ids<P>(
        &self,
        method: &str,
        params: &P,
        field: &'static str,
    ) -> Result<Vec<String>>
    where
        P: Serialize + ?Sized,
    {
        let mut result: BTreeMap<String, Value> =
            self.fetch(method, params, Decode::Direct, true).await?;
        let ids = result
            .remove(field)
            .ok_or(ZbxError::MissingField { field })?;
        Ok(ids_from_value(ids).ok_or_else(|| ZbxError::InvalidField {
            field,
            message: "expected a list of ids".to_string(),
        })?)
    }

    /// `<api>.create`; assigns the returned ids in order.
    pub(crate) async fn create_records<T: Record>(&self, records: &mut [T]) -> Result<()> {
        let ids = self.create_ids::<T, _>(&*records).await?;
        assign_ids(records, ids)
    }

    pub(crate) async fn create_ids<T, P>(&self, payload: &P) -> Result<Vec<String>>
    where
        T: Record,
        P: Serialize + ?Sized,
    {
        self.mutate_ids(&format!("{}.create", T::API), payload, T::IDS_FIELD)
            .await
    }

    pub(crate) async fn update_records<T, P>(&self, payload: &P) -> Result<()>
    where
        T: Record,
        P: Serialize + ?Sized,
    {
        self.mutate_ids(&format!("{}.update", T::API), payload, T::IDS_FIELD)
            .await
            .map(drop)
    }

    /// `<api>.delete` with `params`; fails unless `expected` ids come back.
    pub(crate) async fn delete_ids<T, P>(&self, params: &P, expected: usize) -> Result<()>
    where
        T: Record,
        P: Serialize + ?Sized,
    {
        let ids = self
            .mutate_ids(&format!("{}.delete", T::API), params, T::IDS_FIELD)
            .await?;
        Ok(expect_count(expected, ids.len())?)
    }

    /// Deletes by plain id list and clears the ids only on success.
    pub(crate) async fn delete_records<T: Record>(&self, records: &mut [T]) -> Result<()> {
        let ids = record_ids(records);
        self.delete_ids::<T, _>(&ids, ids.len()).await?;
        clear_ids(records);
        Ok(())
    }
}

/// Sets ids only when the server confirmed one per record.
pub(crate) fn assign_ids<T: Record>(records: &mut [T], ids: Vec<String>) -> Result<()> {
    expect_count(records.len(), ids.len())?;
    for (record, id) in records.iter_mut().zip(ids) {
        record.set_id(id);
    }
    Ok(())
}

pub(crate) fn record_ids<T: Record>(records: &[T]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}

pub(crate) fn clear_ids<T: Record>(records: &mut [T]) {
    for record in records {
        record.set_id(String::new());
    }
}

pub(crate) const fn expect_count(expected: usize, got: usize) -> std::result::Result<(), ZbxError> {
    if expected == got {
        Ok(())
    } else {
        Err(ZbxError::CountMismatch { expected, got })
    }
}

pub(crate) fn exactly_one<T>(records: Vec<T>) -> Result<T> {
    let got = records.len();
    let mut records = records.into_iter();
    match (records.next(), records.next()) {
        (Some(record), None) => Ok(record),
        _ => Err(ZbxError::ExpectedOne { got }.into()),
    }
}

/// Serializes records to JSON objects so payloads can be edited per dialect.
pub(crate) fn to_objects<T: Serialize>(
    records: &[T],
) -> std::result::Result<Vec<serde_json::Map<String, Value>>, ZbxError> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ZbxError::InvalidField {
                field: "record",
                message: "record did not serialize to an object".to_string(),
            }),
            Err(err) => Err(ZbxError::json(&err)),
        })
        .collect()
}
