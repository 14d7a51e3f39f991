use serde_json::{Map, Value};

use crate::Result;

use super::super::client::ZbxClient;
use super::super::models::Item;
use super::super::params::Params;
use super::{assign_ids, exactly_one, to_objects};

const ITEM_DEFAULTS: &[(&str, &str)] = &[("output", "extend"), ("selectApplications", "extend")];

impl ZbxClient {
    /// `item.get` with applications inlined.
    ///
    /// `application_ids` is filled from the inlined applications.
    ///
    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn items_get(&self, mut params: Params) -> Result<Vec<Item>> {
        let dialect = self.dialect();
        params.merge_defaults(ITEM_DEFAULTS);
        dialect.item_get(&mut params);
        let mut items: Vec<Item> = self.get_records(&params).await?;
        dialect.item_results(&mut items);
        for item in &mut items {
            item.application_ids = item
                .applications
                .iter()
                .map(|app| app.application_id.clone())
                .collect();
        }
        Ok(items)
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::ExpectedOne`](crate::error::ZbxError::ExpectedOne)
    /// unless exactly one item matches.
    pub async fn item_get_by_id(&self, id: &str) -> Result<Item> {
        exactly_one(self.items_get(Params::new().with("itemids", id)).await?)
    }

    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn items_get_by_application_id(&self, id: &str) -> Result<Vec<Item>> {
        self.items_get(Params::new().with("applicationids", id))
            .await
    }

    /// `item.create`; sets `item_id` on every item.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch),
    /// leaving the items untouched, when the server confirms a different
    /// number of ids.
    pub async fn items_create(&self, items: &mut [Item]) -> Result<()> {
        let payload = self.item_payload(items)?;
        let ids = self.create_ids::<Item, _>(&payload).await?;
        assign_ids(items, ids)
    }

    /// # Errors
    ///
    /// Returns transport, API and decoding errors.
    pub async fn items_update(&self, items: &[Item]) -> Result<()> {
        let payload = self.item_payload(items)?;
        self.update_records::<Item, _>(&payload).await
    }

    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn items_delete(&self, items: &mut [Item]) -> Result<()> {
        self.delete_records(items).await
    }

    /// Some servers confirm deleted item ids as an object keyed by position;
    /// both shapes are counted.
    ///
    /// # Errors
    ///
    /// Fails with [`ZbxError::CountMismatch`](crate::error::ZbxError::CountMismatch)
    /// when the server confirms a different number of ids.
    pub async fn items_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        self.delete_ids::<Item, _>(ids, ids.len()).await
    }

    fn item_payload(&self, items: &[Item]) -> Result<Vec<Map<String, Value>>> {
        let dialect = self.dialect();
        let mut objects = to_objects(items)?;
        for (object, item) in objects.iter_mut().zip(items) {
            if !item.application_ids.is_empty() {
                object.insert(
                    "applications".to_string(),
                    Value::from(item.application_ids.clone()),
                );
            }
            dialect.item_write(object);
        }
        Ok(objects)
    }
}
