//! Validation of the generate request payload.

use serde_json::Value;

use excelgen_core::{ServiceError, ServiceResult};

use crate::item::Item;

const EMPTY_ITEMS: &str = "items must be a non-empty list";

/// Extract the ordered item list from a request body.
///
/// The body must be a JSON object whose `items` key holds a non-empty array of
/// objects. A missing or `null` `items` is treated like an empty list.
pub fn parse_items(payload: &Value) -> ServiceResult<Vec<Item>> {
    let body = payload
        .as_object()
        .ok_or_else(|| ServiceError::validation("request body must be a JSON object"))?;

    let items = match body.get("items") {
        None | Some(Value::Null) => return Err(ServiceError::validation(EMPTY_ITEMS)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ServiceError::validation(EMPTY_ITEMS)),
    };

    if items.is_empty() {
        return Err(ServiceError::validation(EMPTY_ITEMS));
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            raw.as_object()
                .map(Item::from_json_object)
                .ok_or_else(|| ServiceError::validation(format!("items[{idx}] must be an object")))
        })
        .collect()
}
