use serde_json::{Map, Value};

/// A single cell value taken from an item field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit JSON `null`: the template cell is left untouched.
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Convert a JSON value into a cell value.
    ///
    /// Arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Text(n.to_string()),
            },
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl core::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One inventory record placed into a template row.
///
/// Every field is optional (`None` means the key was absent); keys other than
/// the four known ones are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub location: Option<FieldValue>,
    pub status: Option<FieldValue>,
}

impl Item {
    pub fn new(
        id: impl Into<FieldValue>,
        name: impl Into<FieldValue>,
        location: impl Into<FieldValue>,
        status: impl Into<FieldValue>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            location: Some(location.into()),
            status: Some(status.into()),
        }
    }

    pub fn from_json_object(obj: &Map<String, Value>) -> Self {
        let field = |key: &str| obj.get(key).map(FieldValue::from_json);
        Self {
            id: field("id"),
            name: field("name"),
            location: field("location"),
            status: field("status"),
        }
    }

    /// Field values in template column order: id, name, location, status.
    pub fn columns(&self) -> [Option<&FieldValue>; 4] {
        [
            self.id.as_ref(),
            self.name.as_ref(),
            self.location.as_ref(),
            self.status.as_ref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn reads_known_fields_and_ignores_others() {
        let item = Item::from_json_object(&obj(json!({
            "id": "J-001",
            "name": "Jumper LC-LC",
            "location": "Rack 4",
            "status": "ok",
            "color": "yellow",
        })));

        assert_eq!(item, Item::new("J-001", "Jumper LC-LC", "Rack 4", "ok"));
    }

    #[test]
    fn missing_fields_are_none_and_null_is_kept() {
        let item = Item::from_json_object(&obj(json!({ "id": "J-1", "name": null })));
        assert_eq!(item.id, Some(FieldValue::from("J-1")));
        assert_eq!(item.name, Some(FieldValue::Null));
        assert_eq!(item.location, None);
        assert_eq!(item.status, None);
    }

    #[test]
    fn scalar_types_are_preserved() {
        let item = Item::from_json_object(&obj(json!({ "id": 42, "status": true })));
        assert_eq!(item.id, Some(FieldValue::Number(42.0)));
        assert_eq!(item.status, Some(FieldValue::Bool(true)));
    }

    #[test]
    fn nested_values_are_kept_as_json_text() {
        let item = Item::from_json_object(&obj(json!({ "location": { "rack": 4 } })));
        assert_eq!(item.location, Some(FieldValue::Text("{\"rack\":4}".to_string())));
    }

    #[test]
    fn columns_follow_template_order() {
        let item = Item::new("a", "b", "c", "d");
        let cols: Vec<String> = item
            .columns()
            .iter()
            .map(|v| v.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(cols, vec!["a", "b", "c", "d"]);
    }
}
