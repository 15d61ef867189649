use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationErrors;
use crate::validation::Fields;

/// Catalogue entry keyed by its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    /// Validate a create body: `name` and `price` required, `description` optional.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::from_body(body)?;
        let name = fields.required_str("name");
        let description = fields.optional_str("description");
        let price = fields.required_f64("price");
        fields.finish()?;
        // finish() only succeeds when every required field was present
        Ok(Self {
            name: name.unwrap_or_default(),
            description,
            price: price.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_and_minimal_bodies() {
        let item = Item::from_json(&json!({"name": "Foo", "description": "A foo", "price": 9.5})).unwrap();
        assert_eq!(item, Item { name: "Foo".into(), description: Some("A foo".into()), price: 9.5 });

        let item = Item::from_json(&json!({"name": "Bar", "price": 3})).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn coerces_numeric_price_strings() {
        let item = Item::from_json(&json!({"name": "Baz", "price": "12.25"})).unwrap();
        assert_eq!(item.price, 12.25);
    }

    #[test]
    fn collects_every_field_error() {
        let err = Item::from_json(&json!({"description": 5, "price": "cheap"})).unwrap_err();
        let locs: Vec<String> = err.iter().map(|e| e.loc.join(".")).collect();
        assert_eq!(locs, vec!["body.name", "body.description", "body.price"]);
        let kinds: Vec<&str> = err.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["missing", "string_type", "float_parsing"]);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = Item::from_json(&json!(["name", "price"])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.0[0].loc, vec!["body".to_string()]);
    }

    #[test]
    fn serializes_absent_description_as_null() {
        let item = Item { name: "Foo".into(), description: None, price: 1.0 };
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v, json!({"name": "Foo", "description": null, "price": 1.0}));
    }
}
