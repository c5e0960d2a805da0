use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A queued payload as it is stored in the db file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Payload exactly as the producer sent it
    pub value: Value,
    /// RFC 3339 insertion time
    pub created_at: String,
}

impl Item {
    /// Wrap a payload, stamping it with the current local time
    pub fn new(value: Value) -> Self {
        Self {
            value,
            created_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn test_new_item_has_rfc3339_timestamp() {
        let item = Item::new(json!({"id": 1}));
        assert_eq!(item.value, json!({"id": 1}));
        assert!(DateTime::parse_from_rfc3339(&item.created_at).is_ok());
    }

    #[test]
    fn test_item_wire_format() {
        let item = Item {
            value: json!("hello"),
            created_at: "2024-05-01T10:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            json!({"value": "hello", "created_at": "2024-05-01T10:00:00Z"})
        );
    }

    #[test]
    fn test_item_requires_value_field() {
        let result = serde_json::from_str::<Item>(r#"{"created_at": "2024-05-01T10:00:00Z"}"#);
        assert!(result.is_err());
    }
}
