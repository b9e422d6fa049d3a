use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    /// Lower-case kind: `reminder`, `confirmation`, `alert`, `info`, ...
    #[serde(rename = "type", deserialize_with = "lowercase")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

fn lowercase<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(String::deserialize(d)?.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_is_normalized() {
        let json = r#"{"id":"n1","type":"REMINDER","title":"Soon","message":"Tomorrow at 9","read":false,"createdAt":"2025-01-01T08:00:00Z"}"#;
        let n: NotificationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, "reminder");
        assert!(!n.read);
        assert_eq!(serde_json::to_value(&n).unwrap()["type"], "reminder");
    }
}
