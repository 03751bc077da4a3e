use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON envelope every API endpoint returns: `{success, data?, message?}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data: Some(data), message: Some(message.into()) }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self { success: true, data: None, message: Some(message.into()) }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_empty_fields() {
        let ok = ApiResponse::ok(serde_json::json!({"id": 1}));
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v["success"], true);
        assert!(v.get("message").is_none());

        let fail: ApiResponse<()> = ApiResponse::fail("not found");
        let v = serde_json::to_value(&fail).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["message"], "not found");
        assert!(v.get("data").is_none());
    }
}
