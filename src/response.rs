use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Backend response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self, success_code: &str) -> bool {
        self.code == success_code
    }
}

impl ApiResponse<Value> {
    /// Unwrap the payload, or turn the envelope into a backend error
    pub fn into_result(self, success_code: &str) -> ApiResult<Value> {
        if self.is_success(success_code) {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(ApiError::Backend {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}

// Some backends send the code as a number
fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(code) => Ok(code),
        Value::Number(code) => Ok(code.to_string()),
        other => Err(D::Error::custom(format!("invalid response code: {}", other))),
    }
}
