//! Generic result envelope returned by application services

use serde::{Deserialize, Serialize};

pub const SUCCESS_CODE: &str = "SUCCESS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    Success,
    Failure,
}

/// Result envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultVO<T> {
    pub status: ResultStatus,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResultVO<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResultStatus::Success,
            code: SUCCESS_CODE.to_string(),
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Failure,
            code: code.into(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }

    /// Take the payload out of the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
