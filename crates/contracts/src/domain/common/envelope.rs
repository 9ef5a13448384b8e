use serde::{Deserialize, Serialize};

/// Обёртка ответа `{status, message, payload}`, которую backend использует для списков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub payload: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_payload(self) -> T {
        self.payload
    }
}
