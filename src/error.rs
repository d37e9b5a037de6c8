//! Storefront Errors
//!
//! One error type for every fallible DOM, widget and gateway call.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Common result type for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorefrontError {
    /// A DOM or JS call threw
    #[error("JS error: {0}")]
    Js(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The payment script is not on the page
    #[error("Payment gateway not loaded")]
    GatewayUnavailable,

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<JsValue> for StorefrontError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => StorefrontError::Js(message),
            None => StorefrontError::Js(format!("{:?}", value)),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for StorefrontError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        StorefrontError::Serialization(err.to_string())
    }
}

impl From<StorefrontError> for JsValue {
    fn from(err: StorefrontError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
