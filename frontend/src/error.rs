use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no head")]
    NoHead,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        EnhanceError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pieces_name_what_is_missing() {
        assert_eq!(EnhanceError::NoHead.to_string(), "document has no head");
        assert_eq!(EnhanceError::NoBody.to_string(), "document has no body");
        assert_eq!(EnhanceError::NoDocument.to_string(), "window has no document");
    }
}
