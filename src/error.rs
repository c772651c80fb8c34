use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from talking to the browser. None of these are fatal; callers
/// log them and leave the page as it is.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element not found: {0}")]
    Missing(String),
    #[error("unexpected element type for {0}")]
    WrongType(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
