use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal: callers log
/// them and fall back to static rendering.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {0} element")]
    MissingElement(&'static str),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { context, message }
    }
}

pub type DomResult<T> = Result<T, DomError>;

pub fn window() -> DomResult<web_sys::Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<web_sys::Document> {
    window()?.document().ok_or(DomError::NoDocument)
}
