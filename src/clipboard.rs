//! System clipboard access for the copy action.

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    use dioxus::prelude::document;

    let payload =
        serde_json::to_string(text).map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    let script = format!(
        "if (!navigator.clipboard) {{ return false; }} await navigator.clipboard.writeText({payload}); return true;"
    );
    match document::eval(&script).join::<bool>().await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::Unavailable(
            "navigator.clipboard missing".to_string(),
        )),
        Err(e) => Err(ClipboardError::WriteFailed(e.to_string())),
    }
}
