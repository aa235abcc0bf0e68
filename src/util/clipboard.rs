//! Copy text to the system clipboard.
//!
//! Prefers the async Clipboard API and falls back to selecting a temporary
//! `<textarea>` and running `execCommand("copy")` on browsers without it.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Copy `text` to the clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        match window.navigator().clipboard() {
            Some(clipboard) => {
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                    .await
                    .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
                Ok(())
            }
            None => copy_with_textarea(&window, text),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn copy_with_textarea(window: &web_sys::Window, text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    let document = window.document().ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;
    let textarea = document
        .create_element("textarea")
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::Unavailable)?;
    textarea.set_value(text);
    body.append_child(&textarea)
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or(ClipboardError::Unavailable)
        .and_then(|html| {
            html.exec_command("copy")
                .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
        });

    if body.remove_child(&textarea).is_err() {
        leptos::logging::warn!("could not remove clipboard fallback textarea");
    }

    match copied? {
        true => Ok(()),
        false => Err(ClipboardError::Rejected("execCommand(\"copy\") returned false".to_owned())),
    }
}
