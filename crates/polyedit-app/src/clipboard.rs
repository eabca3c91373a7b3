//! System clipboard sink.

use polyedit_core::{ClipboardError, ClipboardSink};

/// Writes exported text to the OS clipboard.
///
/// The connection is opened lazily on first write and kept afterwards; some
/// platforms drop clipboard contents when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(feature = "native")]
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "native")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }
        log::debug!("Wrote {} bytes to clipboard", text.len());
        Ok(())
    }
}

#[cfg(not(feature = "native"))]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "built without native clipboard support".to_string(),
        ))
    }
}
