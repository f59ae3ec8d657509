use arboard::Clipboard;

/// System clipboard access for sharing project codes.
pub struct ClipboardService;

impl ClipboardService {
    pub fn copy_text(text: &str) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}
