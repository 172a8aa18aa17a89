use crate::commands::camera::ScannerState;
use crate::models::scan::ScanResult;
use tauri::{AppHandle, State};

/// Run OCR on the selected region of the current frame.
///
/// `None` means the request was silently ignored (zero-area crop); the
/// frontend leaves the output pane unchanged. Every other outcome,
/// including guard messages and engine errors, arrives as pane text in
/// the result.
#[tauri::command]
pub fn run_ocr(app: AppHandle, state: State<ScannerState>) -> Result<Option<ScanResult>, String> {
    Ok(state.inner().0.run_ocr(&app))
}

/// Load a static image file as the current frame
#[tauri::command]
pub fn load_image(
    app: AppHandle,
    state: State<ScannerState>,
    path: String,
) -> Result<(), String> {
    state.inner().0.load_image(&app, &path)
}
