use crate::services::scanner::Scanner;
use tauri::{AppHandle, State};

/// Default capture device, the usual built-in webcam slot
const DEFAULT_DEVICE_INDEX: u32 = 0;

/// Shared scanner instance (one per application)
pub struct ScannerState(pub Scanner);

/// Toggle the camera on or off. Returns the new state: `true` when the
/// camera is now running.
///
/// A failed device open is reported here as the command error; a camera
/// that is open but not yet producing frames is not an error.
#[tauri::command]
pub fn toggle_camera(
    app: AppHandle,
    state: State<ScannerState>,
    device_index: Option<u32>,
) -> Result<bool, String> {
    let scanner = &state.inner().0;

    if scanner.is_camera_on() {
        scanner.stop_camera();
        Ok(false)
    } else {
        scanner.start_camera(app, device_index.unwrap_or(DEFAULT_DEVICE_INDEX))?;
        Ok(true)
    }
}

/// Whether the camera is currently on
#[tauri::command]
pub fn camera_running(state: State<ScannerState>) -> Result<bool, String> {
    Ok(state.inner().0.is_camera_on())
}
