use crate::commands::camera::ScannerState;
use crate::models::roi::{Point, Roi};
use tauri::State;

/// Pointer pressed on the display surface: anchor a new selection,
/// discarding any prior rectangle
#[tauri::command]
pub fn roi_pointer_down(state: State<ScannerState>, x: i32, y: i32) -> Result<(), String> {
    state.inner().0.pointer_down(Point::new(x, y));
    Ok(())
}

/// Pointer dragged: update the provisional rectangle.
/// Returns the normalized rectangle for overlay drawing.
#[tauri::command]
pub fn roi_pointer_drag(state: State<ScannerState>, x: i32, y: i32) -> Result<Option<Roi>, String> {
    Ok(state.inner().0.pointer_drag(Point::new(x, y)))
}

/// Pointer released: finalize the rectangle
#[tauri::command]
pub fn roi_pointer_up(state: State<ScannerState>, x: i32, y: i32) -> Result<Option<Roi>, String> {
    Ok(state.inner().0.pointer_up(Point::new(x, y)))
}

/// Discard the current selection
#[tauri::command]
pub fn clear_roi(state: State<ScannerState>) -> Result<(), String> {
    state.inner().0.clear_selection();
    Ok(())
}

/// The current normalized selection rectangle, if any
#[tauri::command]
pub fn get_roi(state: State<ScannerState>) -> Result<Option<Roi>, String> {
    Ok(state.inner().0.selection_rect())
}
