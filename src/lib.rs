mod commands;
mod models;
mod services;

use std::sync::Arc;

use commands::camera::{camera_running, toggle_camera, ScannerState};
use commands::ocr::{load_image, run_ocr};
use commands::roi::{clear_roi, get_roi, roi_pointer_down, roi_pointer_drag, roi_pointer_up};
use services::ocr::{OcrEngine, TesseractEngine};
use services::scanner::Scanner;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt::init();

    if !TesseractEngine::is_available() {
        // Not fatal: each OCR request will report the failure in the
        // output pane
        tracing::warn!("Tesseract is not available; OCR requests will return an error");
    }

    let scanner = ScannerState(Scanner::new(Arc::new(TesseractEngine::new())));

    tauri::Builder::default()
        .manage(scanner)
        .invoke_handler(tauri::generate_handler![
            toggle_camera,
            camera_running,
            roi_pointer_down,
            roi_pointer_drag,
            roi_pointer_up,
            clear_roi,
            get_roi,
            run_ocr,
            load_image
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let tauri::RunEvent::Exit = event {
                // Release the capture handle regardless of current state
                app.state::<ScannerState>().0.stop_camera();
            }
        });
}
