use crate::models::roi::{Point, Roi, RoiSelection};
use crate::models::scan::ScanResult;
use crate::services::camera::CameraCapture;
use crate::services::ocr::{recognize_block, OcrEngine};
use crate::services::preprocessing::PreprocessingService;
use base64::Engine as _;
use image::DynamicImage;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tauri::{AppHandle, Emitter};
use tokio::time::sleep;

/// Delay between frame reads while the camera is on
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Shown when OCR is requested with no frame captured or loaded
pub const MSG_NO_FRAME: &str = "No image loaded or camera off.";

/// Shown when OCR is requested before a selection rectangle exists
pub const MSG_NO_ROI: &str = "Please draw a box (ROI) on the video first.";

/// Mutable scanner state: capture handle, most recent frame, selection.
///
/// The frame is replaced on every tick; no history is kept.
struct ScannerInner {
    camera: Option<CameraCapture>,
    current_frame: Option<DynamicImage>,
    selection: RoiSelection,
}

impl ScannerInner {
    fn new() -> Self {
        Self {
            camera: None,
            current_frame: None,
            selection: RoiSelection::new(),
        }
    }
}

/// Event payload for each rendered video frame
#[derive(Clone, Serialize)]
struct FrameUpdate {
    image_base64: String,
    width: u32,
    height: u32,
    roi: Option<Roi>,
}

/// Application controller.
///
/// Owns the camera lifecycle (on/off), the current frame and the ROI
/// selection, and drives the periodic refresh cycle as a
/// stop-signal-guarded task. OCR requests run synchronously on the
/// calling thread.
pub struct Scanner {
    inner: Arc<Mutex<ScannerInner>>,
    stop_signal: Arc<Mutex<bool>>,
    engine: Arc<dyn OcrEngine>,
}

impl Scanner {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScannerInner::new())),
            stop_signal: Arc::new(Mutex::new(false)),
            engine,
        }
    }

    pub fn is_camera_on(&self) -> bool {
        self.inner.lock().camera.is_some()
    }

    /// Open the capture device and begin the refresh cycle.
    ///
    /// Starting while already on keeps the existing session.
    pub fn start_camera(&self, app: AppHandle, device_index: u32) -> Result<(), String> {
        if self.inner.lock().camera.is_some() {
            return Ok(());
        }

        let camera = CameraCapture::open(device_index)?;
        let (width, height) = camera.dimensions();
        tracing::info!(device_index, width, height, "camera started");

        self.inner.lock().camera = Some(camera);
        *self.stop_signal.lock() = false;
        self.spawn_frame_loop(app);
        Ok(())
    }

    /// Release the capture handle and let the refresh cycle wind down.
    ///
    /// Safe to call when the camera is already off; the handle is
    /// released exactly once.
    pub fn stop_camera(&self) {
        *self.stop_signal.lock() = true;
        let released = self.inner.lock().camera.take();
        if let Some(camera) = released {
            camera.release();
            tracing::info!("camera stopped");
        }
    }

    pub fn pointer_down(&self, p: Point) {
        self.inner.lock().selection.begin(p);
    }

    pub fn pointer_drag(&self, p: Point) -> Option<Roi> {
        let mut guard = self.inner.lock();
        guard.selection.drag(p);
        guard.selection.rect()
    }

    pub fn pointer_up(&self, p: Point) -> Option<Roi> {
        let mut guard = self.inner.lock();
        guard.selection.finish(p);
        guard.selection.rect()
    }

    pub fn clear_selection(&self) {
        self.inner.lock().selection.clear();
    }

    pub fn selection_rect(&self) -> Option<Roi> {
        self.inner.lock().selection.rect()
    }

    /// Load a static image file as the current frame and render it.
    /// Works with the camera off.
    pub fn load_image(&self, app: &AppHandle, path: &str) -> Result<(), String> {
        let image =
            image::open(path).map_err(|e| format!("Failed to load image {}: {}", path, e))?;
        tracing::info!(path, "image loaded");

        let roi = {
            let mut guard = self.inner.lock();
            guard.current_frame = Some(image.clone());
            guard.selection.rect()
        };

        emit_frame(app, &image, roi);
        Ok(())
    }

    /// Handle one OCR request against the current frame and selection.
    ///
    /// Returns `None` when the request is silently ignored (zero-area or
    /// fully off-frame crop); the output pane is left unchanged. Blocks
    /// the calling thread for the duration of the OCR call.
    pub fn run_ocr(&self, app: &AppHandle) -> Option<ScanResult> {
        let (frame, rect) = {
            let guard = self.inner.lock();
            (guard.current_frame.clone(), guard.selection.rect())
        };

        let output = scan(frame.as_ref(), rect, self.engine.as_ref())?;

        // Preview of the binarized crop, best effort
        if let Some(ref binary) = output.preprocessed {
            if let Ok(bytes) = CameraCapture::image_to_png_bytes(binary) {
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                app.emit("ocr:preprocessed", encoded).ok();
            }
        }

        Some(output.result)
    }

    // Periodic refresh cycle: read one frame per tick, store and render
    // it, then reschedule after a fixed delay. A failed read skips the
    // tick. Exits when the stop signal is raised or the handle is gone.
    fn spawn_frame_loop(&self, app: AppHandle) {
        let inner = Arc::clone(&self.inner);
        let stop_signal = Arc::clone(&self.stop_signal);

        // Spawned on Tauri's runtime so start can be issued from a
        // synchronous command
        tauri::async_runtime::spawn(async move {
            tracing::debug!("frame loop started");

            loop {
                if *stop_signal.lock() {
                    break;
                }

                let tick = {
                    let mut guard = inner.lock();
                    match guard.camera.as_mut() {
                        None => None,
                        Some(camera) => match camera.read_frame() {
                            Ok(frame) => {
                                guard.current_frame = Some(frame.clone());
                                Some(Some((frame, guard.selection.rect())))
                            }
                            Err(e) => {
                                tracing::debug!("frame read skipped: {}", e);
                                Some(None)
                            }
                        },
                    }
                };

                match tick {
                    // Handle released out from under the loop
                    None => break,
                    // No frame available this tick
                    Some(None) => {}
                    Some(Some((frame, roi))) => emit_frame(&app, &frame, roi),
                }

                sleep(FRAME_INTERVAL).await;
            }

            tracing::debug!("frame loop stopped");
        });
    }
}

/// Encode a frame as PNG and emit it with the ROI overlay state
fn emit_frame(app: &AppHandle, frame: &DynamicImage, roi: Option<Roi>) {
    let bytes = match CameraCapture::image_to_png_bytes(frame) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("frame encode failed: {}", e);
            return;
        }
    };

    let payload = FrameUpdate {
        image_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        width: frame.width(),
        height: frame.height(),
        roi,
    };

    app.emit("camera:frame", payload).ok();
}

/// Outcome of one accepted OCR request
struct ScanOutput {
    result: ScanResult,
    preprocessed: Option<DynamicImage>,
}

/// OCR request handling, independent of the event loop.
///
/// `None` means the request was silently ignored. Guard failures are
/// returned as pane text without invoking the engine.
fn scan(
    frame: Option<&DynamicImage>,
    rect: Option<Roi>,
    engine: &dyn OcrEngine,
) -> Option<ScanOutput> {
    let Some(frame) = frame else {
        return Some(ScanOutput {
            result: ScanResult::new(MSG_NO_FRAME),
            preprocessed: None,
        });
    };

    let Some(rect) = rect else {
        return Some(ScanOutput {
            result: ScanResult::new(MSG_NO_ROI),
            preprocessed: None,
        });
    };

    if !rect.is_valid() {
        return None;
    }
    let crop_rect = rect.clamp_to(frame.width(), frame.height())?;

    let crop = frame.crop_imm(
        crop_rect.x as u32,
        crop_rect.y as u32,
        crop_rect.width,
        crop_rect.height,
    );

    match PreprocessingService::preprocess(&crop) {
        Ok(binary) => {
            let text = recognize_block(engine, &binary);
            Some(ScanOutput {
                result: ScanResult::new(text),
                preprocessed: Some(binary),
            })
        }
        Err(e) => Some(ScanOutput {
            result: ScanResult::new(format!("Error: {}", e)),
            preprocessed: None,
        }),
    }
}
