use image::DynamicImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// Thread-safe wrapper for nokhwa::Camera
///
/// SAFETY: This wrapper implements Send for Camera, which is safe because:
/// 1. Camera is a handle to an OS capture session (V4L2 fd / AVFoundation
///    session / Media Foundation source)
/// 2. The handle itself can be moved between threads; it is not tied to
///    the thread that opened it
/// 3. All access goes through the controller's mutex, so the handle is
///    never used from two threads at once
struct SendCamera(Camera);

// SAFETY: access is serialized by the owning mutex; the capture handle
// is only ever used by one thread at a time.
unsafe impl Send for SendCamera {}

/// Webcam capture service using nokhwa
pub struct CameraCapture {
    camera: SendCamera,
}

impl CameraCapture {
    /// Open the capture device at the given index and start streaming
    pub fn open(device_index: u32) -> Result<Self, String> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

        let mut camera = Camera::new(CameraIndex::Index(device_index), requested)
            .map_err(|e| format!("Failed to open camera {}: {}", device_index, e))?;

        camera
            .open_stream()
            .map_err(|e| format!("Failed to start camera stream: {}", e))?;

        Ok(Self {
            camera: SendCamera(camera),
        })
    }

    /// Read one frame from the device.
    ///
    /// Fails when the device has not produced a frame yet; callers skip
    /// the tick in that case.
    pub fn read_frame(&mut self) -> Result<DynamicImage, String> {
        let buffer = self
            .camera
            .0
            .frame()
            .map_err(|e| format!("Failed to read frame: {}", e))?;

        let rgb = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| format!("Failed to decode frame: {}", e))?;

        Ok(DynamicImage::ImageRgb8(rgb))
    }

    /// Negotiated capture resolution
    pub fn dimensions(&self) -> (u32, u32) {
        let resolution = self.camera.0.resolution();
        (resolution.width(), resolution.height())
    }

    /// Stop streaming and release the device handle
    pub fn release(mut self) {
        self.camera.0.stop_stream().ok();
    }

    /// Convert image to PNG bytes for transmission
    pub fn image_to_png_bytes(image: &DynamicImage) -> Result<Vec<u8>, String> {
        let mut buf = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| format!("Failed to encode image: {}", e))?;
        Ok(buf)
    }
}
