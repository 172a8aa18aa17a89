use super::engine::OcrEngine;
use image::DynamicImage;
use tesseract::{PageSegMode, Tesseract};

/// Tesseract OCR engine implementation
pub struct TesseractEngine {
    // Tesseract instance is created per-call for thread safety
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// Configure Tesseract for a single uniform block of printed text
    fn configure_single_block(mut tesseract: Tesseract) -> Tesseract {
        tesseract.set_page_seg_mode(PageSegMode::PsmSingleBlock);
        tesseract
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String, String> {
        self.recognize_with_lang(image, "eng")
    }

    fn recognize_with_lang(&self, image: &DynamicImage, lang: &str) -> Result<String, String> {
        // Convert DynamicImage to bytes (PNG format for Tesseract)
        let mut img_bytes: Vec<u8> = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut img_bytes),
                image::ImageFormat::Png,
            )
            .map_err(|e| format!("Failed to encode image: {}", e))?;

        // Create and configure Tesseract instance
        let tesseract = Tesseract::new(None, Some(lang))
            .map_err(|e| format!("Failed to create Tesseract instance: {}", e))?;

        let tesseract = Self::configure_single_block(tesseract);

        // Set image data and recognize text
        let text = tesseract
            .set_image_from_mem(&img_bytes)
            .map_err(|e| format!("Failed to set image: {}", e))?
            .get_text()
            .map_err(|e| format!("Failed to recognize text: {}", e))?;

        Ok(text)
    }

    fn is_available() -> bool {
        // Try to create a Tesseract instance with English
        Tesseract::new(None, Some("eng")).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Helper: alternating stripes, not real text but a valid input
    fn create_simple_test_image() -> DynamicImage {
        let img = RgbImage::from_fn(200, 50, |x, _| {
            if x % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_recognize_does_not_fail_on_valid_input() {
        if !TesseractEngine::is_available() {
            println!("Skipping test - Tesseract not available");
            return;
        }

        let engine = TesseractEngine::new();
        let result = engine.recognize(&create_simple_test_image());

        assert!(result.is_ok(), "Recognition should not fail");
    }

    #[test]
    fn test_recognize_blank_image() {
        if !TesseractEngine::is_available() {
            println!("Skipping test - Tesseract not available");
            return;
        }

        let engine = TesseractEngine::new();
        let blank = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, Rgb([255, 255, 255])));

        let result = engine.recognize(&blank);

        // Blank input must not error; the text may be empty or whitespace
        assert!(result.is_ok());
    }

    #[test]
    fn test_recognize_with_english_lang() {
        if !TesseractEngine::is_available() {
            println!("Skipping test - Tesseract not available");
            return;
        }

        let engine = TesseractEngine::new();
        let result = engine.recognize_with_lang(&create_simple_test_image(), "eng");
        assert!(result.is_ok());
    }

    #[test]
    fn test_recognize_with_missing_language_errors() {
        if !TesseractEngine::is_available() {
            println!("Skipping test - Tesseract not available");
            return;
        }

        let engine = TesseractEngine::new();
        let result = engine.recognize_with_lang(&create_simple_test_image(), "not-a-language");
        assert!(result.is_err());
    }
}
