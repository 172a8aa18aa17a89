pub mod engine;
pub mod tesseract;

// Re-export main types
pub use engine::OcrEngine;
pub use tesseract::TesseractEngine;

use image::DynamicImage;

/// Published when the trimmed recognition output is empty
pub const NO_TEXT_SENTINEL: &str = "[No text detected or text too blurry]";

/// Run single-block recognition and normalize the outcome for display.
///
/// The recognized text is trimmed of surrounding whitespace; an empty
/// result is replaced with the fixed sentinel, and an engine failure is
/// converted to an error message. Synchronous and blocking - no retry,
/// no timeout.
pub fn recognize_block(engine: &dyn OcrEngine, image: &DynamicImage) -> String {
    match engine.recognize(image) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                NO_TEXT_SENTINEL.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine stub returning a fixed response
    struct StubEngine {
        response: Result<String, String>,
    }

    impl OcrEngine for StubEngine {
        fn recognize(&self, _image: &DynamicImage) -> Result<String, String> {
            self.response.clone()
        }

        fn recognize_with_lang(
            &self,
            image: &DynamicImage,
            _lang: &str,
        ) -> Result<String, String> {
            self.recognize(image)
        }

        fn is_available() -> bool {
            true
        }
    }

    fn test_image() -> DynamicImage {
        DynamicImage::new_luma8(10, 10)
    }

    #[test]
    fn test_output_is_trimmed() {
        let engine = StubEngine {
            response: Ok("  Hello World \n\n".to_string()),
        };
        assert_eq!(recognize_block(&engine, &test_image()), "Hello World");
    }

    #[test]
    fn test_empty_output_becomes_sentinel() {
        let engine = StubEngine {
            response: Ok(String::new()),
        };
        assert_eq!(
            recognize_block(&engine, &test_image()),
            "[No text detected or text too blurry]"
        );
    }

    #[test]
    fn test_whitespace_only_output_becomes_sentinel() {
        let engine = StubEngine {
            response: Ok(" \n\t \n".to_string()),
        };
        assert_eq!(recognize_block(&engine, &test_image()), NO_TEXT_SENTINEL);
    }

    #[test]
    fn test_engine_failure_becomes_error_message() {
        let engine = StubEngine {
            response: Err("engine unavailable".to_string()),
        };
        assert_eq!(
            recognize_block(&engine, &test_image()),
            "Error: engine unavailable"
        );
    }
}
