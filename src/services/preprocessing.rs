use image::{DynamicImage, ImageBuffer, Luma};

/// Image preprocessing for OCR.
///
/// The pipeline is fixed: grayscale conversion, then global binarization
/// with an Otsu-computed threshold. No configuration is exposed.
pub struct PreprocessingService;

impl PreprocessingService {
    /// Full pipeline: grayscale -> Otsu threshold.
    ///
    /// Input must have non-zero width and height; callers validate the
    /// crop before reaching this point.
    pub fn preprocess(image: &DynamicImage) -> Result<DynamicImage, String> {
        if image.width() == 0 || image.height() == 0 {
            return Err("Cannot preprocess an empty image".to_string());
        }

        let gray = Self::to_grayscale(image);
        Ok(Self::threshold(&gray))
    }

    /// Convert image to single-channel luminance
    pub fn to_grayscale(image: &DynamicImage) -> DynamicImage {
        DynamicImage::ImageLuma8(image.to_luma8())
    }

    /// Apply binary thresholding (Otsu's method).
    ///
    /// Output has the same dimensions as the input and contains only
    /// the values 0 and 255.
    pub fn threshold(image: &DynamicImage) -> DynamicImage {
        use imageproc::contrast::otsu_level;

        let gray_img = image.to_luma8();
        let threshold_value = otsu_level(&gray_img);

        let binary = ImageBuffer::from_fn(gray_img.width(), gray_img.height(), |x, y| {
            let pixel = gray_img.get_pixel(x, y);
            if pixel[0] > threshold_value {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });

        DynamicImage::ImageLuma8(binary)
    }
}
