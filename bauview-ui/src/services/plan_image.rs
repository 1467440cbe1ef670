//! Reference plan image loading
//!
//! The plan is fetched (or uploaded) as raw bytes, decoded once to
//! validate it and capture its pixel dimensions, and re-served to the
//! browser unchanged. Match positions live in this image's pixel space.

use bauview_common::{Error, Result};
use image::ImageFormat;

/// Decoded reference plan image
#[derive(Debug, Clone)]
pub struct PlanImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub width: u32,
    pub height: u32,
}

impl PlanImage {
    /// Decode fetched or uploaded bytes. PNG and JPEG are accepted.
    pub fn decode(bytes: Vec<u8>) -> Result<Self> {
        let format =
            image::guess_format(&bytes).map_err(|e| Error::ImageDecode(e.to_string()))?;

        let content_type = match format {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            other => {
                return Err(Error::ImageDecode(format!(
                    "unsupported image format {:?}",
                    other
                )))
            }
        };

        let decoded =
            image::load_from_memory(&bytes).map_err(|e| Error::ImageDecode(e.to_string()))?;

        Ok(Self {
            content_type,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }

    /// Fetch the plan from its raw-file URL
    pub async fn fetch(http_client: &reqwest::Client, url: &str) -> Result<Self> {
        let response = http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::ImageUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ImageUnavailable(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::ImageUnavailable(e.to_string()))?;

        Self::decode(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png_captures_dimensions() {
        let plan_image = PlanImage::decode(sample_png(12, 7)).unwrap();
        assert_eq!(plan_image.width, 12);
        assert_eq!(plan_image.height, 7);
        assert_eq!(plan_image.content_type, "image/png");
    }

    #[test]
    fn test_decode_rejects_non_image_bytes() {
        let result = PlanImage::decode(b"not an image".to_vec());
        assert!(matches!(result, Err(Error::ImageDecode(_))));
    }

    #[test]
    fn test_decode_keeps_original_bytes() {
        let bytes = sample_png(3, 3);
        let plan_image = PlanImage::decode(bytes.clone()).unwrap();
        assert_eq!(plan_image.bytes, bytes);
    }
}
