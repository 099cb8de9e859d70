//! Photo ingestion.
//!
//! Reads a selected image file and wraps it as a base64 data URI, usable for
//! on-screen preview and for embedding into the PDF artifact. A file that
//! cannot be read leaves the draft's photo unset; there is no size or type
//! gate beyond sniffing the container format for the MIME label.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::ImageFormat;

use crate::error::{ReportError, Result};
use crate::model::Photo;

/// Read an image file and wrap it as a selected photo.
pub async fn ingest(path: &Path) -> Result<Photo> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ReportError::PhotoLoad(format!("{}: {}", path.display(), e)))?;
    let data_uri = to_data_uri(&bytes);
    Ok(Photo::Selected { bytes, data_uri })
}

/// Encode raw image bytes as a `data:<mime>;base64,...` URI.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), BASE64.encode(bytes))
}

/// MIME label for the data URI, from the image container magic.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Bmp) => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Decode the payload of a data URI back into raw bytes.
pub fn decode_data_uri(data_uri: &str) -> Option<Vec<u8>> {
    let (_, payload) = data_uri.split_once(";base64,")?;
    BASE64.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn test_data_uri_png() {
        let uri = to_data_uri(PNG_MAGIC);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_jpeg() {
        let uri = to_data_uri(JPEG_MAGIC);
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_data_uri_unknown_bytes() {
        let uri = to_data_uri(b"not an image");
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_data_uri_roundtrip() {
        let uri = to_data_uri(PNG_MAGIC);
        let bytes = decode_data_uri(&uri).expect("payload should decode");
        assert_eq!(bytes, PNG_MAGIC);
    }

    #[test]
    fn test_decode_rejects_non_data_uri() {
        assert_eq!(decode_data_uri("https://example.edu/photo.png"), None);
        assert_eq!(decode_data_uri(""), None);
    }

    #[tokio::test]
    async fn test_ingest_missing_file() {
        let result = ingest(Path::new("/nonexistent/photo.png")).await;
        assert!(matches!(result, Err(ReportError::PhotoLoad(_))));
    }

    #[tokio::test]
    async fn test_ingest_reads_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let photo = ingest(&path).await.expect("ingest failed");
        assert!(photo.is_set());
        assert!(photo
            .data_uri()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }
}
