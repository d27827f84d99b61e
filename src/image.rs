//! Base64 image codec.
//!
//! Converts image files to and from base64 text for embedding in text-based
//! payloads (JSON bodies, HTML). Standard alphabet, no line wrapping.

use crate::error::{MlkitError, Result};
use crate::fs::atomic_write;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::{error, info};

/// Decode a base64 string and write the raw bytes to `dest`.
///
/// Overwrites any existing file at `dest` (atomically).
///
/// # Errors
///
/// * [`MlkitError::Parse`] if the input is not valid standard-alphabet base64
/// * [`MlkitError::Filesystem`] if the destination cannot be written
pub fn decode_image<P: AsRef<Path>>(encoded: &str, dest: P) -> Result<()> {
    let dest = dest.as_ref();

    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        error!("failed to decode base64 image data: {}", e);
        MlkitError::Parse {
            context: "base64 image data".to_string(),
            message: e.to_string(),
        }
    })?;

    atomic_write(dest, &bytes)?;

    info!("decoded image written to '{}'", dest.display());
    Ok(())
}

/// Read the file at `path` and return its content as base64 text.
///
/// # Errors
///
/// [`MlkitError::NotFound`] if the source file does not exist.
pub fn encode_image_base64<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| {
        let err = MlkitError::from_io(path, e);
        error!("failed to read image file '{}': {}", path.display(), err);
        err
    })?;

    let encoded = STANDARD.encode(bytes);
    info!("encoded image file '{}' ({} base64 chars)", path.display(), encoded.len());
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn encode_then_decode_round_trips() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("input.png");
        let dest = dir.path().join("output.png");

        // A fake PNG header plus arbitrary payload bytes.
        let mut content = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        content.extend((0u8..=255).cycle().take(1000));
        fs::write(&source, &content).unwrap();

        let encoded = encode_image_base64(&source).unwrap();
        decode_image(&encoded, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), content);
    }

    #[test]
    fn encode_produces_standard_alphabet_without_wrapping() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("input.jpg");
        fs::write(&source, vec![0xffu8; 200]).unwrap();

        let encoded = encode_image_base64(&source).unwrap();

        assert!(!encoded.contains('\n'));
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn decode_overwrites_existing_destination() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("image.png");
        fs::write(&dest, b"stale bytes").unwrap();

        decode_image("aGVsbG8=", &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"hello");
    }

    #[test]
    fn decode_malformed_input_is_parse_error() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("image.png");

        let err = decode_image("not*valid*base64!", &dest).unwrap_err();
        assert!(matches!(err, MlkitError::Parse { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn decode_empty_input_writes_empty_file() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("empty.png");

        decode_image("", &dest).unwrap();

        assert!(fs::read(&dest).unwrap().is_empty());
    }

    #[test]
    fn encode_missing_file_is_not_found() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let err = encode_image_base64(dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, MlkitError::NotFound(_)));
    }
}
