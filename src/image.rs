//! Base64-encoded image payloads.
//!
//! Every image crossing the API boundary travels as
//! `{"type": "base64", "base64": ..., "format": ...}`. `Base64Image` holds
//! that payload, converts to and from raw bytes, and bridges to files on
//! disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Result;

const DEFAULT_FORMAT: &str = "png";

/// A base64-encoded image plus its format (lowercase file extension).
///
/// The base64 text is not validated on construction; malformed text
/// surfaces as a decode error from [`Base64Image::to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Base64Image {
    base64: String,
    #[serde(default = "default_format")]
    format: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Base64Image {
    /// Wrap already-encoded base64 text.
    pub fn new(base64: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            format: format.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], format: impl Into<String>) -> Self {
        use base64::Engine as _;
        Self::new(
            base64::engine::general_purpose::STANDARD.encode(bytes),
            format,
        )
    }

    /// Read and encode an image file. The format is taken from the
    /// lowercased file extension, falling back to png when there is none.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        Ok(Self::from_bytes(&bytes, format))
    }

    /// Decode back to raw image bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        use base64::Engine as _;
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.base64)?)
    }

    /// Decode and write the image to a file.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    /// The request/response wire form of this image.
    pub fn to_wire(&self) -> Value {
        json!({
            "type": "base64",
            "base64": self.base64,
            "format": self.format,
        })
    }

    /// Rebuild from the wire form. The `type` tag is ignored and a missing
    /// `format` defaults to png.
    pub fn from_wire(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Render as a `data:` URI suitable for embedding.
    pub fn to_data_uri(&self) -> String {
        let mime_type = match self.format.as_str() {
            "png" => "image/png".to_string(),
            "jpg" | "jpeg" => "image/jpeg".to_string(),
            other => format!("image/{}", other),
        };
        format!("data:{};base64,{}", mime_type, self.base64)
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Serializes to the wire form, `type` tag included, so image fields inside
/// request bodies need no special casing (`None` becomes `null`).
impl Serialize for Base64Image {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Base64Image", 3)?;
        state.serialize_field("type", "base64")?;
        state.serialize_field("base64", &self.base64)?;
        state.serialize_field("format", &self.format)?;
        state.end()
    }
}
