//! Data-URI assets
//!
//! Binary files (images, audio) are stored inline beside their record as
//! `data:<media type>;base64,<payload>` text.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Media type used when the bytes are not recognised
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// A binary asset encoded inline as a data-URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encode bytes, sniffing the media type from magic bytes
    pub fn encode(bytes: &[u8]) -> Self {
        let media_type = infer::get(bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or(FALLBACK_MEDIA_TYPE);
        Self::with_media_type(media_type, bytes)
    }

    /// Encode bytes with an explicit media type
    pub fn with_media_type(media_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
    }

    /// Wrap existing data-URI text
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.starts_with("data:") {
            return Err(Error::InvalidAsset("missing data: scheme".to_string()));
        }
        if !text.contains(',') {
            return Err(Error::InvalidAsset("missing payload separator".to_string()));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn header(&self) -> &str {
        let rest = self.0.strip_prefix("data:").unwrap_or(&self.0);
        rest.split_once(',').map(|(header, _)| header).unwrap_or(rest)
    }

    /// Media type from the header, e.g. `image/png`
    pub fn media_type(&self) -> &str {
        let media_type = self.header().split(';').next().unwrap_or_default();
        if media_type.is_empty() {
            FALLBACK_MEDIA_TYPE
        } else {
            media_type
        }
    }

    /// Decoded payload bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self
            .0
            .split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| Error::InvalidAsset("missing payload separator".to_string()))?;

        if self.header().ends_with(";base64") {
            STANDARD
                .decode(payload)
                .map_err(|e| Error::InvalidAsset(format!("bad base64 payload: {}", e)))
        } else {
            Ok(payload.as_bytes().to_vec())
        }
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read a file and encode it as a data-URI
///
/// The read is asynchronous; a submit that needs the asset awaits this
/// first. Dropping the future abandons the capture.
pub async fn capture_file(path: impl AsRef<Path>) -> Result<DataUri> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let asset = DataUri::encode(&bytes);
    debug!(
        "Captured {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        asset.media_type()
    );
    Ok(asset)
}
