use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// A string whose content is base64-encoded bytes.
///
/// Purely a semantic marker; the wire carries it as an ordinary JSON string.
pub type Base64 = String;

/// One element of a [`Content`](super::Content) turn.
///
/// Exactly one variant is active per instance. On the wire a part is a JSON
/// object identified by which key it carries, not by a `type` tag:
/// `{"text": ...}`, `{"inline_data": {...}}` or `{"file_data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text content.
    Text {
        /// The text itself.
        text: String,
    },
    /// Binary payload carried inline in the request.
    InlineData {
        /// MIME type and base64 data of the payload.
        inline_data: Blob,
    },
    /// Reference to externally hosted binary content.
    FileData {
        /// MIME type and URI of the hosted file.
        file_data: FileData,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns the text if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text { text } = self {
            Some(text)
        } else {
            None
        }
    }

    /// Returns the blob if this is an inline-data part.
    #[must_use]
    pub fn as_inline_data(&self) -> Option<&Blob> {
        if let Self::InlineData { inline_data } = self {
            Some(inline_data)
        } else {
            None
        }
    }

    /// Returns the file reference if this is a file-data part.
    #[must_use]
    pub fn as_file_data(&self) -> Option<&FileData> {
        if let Self::FileData { file_data } = self {
            Some(file_data)
        } else {
            None
        }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

impl From<Blob> for Part {
    fn from(inline_data: Blob) -> Self {
        Self::InlineData { inline_data }
    }
}

impl From<FileData> for Part {
    fn from(file_data: FileData) -> Self {
        Self::FileData { file_data }
    }
}

/// There is no `type` tag on the wire, so the variant is selected by which
/// known key the object carries. Priority when several coexist:
/// `text` over `inline_data` over `file_data`. A matched key with a malformed
/// value is an error, never a fall-through to the next key; an object with
/// none of the known keys is an error (no unknown-part fallback exists).
impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        if let Some(value) = object.remove("text") {
            serde_json::from_value(value)
                .map(|text| Self::Text { text })
                .map_err(de::Error::custom)
        } else if let Some(value) = object.remove("inline_data") {
            serde_json::from_value(value)
                .map(|inline_data| Self::InlineData { inline_data })
                .map_err(de::Error::custom)
        } else if let Some(value) = object.remove("file_data") {
            serde_json::from_value(value)
                .map(|file_data| Self::FileData { file_data })
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom("Unknown Part type"))
        }
    }
}

/// Binary payload carried inline, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// MIME type of the encoded bytes.
    pub mime_type: String,
    /// The bytes, base64-encoded.
    pub data: Base64,
}

impl Blob {
    /// Creates a blob from an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<Base64>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Creates a blob from raw bytes, base64-encoding them.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes.as_ref());
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Reads a file and creates a blob from it, guessing the MIME type from
    /// the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self::from_bytes(mime_type, bytes))
    }
}

/// Reference to binary content hosted outside the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    /// MIME type of the referenced content.
    pub mime_type: String,
    /// URI of the hosted content.
    pub file_uri: String,
}

impl FileData {
    /// Creates a file reference.
    pub fn new(mime_type: impl Into<String>, file_uri: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            file_uri: file_uri.into(),
        }
    }
}
