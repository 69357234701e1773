use bon::Builder;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

use super::part::{Blob, FileData, Part};

/// Wire default for [`Content::role`].
fn default_role() -> String {
    "user".to_string()
}

/// Errors that can occur when working with content values.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Error during serialization or deserialization of JSON data.
    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// The base structured datatype containing multi-part content of a message.
///
/// A `Content` includes a `role` field designating the producer of the
/// `Content` and a `parts` field containing multi-part data that makes up the
/// content of the message turn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
pub struct Content {
    /// Ordered `Part`s that constitute a single message. Parts may have
    /// different MIME types, and their order is interpreted in sequence.
    #[builder(field = Vec::new())]
    pub parts: Vec<Part>,
    /// The producer of the content, `"user"` unless stated otherwise. The
    /// endpoint expects the field even at its default, so it is always
    /// serialized; kept as a plain string so role values this client does not
    /// know about pass through unchanged.
    #[serde(default = "default_role")]
    #[builder(default = default_role(), into)]
    pub role: String,
}

/// Manual `Serialize` impl: emits `role` before `parts` to match the wire
/// format, independent of the struct's declaration order (which is
/// constrained by the `bon` builder's member-ordering rules).
impl Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Content", 2)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("parts", &self.parts)?;
        state.end()
    }
}

impl Content {
    /// Creates a new `Content` with the given role and parts.
    pub fn new(role: impl Into<String>, parts: impl IntoIterator<Item = impl Into<Part>>) -> Self {
        Self {
            role: role.into(),
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a user `Content` containing a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: default_role(),
            parts: vec![Part::text(text)],
        }
    }

    /// Creates a user `Content` containing a single inline-data part,
    /// constructed from the provided data (base64-encoded) and MIME type.
    #[must_use]
    pub fn inline_data(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let blob = Blob::new(mime_type, data);
        Self {
            role: default_role(),
            parts: vec![blob.into()],
        }
    }

    /// Creates a user `Content` containing a single file-data part,
    /// constructed from a file URI and a MIME type.
    #[must_use]
    pub fn file_data(file_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let file_data = FileData::new(mime_type, file_uri);
        Self {
            role: default_role(),
            parts: vec![file_data.into()],
        }
    }

    /// Decodes a `Content` from an already-parsed JSON tree.
    ///
    /// # Errors
    /// Returns a [`ContentError::SerializationError`] if the tree does not
    /// match the wire shape.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ContentError> {
        serde_json::from_value(value).map_err(ContentError::SerializationError)
    }

    /// Encodes this `Content` into a JSON tree.
    ///
    /// # Errors
    /// Returns a [`ContentError::SerializationError`] if encoding fails.
    pub fn to_json_value(&self) -> Result<serde_json::Value, ContentError> {
        serde_json::to_value(self).map_err(ContentError::SerializationError)
    }

    /// Returns a reference to the vector of parts in the content.
    #[must_use]
    pub fn parts(&self) -> &Vec<Part> {
        &self.parts
    }

    /// Returns a mutable reference to the vector of parts in the content.
    pub fn parts_mut(&mut self) -> &mut Vec<Part> {
        &mut self.parts
    }

    /// Adds a new part to the end of the content's parts vector.
    pub fn push(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }
}

impl<S: content_builder::State> ContentBuilder<S> {
    /// Sets the parts of the content, consuming an iterator of items
    /// convertible to `Part`.
    pub fn parts(mut self, parts: impl IntoIterator<Item = impl Into<Part>>) -> Self {
        self.parts = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single part to the content.
    pub fn part(mut self, part: impl Into<Part>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Adds a single text part to the content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::text(text));
        self
    }

    /// Adds a single inline-data part to the content.
    pub fn blob(mut self, data: impl Into<String>, mime: impl Into<String>) -> Self {
        self.parts.push(Blob::new(mime, data).into());
        self
    }

    /// Adds a single file-data part to the content.
    pub fn file_data(mut self, file_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        self.parts.push(FileData::new(mime_type, file_uri).into());
        self
    }
}

/// Creates a user `Content` from an iterator of `Part`s.
impl FromIterator<Part> for Content {
    fn from_iter<T: IntoIterator<Item = Part>>(iter: T) -> Self {
        Self::builder().parts(iter).build()
    }
}

/// Creates a user `Content` containing a single text part from a string slice.
impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::text(value)
    }
}

/// Creates a user `Content` containing a single text part from a `String`.
impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::text(value)
    }
}

/// Creates a user `Content` containing a single file-data part.
impl From<FileData> for Content {
    fn from(value: FileData) -> Self {
        Content::builder().part(value).build()
    }
}

impl From<Content> for Vec<Content> {
    fn from(value: Content) -> Self {
        vec![value]
    }
}
