//! Core content types for the Gemini API
//!
//! This module contains the fundamental content types exchanged with the API:
//! a [`Content`] is one turn of a conversation, made of ordered [`Part`]s
//! carrying text, inline binary data, or references to hosted files.

pub mod part;
pub mod types;

// Re-export the main types for convenient access
pub use part::{Base64, Blob, FileData, Part};
pub use types::{Content, ContentError};
