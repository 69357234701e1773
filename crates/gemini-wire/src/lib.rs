#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

pub mod content;
pub mod safety;

// Re-export content and part types
pub use crate::content::{Base64, Blob, Content, ContentError, FileData, Part};

// Re-export safety types
pub use crate::safety::{
    HarmBlockThreshold, HarmCategory, HarmProbability, SafetyRating, SafetySetting, SafetySettings,
};
