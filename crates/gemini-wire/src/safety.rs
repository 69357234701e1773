//! Safety configuration and reporting types for the Gemini API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of potentially harmful content.
///
/// Wire values the server introduces after this client was built decode to
/// [`HarmCategory::Unknown`] instead of failing, so newer safety ratings stay
/// readable by older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HarmCategory {
    /// Fallback for unrecognized wire values. Input-only: request builders
    /// never produce it.
    #[strum(to_string = "UNKNOWN")]
    Unknown,
    /// Harassment content.
    #[strum(to_string = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech and content.
    #[strum(to_string = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content.
    #[strum(to_string = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content.
    #[strum(to_string = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl Serialize for HarmCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HarmCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "HARM_CATEGORY_HARASSMENT" => Self::Harassment,
            "HARM_CATEGORY_HATE_SPEECH" => Self::HateSpeech,
            "HARM_CATEGORY_SEXUALLY_EXPLICIT" => Self::SexuallyExplicit,
            "HARM_CATEGORY_DANGEROUS_CONTENT" => Self::DangerousContent,
            _ => Self::Unknown,
        })
    }
}

/// Probability that a piece of content falls into a harm category.
///
/// Decodes unrecognized wire values to [`HarmProbability::Unknown`], like
/// [`HarmCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HarmProbability {
    /// Fallback for unrecognized wire values.
    #[strum(to_string = "UNKNOWN")]
    Unknown,
    /// Content has a negligible chance of being unsafe.
    #[strum(to_string = "NEGLIGIBLE")]
    Negligible,
    /// Content has a low chance of being unsafe.
    #[strum(to_string = "LOW")]
    Low,
    /// Content has a medium chance of being unsafe.
    #[strum(to_string = "MEDIUM")]
    Medium,
    /// Content has a high chance of being unsafe.
    #[strum(to_string = "HIGH")]
    High,
}

impl Serialize for HarmProbability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HarmProbability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "NEGLIGIBLE" => Self::Negligible,
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Unknown,
        })
    }
}

/// Blocking threshold applied to a harm category.
///
/// Unlike [`HarmCategory`], an unrecognized wire value here is a decode
/// error.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Threshold is unspecified; the model uses its default.
    #[serde(rename = "HARM_BLOCK_THRESHOLD_UNSPECIFIED")]
    #[strum(to_string = "HARM_BLOCK_THRESHOLD_UNSPECIFIED")]
    Unspecified,
    /// Content with negligible probability of harm is allowed.
    BlockLowAndAbove,
    /// Content with negligible or low probability of harm is allowed.
    BlockMediumAndAbove,
    /// Content is blocked only at high probability of harm.
    BlockOnlyHigh,
    /// All content is allowed regardless of probability.
    BlockNone,
}

/// Pairs a harm category with the threshold at which matching content is
/// blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// The category this setting applies to.
    pub category: HarmCategory,
    /// The blocking threshold for the category.
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// Creates a safety setting.
    #[must_use]
    pub fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }
}

impl From<(HarmCategory, HarmBlockThreshold)> for SafetySetting {
    fn from(value: (HarmCategory, HarmBlockThreshold)) -> Self {
        SafetySetting {
            category: value.0,
            threshold: value.1,
        }
    }
}

/// A list of [`SafetySetting`]s, serialized as a bare JSON array.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[into_iterator(owned, ref)]
pub struct SafetySettings(Vec<SafetySetting>);

impl SafetySettings {
    /// Appends a setting for the given category.
    #[must_use]
    pub fn with_category(mut self, category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        self.0.push((category, threshold).into());
        self
    }
}

impl FromIterator<SafetySetting> for SafetySettings {
    fn from_iter<T: IntoIterator<Item = SafetySetting>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Safety verdict the model reports for one harm category of a piece of
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRating {
    /// The rated category.
    pub category: HarmCategory,
    /// How likely the content is to fall into the category.
    pub probability: HarmProbability,
}
