/// Wire types for `POST /translate`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RelayError;

/// Which persona instruction the generation call receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    /// Direct, formal translation ("AI").
    #[serde(rename = "ai")]
    Formal,
    /// Friend-like emotional reply ("HI").
    #[serde(rename = "hi")]
    Emotional,
}

impl Tone {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ai" | "formal" => Some(Tone::Formal),
            "hi" | "emotional" => Some(Tone::Emotional),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Tone::Formal => "ai",
            Tone::Emotional => "hi",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Request body as received. Every field is optional so that absence maps to
/// `MissingFields` instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequestBody {
    #[serde(default, alias = "text")]
    pub message: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, rename = "targetLang", alias = "target_lang", alias = "targetLanguage")]
    pub target_lang: Option<String>,
}

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateRequest {
    pub message: String,
    pub tone: Tone,
    #[serde(rename = "targetLang")]
    pub target_lang: String,
}

impl TryFrom<TranslateRequestBody> for TranslateRequest {
    type Error = RelayError;

    fn try_from(body: TranslateRequestBody) -> Result<Self, Self::Error> {
        let message = non_blank(body.message).ok_or(RelayError::MissingFields)?;
        let tone = non_blank(body.tone).ok_or(RelayError::MissingFields)?;
        let target_lang = non_blank(body.target_lang).ok_or(RelayError::MissingFields)?;

        let tone = Tone::parse(&tone).ok_or(RelayError::InvalidTone(tone))?;

        Ok(Self {
            message,
            tone,
            target_lang: target_lang.trim().to_string(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    /// Best-effort label from the detection call, passed through untouched.
    #[serde(rename = "sourceLang", default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}
