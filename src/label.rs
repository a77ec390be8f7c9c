//! Line labels emitted by the sequence labeler

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification assigned to each content line of an email
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// Opening formula (お世話になっております, 拝啓, ...)
    Greeting,
    /// Substantive message content
    Body,
    /// Closing formula (よろしくお願いいたします, 敬具, ...)
    Closing,
    /// Signature block line (name, company, contact info)
    Signature,
    /// Quoted content from an earlier message
    Quote,
    /// Headers, noise, anything unclassifiable
    Other,
}

/// All labels in a fixed order
pub const LABELS: [Label; 6] = [
    Label::Greeting,
    Label::Body,
    Label::Closing,
    Label::Signature,
    Label::Quote,
    Label::Other,
];

impl Label {
    /// Wire name used in model files and training data
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "GREETING",
            Self::Body => "BODY",
            Self::Closing => "CLOSING",
            Self::Signature => "SIGNATURE",
            Self::Quote => "QUOTE",
            Self::Other => "OTHER",
        }
    }

    /// Parse a wire name back into a label
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GREETING" => Some(Self::Greeting),
            "BODY" => Some(Self::Body),
            "CLOSING" => Some(Self::Closing),
            "SIGNATURE" => Some(Self::Signature),
            "QUOTE" => Some(Self::Quote),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
