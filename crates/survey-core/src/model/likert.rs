//! Five-point Likert scale

use serde::{Deserialize, Serialize};

use crate::errors::SurveyError;

/// Label used for stored values that fall outside the scale
pub const NO_RESPONSE_LABEL: &str = "No Response";

/// A point on the five-point agreement scale
///
/// Ordering follows the scale, so sorting values sorts from
/// "Strongly Disagree" to "Strongly Agree".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum LikertValue {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl LikertValue {
    /// Every scale point in order
    pub const ALL: [LikertValue; 5] = [
        LikertValue::StronglyDisagree,
        LikertValue::Disagree,
        LikertValue::Neutral,
        LikertValue::Agree,
        LikertValue::StronglyAgree,
    ];

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            LikertValue::StronglyDisagree => "Strongly Disagree",
            LikertValue::Disagree => "Disagree",
            LikertValue::Neutral => "Neutral",
            LikertValue::Agree => "Agree",
            LikertValue::StronglyAgree => "Strongly Agree",
        }
    }

    pub fn is_valid(value: i64) -> bool {
        Self::try_from(value).is_ok()
    }

    /// Parse an exact label, e.g. "Strongly Agree"
    pub fn from_label(label: &str) -> Option<LikertValue> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    /// Label for any stored integer; off-scale values read as "No Response"
    pub fn label_for(value: i64) -> &'static str {
        Self::try_from(value)
            .map(LikertValue::label)
            .unwrap_or(NO_RESPONSE_LABEL)
    }
}

impl TryFrom<i64> for LikertValue {
    type Error = SurveyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LikertValue::StronglyDisagree),
            2 => Ok(LikertValue::Disagree),
            3 => Ok(LikertValue::Neutral),
            4 => Ok(LikertValue::Agree),
            5 => Ok(LikertValue::StronglyAgree),
            other => Err(SurveyError::InvalidAnswerValue { value: other }),
        }
    }
}

impl From<LikertValue> for i64 {
    fn from(value: LikertValue) -> Self {
        value.value()
    }
}

impl std::str::FromStr for LikertValue {
    type Err = SurveyError;

    /// Accepts either the numeric code or the label (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return LikertValue::try_from(n);
        }
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SurveyError::UnknownLikertLabel {
                label: trimmed.to_string(),
            })
    }
}

impl std::fmt::Display for LikertValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
