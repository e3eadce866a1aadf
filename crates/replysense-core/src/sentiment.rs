//! Domain sentiment labels and the static model-output label map.
//!
//! The classifier emits raw tags in the HuggingFace default vocabulary
//! (`LABEL_0`, `LABEL_1`, `LABEL_2`); callers translate them to domain
//! labels here. The index order must match the fine-tune's label encoding
//! (negative=0, neutral=1, positive=2).

use serde::{Deserialize, Serialize};

/// Number of classes the classifier must emit.
pub const LABEL_COUNT: usize = 3;

/// Domain sentiment label for a classified reply.
///
/// Serializes as the lowercase string (`"negative"`, `"neutral"`,
/// `"positive"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All labels in model-index order.
    pub const ALL: [Sentiment; LABEL_COUNT] =
        [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }

    /// Label for a model class index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Translate the model's raw internal tag to a domain label.
    ///
    /// Unrecognized tags collapse to [`Sentiment::Neutral`] rather than
    /// erroring; a caller never sees a raw tag.
    pub fn from_internal_tag(tag: &str) -> Self {
        match tag {
            "LABEL_0" => Self::Negative,
            "LABEL_1" => Self::Neutral,
            "LABEL_2" => Self::Positive,
            _ => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_order_matches_encoding() {
        assert_eq!(Sentiment::from_index(0), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_index(1), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_index(2), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_index(3), None);
    }

    #[test]
    fn internal_tags_map_to_domain_labels() {
        assert_eq!(Sentiment::from_internal_tag("LABEL_0"), Sentiment::Negative);
        assert_eq!(Sentiment::from_internal_tag("LABEL_1"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_internal_tag("LABEL_2"), Sentiment::Positive);
    }

    #[test]
    fn unknown_tag_defaults_to_neutral() {
        assert_eq!(Sentiment::from_internal_tag("LABEL_9"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_internal_tag("positive"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_internal_tag(""), Sentiment::Neutral);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::from_str::<Sentiment>("\"negative\"").unwrap(),
            Sentiment::Negative
        );
    }
}
