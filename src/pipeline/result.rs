use serde::{Deserialize, Serialize};

use crate::analysis::tagger::TaggedToken;
use crate::frequency::{FrequencyTable, Vocabulary};

/// Every artifact a request produced.
///
/// Fields of stages that were not requested are `None` and left out of the
/// JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowercased_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmatized_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stemmed_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_of_words: Option<FrequencyTable<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_frequency: Option<FrequencyTable<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<FrequencyTable<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_tags: Option<Vec<TaggedToken>>,
}

impl ProcessResult {
    pub fn new(original_text: impl Into<String>) -> Self {
        ProcessResult {
            original_text: original_text.into(),
            ..Default::default()
        }
    }

    /// Names of the populated optional fields, in declaration order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("cleaned_text", self.cleaned_text.is_some()),
            ("lowercased_text", self.lowercased_text.is_some()),
            ("tokens", self.tokens.is_some()),
            ("filtered_tokens", self.filtered_tokens.is_some()),
            ("lemmatized_tokens", self.lemmatized_tokens.is_some()),
            ("stemmed_tokens", self.stemmed_tokens.is_some()),
            ("vocabulary", self.vocabulary.is_some()),
            ("bag_of_words", self.bag_of_words.is_some()),
            ("term_frequency", self.term_frequency.is_some()),
            ("tfidf", self.tfidf.is_some()),
            ("pos_tags", self.pos_tags.is_some()),
        ];
        fields
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::PosTag;

    #[test]
    fn test_absent_fields_are_omitted() {
        let mut result = ProcessResult::new("Hi there");
        result.tokens = Some(vec!["Hi".to_string(), "there".to_string()]);

        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["original_text"], "Hi there");
        assert_eq!(json["tokens"], serde_json::json!(["Hi", "there"]));
        assert!(!object.contains_key("tfidf"));
    }

    #[test]
    fn test_round_trip() {
        let mut result = ProcessResult::new("Dogs run");
        result.pos_tags = Some(vec![
            ("Dogs".to_string(), PosTag::NNS),
            ("run".to_string(), PosTag::VBP),
        ]);
        result.bag_of_words = Some([("dog", 1), ("run", 1)].into_iter().collect());

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""pos_tags":[["Dogs","NNS"],["run","VBP"]]"#));

        let parsed: ProcessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(parsed.populated_fields(), vec!["bag_of_words", "pos_tags"]);
    }
}
