use serde::{Deserialize, Serialize};

use super::options::ProcessOptions;

/// Body of a selective processing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub text: String,
    #[serde(default)]
    pub options: ProcessOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_stopwords: Option<Vec<String>>,
}

/// Body of a full preprocessing request; any `options` sent are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_stopwords: Option<Vec<String>>,
}

impl From<FullRequest> for ProcessRequest {
    fn from(request: FullRequest) -> Self {
        ProcessRequest {
            text: request.text,
            options: ProcessOptions::full(),
            custom_stopwords: request.custom_stopwords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request() {
        let request: ProcessRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.text, "hello");
        assert_eq!(request.options, ProcessOptions::default());
        assert!(request.custom_stopwords.is_none());
    }

    #[test]
    fn test_full_request_forces_full_mode() {
        let full: FullRequest = serde_json::from_str(
            r#"{"text": "Dogs run.", "options": {"tf": true}, "custom_stopwords": ["dogs"]}"#,
        )
        .unwrap();
        let request = ProcessRequest::from(full);

        assert_eq!(request.options, ProcessOptions::full());
        assert_eq!(request.custom_stopwords, Some(vec!["dogs".to_string()]));
    }
}
