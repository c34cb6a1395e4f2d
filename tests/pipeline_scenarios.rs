//! End-to-end scenarios for the preprocessing pipeline.

use textlab::analysis::tagger::PosTag;
use textlab::error::{Result, TextlabError};
use textlab::pipeline::{
    DocumentSet, Pipeline, PipelineConfig, ProcessOptions, ProcessRequest, Stage, TfIdfConfig,
};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_cats_scenario() -> Result<()> {
    let pipeline = Pipeline::default();
    let options = ProcessOptions::with_stages(&[
        Stage::Tokenization,
        Stage::Lowercasing,
        Stage::StopwordRemoval,
        Stage::PosTagging,
    ]);

    let result = pipeline.process("The cats are running quickly.", options, None)?;

    assert_eq!(
        result.tokens,
        Some(strings(&["The", "cats", "are", "running", "quickly"]))
    );
    assert_eq!(
        result.lowercased_text.as_deref(),
        Some("the cats are running quickly.")
    );
    let filtered = result.filtered_tokens.unwrap();
    assert!(!filtered.contains(&"the".to_string()));
    assert!(!filtered.contains(&"are".to_string()));
    assert_eq!(filtered, strings(&["cats", "running", "quickly"]));

    let tags = result.pos_tags.unwrap();
    assert_eq!(tags.len(), 5);
    assert!(tags[1].1.is_noun());
    assert!(tags[3].1.is_verb());
    assert!(result.lemmatized_tokens.is_none());

    Ok(())
}

#[test]
fn test_empty_text_is_rejected() {
    let pipeline = Pipeline::default();
    for text in ["", "   ", "\n\t"] {
        let error = pipeline
            .process(text, ProcessOptions::full(), None)
            .unwrap_err();
        assert!(matches!(error, TextlabError::Validation(_)));
        assert_eq!(error.to_string(), "Please enter some text to process.");
    }
}

#[test]
fn test_no_options_is_rejected() {
    let error = Pipeline::default()
        .process("Some text", ProcessOptions::default(), None)
        .unwrap_err();
    assert!(error.is_validation());
    assert_eq!(
        error.to_string(),
        "Please select at least one processing option."
    );
}

#[test]
fn test_full_preprocessing_populates_everything() -> Result<()> {
    let result = Pipeline::default().process("Dogs run.", ProcessOptions::full(), None)?;

    assert_eq!(
        result.populated_fields(),
        vec![
            "cleaned_text",
            "lowercased_text",
            "tokens",
            "filtered_tokens",
            "lemmatized_tokens",
            "stemmed_tokens",
            "vocabulary",
            "bag_of_words",
            "term_frequency",
            "tfidf",
            "pos_tags",
        ]
    );
    assert_eq!(result.lemmatized_tokens, Some(strings(&["dog", "run"])));
    assert_eq!(
        result.pos_tags,
        Some(vec![
            ("Dogs".to_string(), PosTag::NNS),
            ("run".to_string(), PosTag::VBP),
        ])
    );

    Ok(())
}

#[test]
fn test_full_equals_every_flag() -> Result<()> {
    let pipeline = Pipeline::default();
    let text = "The striped bats were hanging on their feet. Bats sleep!";

    let full = pipeline.process(text, ProcessOptions::full(), None)?;
    let explicit = pipeline.process(text, ProcessOptions::with_stages(&Stage::ALL), None)?;
    assert_eq!(full, explicit);

    Ok(())
}

#[test]
fn test_capitalized_sentence_starts() -> Result<()> {
    let result = Pipeline::default().process(
        "The striped bats were hanging on their feet. Bats sleep!",
        ProcessOptions::with_stages(&[
            Stage::Lemmatization,
            Stage::BagOfWords,
            Stage::TfIdf,
            Stage::PosTagging,
        ]),
        None,
    )?;

    let lemmas = result.lemmatized_tokens.unwrap();
    assert_eq!(lemmas.iter().filter(|lemma| *lemma == "bat").count(), 2);
    assert!(!lemmas.contains(&"bats".to_string()));

    assert_eq!(result.bag_of_words.unwrap().get("bat"), Some(&2));
    assert_eq!(result.tfidf.unwrap().get("bat"), Some(&0.0));

    let tags = result.pos_tags.unwrap();
    let (word, tag) = &tags[8];
    assert_eq!(word, "Bats");
    assert!(!tag.is_proper_noun());

    Ok(())
}

#[test]
fn test_cleaning_strips_markup_and_urls() -> Result<()> {
    let result = Pipeline::default().process(
        "<p>Visit https://x.io now!</p>",
        ProcessOptions::with_stages(&[Stage::Tokenization]),
        None,
    )?;

    assert_eq!(result.cleaned_text.as_deref(), Some("Visit now!"));
    assert_eq!(result.tokens, Some(strings(&["Visit", "now"])));

    Ok(())
}

#[test]
fn test_lemmas_and_stems_differ() -> Result<()> {
    let result = Pipeline::default().process(
        "The studies were better.",
        ProcessOptions::with_stages(&[Stage::Lemmatization, Stage::Stemming]),
        None,
    )?;

    let lemmas = result.lemmatized_tokens.unwrap();
    let stems = result.stemmed_tokens.unwrap();
    assert_eq!(lemmas.len(), stems.len());
    assert_ne!(lemmas, stems);
    assert_eq!(lemmas[0], "study");
    assert_eq!(stems[0], "studi");

    Ok(())
}

#[test]
fn test_tfidf_over_sentences() -> Result<()> {
    let text = "Apples grow. Apples and pears ripen.";
    let result = Pipeline::default().process(
        text,
        ProcessOptions::with_stages(&[Stage::TermFrequency, Stage::TfIdf]),
        None,
    )?;

    let tf = result.term_frequency.unwrap();
    let tfidf = result.tfidf.unwrap();
    assert_eq!(tfidf.get("apples"), Some(&0.0));

    let pears_tf = *tf.get("pears").unwrap();
    let pears = *tfidf.get("pears").unwrap();
    assert!((pears - pears_tf * 2f64.ln()).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_tfidf_single_document() -> Result<()> {
    let config = PipelineConfig {
        tfidf: TfIdfConfig {
            document_set: DocumentSet::Single,
        },
        ..Default::default()
    };
    let result = Pipeline::new(config)?.process(
        "Apples grow. Apples and pears ripen.",
        ProcessOptions::with_stages(&[Stage::TfIdf]),
        None,
    )?;

    let tfidf = result.tfidf.unwrap();
    assert!(!tfidf.is_empty());
    assert!(tfidf.values().all(|score| *score == 0.0));

    Ok(())
}

#[test]
fn test_request_envelope() -> Result<()> {
    let request: ProcessRequest = serde_json::from_str(
        r#"{
            "text": "The quick brown fox jumps over the lazy dog.",
            "options": {"stopword_removal": true, "vocabulary": true},
            "custom_stopwords": ["quick", "lazy"]
        }"#,
    )?;

    let result = Pipeline::default().run(&request)?;
    assert_eq!(
        result.filtered_tokens,
        Some(strings(&["brown", "fox", "jumps", "dog"]))
    );
    assert_eq!(
        result.vocabulary.unwrap().as_slice(),
        &strings(&["brown", "fox", "jumps", "dog"])[..]
    );

    let json = serde_json::to_value(Pipeline::default().run(&request)?)?;
    assert!(json.get("tokens").is_none());
    assert!(json.get("cleaned_text").is_some());

    Ok(())
}
