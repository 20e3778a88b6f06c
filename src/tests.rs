use crate::{analyze, clean, restore, store, Label, Model, ModelFormat, Scorer, Trainer, NEUTRAL};
use std::sync::Arc;

/// 50 positive and 50 negative two-token documents over a 100-word
/// vocabulary. "great" appears in ten positive documents and no negative one.
fn balanced_corpus() -> Vec<(String, Label)> {
    let mut docs = Vec::new();
    for i in 0..50 {
        let first = if i < 10 {
            "great".to_string()
        } else {
            format!("posword{}", i % 20)
        };
        docs.push((format!("{} shared{}", first, i), Label::Positive));
    }
    for j in 0..50 {
        docs.push((format!("negword{} shared{}", j % 29, j), Label::Negative));
    }
    docs
}

fn train(docs: &[(String, Label)]) -> Model {
    let mut trainer = Trainer::new();
    trainer.ingest_all(docs.iter().map(|(text, label)| (text.as_str(), *label)));
    trainer.finish().unwrap()
}

#[test]
fn test_end_to_end_great_is_positive() {
    let model = train(&balanced_corpus());
    assert_eq!(model.vocabulary_size(), 100);
    assert_eq!(model.count_docs(Label::Positive), 50);
    assert_eq!(model.count_docs(Label::Negative), 50);

    let great = model.word("great").unwrap();
    assert_eq!(great.count_positive, 10);
    assert_eq!(great.count_negative, 0);

    let scorer = Scorer::new(&model).unwrap();
    assert!(scorer.sentiment_of_word("great") > 0.9);
    assert_eq!(scorer.sentiment_of_sentence("this is a great great movie"), 1.0);
}

#[test]
fn test_training_is_deterministic() {
    let docs = balanced_corpus();
    let first = train(&docs);
    let second = train(&docs);

    assert_eq!(first, second);
    let a = store::to_bytes(&first, ModelFormat::Json).unwrap();
    let b = store::to_bytes(&second, ModelFormat::Json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_extra_positive_occurrence_raises_probability() {
    let docs = balanced_corpus();
    let before = train(&docs);

    let mut trainer = Trainer::resume(before.clone());
    trainer.ingest("great", Label::Positive);
    let after = trainer.finish().unwrap();

    assert_eq!(before.vocabulary_size(), after.vocabulary_size());
    assert_eq!(
        before.word("great").unwrap().count_negative,
        after.word("great").unwrap().count_negative
    );
    assert!(
        after.word("great").unwrap().probability_positive
            > before.word("great").unwrap().probability_positive
    );
}

#[test]
fn test_neutral_default_for_unseen_and_short_words() {
    let model = train(&balanced_corpus());
    let scorer = Scorer::new(&model).unwrap();

    for word in ["a", "is", "zz", "unseenword", "movie"] {
        assert_eq!(scorer.sentiment_of_word(word), NEUTRAL, "{}", word);
    }
}

#[test]
fn test_analysis_segments_and_words() {
    let model = train(&balanced_corpus());

    let analysis = analyze(&model, "I am happy. I am not sad!").unwrap();
    assert_eq!(analysis.sentences.len(), 2);
    assert_eq!(analysis.sentences[0].sentence, "I am happy");
    assert_eq!(analysis.sentences[1].sentence, "I am not sad");
    let words: Vec<&str> = analysis.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["i", "am", "happy", "i", "am", "not", "sad"]);

    let analysis = analyze(&model, "Great great movie").unwrap();
    assert!(analysis.sentences.is_empty());
    assert_eq!(analysis.words.len(), 3);
    assert_eq!(analysis.words[0].score, analysis.words[1].score);
    assert_eq!(analysis.score, 1.0);
    assert!(analysis.is_positive());
}

#[test]
fn test_document_score_uses_whole_text() {
    let model = train(&balanced_corpus());
    let scorer = Scorer::new(&model).unwrap();

    // one positive sentence, one sentence with no known words
    let analysis = scorer.analyze("great great. nothing here!");
    assert_eq!(analysis.sentences[0].score, 1.0);
    assert_eq!(analysis.sentences[1].score, 0.0);
    assert_eq!(analysis.score, 1.0);
}

#[test]
fn test_long_documents_do_not_underflow() {
    let model = train(&balanced_corpus());
    let scorer = Scorer::new(&model).unwrap();

    let long_positive = vec!["great"; 5_000].join(" ");
    let likelihood = scorer.log_likelihood(&long_positive);
    assert!(likelihood.positive.is_finite());
    assert!(likelihood.negative.is_finite());
    assert_eq!(scorer.sentiment_of_sentence(&long_positive), 1.0);

    let long_negative = (0..5_000)
        .map(|i| format!("negword{}", i % 29))
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(scorer.sentiment_of_sentence(&long_negative), 0.0);
    assert!(scorer.log_odds(&long_negative) < 0.0);
}

#[test]
fn test_shared_model_scores_concurrently() {
    let model = Arc::new(train(&balanced_corpus()));
    let expected = Scorer::new(&model).unwrap().sentiment_of_word("great");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = Arc::clone(&model);
            std::thread::spawn(move || {
                let scorer = Scorer::new(&model).unwrap();
                (0..100)
                    .map(|_| scorer.sentiment_of_word("great"))
                    .fold(0.0_f64, f64::max)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_restore_from_json_bytes() {
    let model = train(&balanced_corpus());
    let bytes = store::to_bytes(&model, ModelFormat::Json).unwrap();
    let restored = restore(&bytes).unwrap();

    assert_eq!(restored, model);
    let scorer = Scorer::new(&restored).unwrap();
    assert!(scorer.sentiment_of_word("great") > 0.9);
}

#[test]
fn test_cleaned_training_text() {
    let mut trainer = Trainer::new();
    trainer.ingest(&clean("I LOVE this, it's AWESOME!!!"), Label::Positive);
    trainer.ingest(&clean("I hate this; it's awful..."), Label::Negative);
    let model = trainer.finish().unwrap();

    assert!(model.word("awesome").is_some());
    assert!(model.word("its").is_some());
    assert!(model.word("AWESOME").is_none());

    let scorer = Scorer::new(&model).unwrap();
    assert_eq!(scorer.sentiment_of_sentence(&clean("Awesome!")), 1.0);
    assert_eq!(scorer.sentiment_of_sentence(&clean("Awful.")), 0.0);
}
