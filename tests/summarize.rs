//! End-to-end summarization behavior

use sentrank::{
    page_rank, rank_sentences, sentence_tokenize, summarize, EmbeddingProvider, Error,
    HashingEmbedder, Result, SimilarityMatrix, StandardPageRank, Summarizer, SummarizerConfig,
};

fn five_sentences() -> Vec<String> {
    [
        "Intro sentence.",
        "Second most central.",
        "A side remark.",
        "The central claim.",
        "Closing words.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Sentence 3 is most similar to everything, sentence 1 next
fn five_sentence_matrix() -> SimilarityMatrix {
    SimilarityMatrix::new(vec![
        vec![1.0, 0.1, 0.1, 0.5, 0.1],
        vec![0.1, 1.0, 0.1, 0.8, 0.1],
        vec![0.1, 0.1, 1.0, 0.5, 0.1],
        vec![0.5, 0.8, 0.5, 1.0, 0.5],
        vec![0.1, 0.1, 0.1, 0.5, 1.0],
    ])
    .unwrap()
}

#[test]
fn top_one_is_the_most_central_sentence() {
    let summary = rank_sentences(
        &StandardPageRank::default(),
        five_sentences(),
        five_sentence_matrix(),
        1,
    )
    .unwrap();
    assert_eq!(summary.pairs(), vec![(3, "The central claim.")]);
}

#[test]
fn top_two_comes_back_in_reading_order() {
    let summary = rank_sentences(
        &StandardPageRank::default(),
        five_sentences(),
        five_sentence_matrix(),
        2,
    )
    .unwrap();
    assert_eq!(
        summary.pairs(),
        vec![(1, "Second most central."), (3, "The central claim.")]
    );
    assert_eq!(summary.similarity_matrix, five_sentence_matrix());
}

#[test]
fn page_rank_does_not_modify_input() {
    let matrix = five_sentence_matrix();
    let scores = page_rank(&matrix).unwrap();
    assert_eq!(scores.len(), 5);
    assert_eq!(matrix.get(2, 2), 1.0);
    let sum: f64 = scores.iter().sum();
    assert!((sum - 1.0).abs() < 1e-3);
}

#[test]
fn sentence_split_keeps_terminal_punctuation() {
    let sentences = sentence_tokenize("Hello world. Is this real? Yes!").unwrap();
    assert_eq!(sentences.len(), 3);
    assert!(sentences[0].ends_with('.'));
    assert!(sentences[1].ends_with('?'));
    assert!(sentences[2].ends_with('!'));
}

/// Embeds sentences as one-hot vectors over a fixed topic list
struct TopicEmbedder;

impl EmbeddingProvider for TopicEmbedder {
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>> {
        let topics = ["rust", "memory", "cats"];
        Ok(sentences
            .iter()
            .map(|s| {
                let lower = s.to_lowercase();
                topics
                    .iter()
                    .map(|t| if lower.contains(t) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect())
    }
}

#[test]
fn summarize_prefers_connected_sentences() {
    let text = "Rust manages memory. Cats nap often. Rust is loved. Memory safety matters in Rust.";
    let summary = summarize(&TopicEmbedder, text, 2).unwrap();

    let indices: Vec<usize> = summary.top_sentences.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 3]);
    assert_eq!(summary.similarity_matrix.len(), 4);
}

#[test]
fn summarizer_from_json_config() {
    let cfg = SummarizerConfig::from_json_str(r#"{"selection": {"top_k": 1}}"#).unwrap();
    let embedder = HashingEmbedder::new(64);
    let summary = Summarizer::from_config(&embedder, &cfg)
        .unwrap()
        .summarize("One idea here. Another idea there. A third idea everywhere.")
        .unwrap();
    assert_eq!(summary.top_sentences.len(), 1);
}

#[test]
fn unsplittable_text_is_an_error() {
    let err = summarize(&HashingEmbedder::default(), "", 3).unwrap_err();
    assert!(matches!(err, Error::Segmentation));
}

#[test]
fn summary_serializes_to_json() {
    let summary = rank_sentences(
        &StandardPageRank::default(),
        five_sentences(),
        five_sentence_matrix(),
        1,
    )
    .unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["top_sentences"][0]["index"], 3);
    assert_eq!(json["similarity_matrix"].as_array().unwrap().len(), 5);
}

#[test]
fn summarize_with_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sentrank=debug")
        .with_test_writer()
        .try_init();

    let summary = summarize(
        &HashingEmbedder::default(),
        "Logging stays out of the way. Errors still propagate. Spans wrap each stage.",
        2,
    )
    .unwrap();
    assert_eq!(summary.top_sentences.len(), 2);
}
