// Many in-flight requests against one pool
// WHY: tasks share nothing but the catalog, so results must match serial runs exactly

#[path = "integration/mod.rs"]
mod integration;

use futures::future::join_all;
use integration::*;
use tongues::{DetectOptions, DetectionResult};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_cross_contaminate() {
    let detector = test_detector(4);
    let inputs = [ENGLISH_SENTENCE, FRENCH_PARAGRAPH, GERMAN_PARAGRAPH, SPANISH_PARAGRAPH];
    let options = DetectOptions::default();

    let mut serial: Vec<DetectionResult> = Vec::new();
    for text in inputs {
        serial.push(detector.detect(text, &options).await);
    }

    let pending: Vec<_> = (0..40)
        .map(|i| {
            let detector = detector.clone();
            let options = options.clone();
            let text = inputs[i % inputs.len()];
            tokio::spawn(async move { (i, detector.detect(text, &options).await) })
        })
        .collect();

    for joined in join_all(pending).await {
        let (i, result) = joined.expect("detection task panicked");
        assert_eq!(result, serial[i % inputs.len()], "Request {i} diverged from its serial run");
    }
}

#[tokio::test]
async fn test_batch_matches_individual_calls() {
    let detector = test_detector(3);
    let options = DetectOptions::default();
    let texts = vec![GERMAN_PARAGRAPH, "", ENGLISH_SENTENCE, FRENCH_PARAGRAPH];

    let batch = detector.detect_batch(texts.clone(), &options).await;
    assert_eq!(batch.len(), texts.len());

    for (text, batched) in texts.into_iter().zip(batch) {
        assert_eq!(batched, detector.detect(text, &options).await);
    }
}

#[tokio::test]
async fn test_each_callback_sees_its_own_result() {
    let detector = test_detector(2);
    let options = DetectOptions::default();

    let codes = join_all([ENGLISH_SENTENCE, GERMAN_PARAGRAPH].map(|text| {
        detector.detect_with(text, &options, |result| {
            result.success().map(|s| s.languages[0].code.clone())
        })
    }))
    .await;

    assert_eq!(codes, vec![Some("en".to_string()), Some("de".to_string())]);
}

#[tokio::test]
async fn test_clones_keep_pool_alive_after_first_handle_drops() {
    let detector = test_detector(2);
    let clone = detector.clone();
    drop(detector);

    assert_eq!(clone.workers(), 2);
    let result = clone.detect(ENGLISH_SENTENCE, &DetectOptions::default()).await;
    assert!(result.is_success());
}

#[tokio::test]
async fn test_identical_inputs_are_deterministic() {
    let first = test_detector(1)
        .detect(french_then_german(), &DetectOptions::default())
        .await;
    let second = test_detector(3)
        .detect(french_then_german(), &DetectOptions::default())
        .await;

    assert_eq!(first, second);
}
