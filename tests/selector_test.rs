mod common;

use fancam::{
    selector::{self, ENRICH_COUNT},
    types::SortMode,
};

use common::{StubMetadata, track};

fn names(tracks: &[fancam::types::TrackRecord]) -> Vec<&str> {
    tracks.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test]
async fn popularity_sort_is_stable() {
    let metadata = StubMetadata::default();
    let tracks = vec![track("A", 10), track("B", 50), track("C", 50)];

    let selection = selector::select(tracks, SortMode::Popularity, &metadata).await;

    assert_eq!(names(&selection.enrich), ["B", "C", "A"]);
    assert!(selection.passthrough.is_empty());
    assert_eq!(metadata.release_calls(), 0);
}

#[tokio::test]
async fn seven_tracks_split_five_and_two() {
    let metadata = StubMetadata::default();
    let mut tracks: Vec<_> = [3, 70, 10, 90, 40, 5, 60]
        .iter()
        .enumerate()
        .map(|(i, p)| track(&format!("T{i}"), *p))
        .collect();
    tracks[5].video_link = Some("https://example.com/leftover".to_string());

    let selection = selector::select(tracks, SortMode::Popularity, &metadata).await;

    assert_eq!(selection.enrich.len(), ENRICH_COUNT);
    assert_eq!(names(&selection.enrich), ["T3", "T1", "T6", "T4", "T2"]);
    assert_eq!(names(&selection.passthrough), ["T5", "T0"]);
    assert!(selection.passthrough.iter().all(|t| t.video_link.is_none()));
}

#[tokio::test]
async fn latest_sorts_by_release_date_with_missing_last() {
    let metadata = StubMetadata::default()
        .released("Old", 2019, 3, 1)
        .released("New", 2024, 6, 21)
        .released("Mid", 2022, 8, 1)
        .released("MidTwin", 2022, 8, 1);
    let tracks = vec![
        track("Undated", 999),
        track("Old", 5),
        track("Mid", 1),
        track("New", 2),
        track("MidTwin", 100),
    ];

    let selection = selector::select(tracks, SortMode::Latest, &metadata).await;

    assert_eq!(
        names(&selection.enrich),
        ["New", "Mid", "MidTwin", "Old", "Undated"]
    );
    assert_eq!(metadata.release_calls(), 5);
    assert!(selection.enrich[4].release_date.is_none());
}

#[tokio::test]
async fn failed_release_lookup_counts_as_missing() {
    let mut metadata = StubMetadata::default()
        .released("Known", 2021, 1, 1)
        .released("Broken", 2025, 1, 1);
    metadata.failing_release_lookups.insert("Broken".to_string());
    let tracks = vec![track("Broken", 1), track("Known", 1)];

    let selection = selector::select(tracks, SortMode::Latest, &metadata).await;

    assert_eq!(names(&selection.enrich), ["Known", "Broken"]);
    assert!(selection.enrich[1].release_date.is_none());
}

#[tokio::test]
async fn empty_input_makes_no_calls() {
    let metadata = StubMetadata::default();

    let selection = selector::select(Vec::new(), SortMode::Latest, &metadata).await;

    assert!(selection.enrich.is_empty());
    assert!(selection.passthrough.is_empty());
    assert_eq!(metadata.release_calls(), 0);
}
