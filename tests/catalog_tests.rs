use std::time::Duration;

use fitness_core::catalog::vision::{ImageAnalyzer, MockImageAnalyzer};
use fitness_core::catalog::{FoodSource, SampleCatalog};

#[tokio::test]
async fn chicken_query_finds_the_grilled_breast() {
    let catalog = SampleCatalog::new();
    let matches = catalog.search("chicken").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Grilled Chicken Breast");
}

#[tokio::test]
async fn unmatched_and_empty_queries_return_nothing() {
    let catalog = SampleCatalog::new();
    assert!(catalog.search("zzz").await.unwrap().is_empty());
    assert!(catalog.search("").await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_by_id_round_trips_catalog_items() {
    let catalog = SampleCatalog::new();
    for food in catalog.items() {
        let found = catalog.lookup(&food.id).await.unwrap().unwrap();
        assert_eq!(&found, food);
    }
    assert!(catalog.lookup("no-such-id").await.unwrap().is_none());
}

#[tokio::test]
async fn analyzer_suggests_known_foods_only() {
    let catalog = SampleCatalog::new();
    let analyzer =
        MockImageAnalyzer::new(catalog.items().to_vec()).with_delay(Duration::from_millis(0));

    let candidates = analyzer.analyze(b"snapshot").await.unwrap();
    assert!((1..=3).contains(&candidates.len()));
    for candidate in candidates {
        assert!(catalog.items().iter().any(|food| food.id == candidate.id));
    }
}
