//! Mock image recognition. A stand-in for a future vision model: the
//! contract is the interface shape (image bytes in, candidate foods out,
//! asynchronous), not the recognition quality.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::FoodItem;
use crate::errors::FitnessError;

const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// Turns an image into candidate food items.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<Vec<FoodItem>, FitnessError>;
}

/// Returns 1-3 pseudo-random catalog items after an artificial delay.
pub struct MockImageAnalyzer {
    candidates: Vec<FoodItem>,
    delay: Duration,
}

impl MockImageAnalyzer {
    pub fn new(candidates: Vec<FoodItem>) -> Self {
        Self {
            candidates,
            delay: DEFAULT_ANALYSIS_DELAY,
        }
    }

    /// Overrides the simulated inference delay. Tests use zero.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ImageAnalyzer for MockImageAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<Vec<FoodItem>, FitnessError> {
        tokio::time::sleep(self.delay).await;

        if self.candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=3);
        let picks = (0..count)
            .map(|_| self.candidates[rng.gen_range(0..self.candidates.len())].clone())
            .collect();
        Ok(picks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SampleCatalog;

    #[tokio::test]
    async fn analyzer_returns_one_to_three_known_items() {
        let catalog = SampleCatalog::new();
        let analyzer = MockImageAnalyzer::new(catalog.items().to_vec())
            .with_delay(Duration::from_millis(0));

        for _ in 0..8 {
            let picks = analyzer.analyze(b"fake image bytes").await.unwrap();
            assert!((1..=3).contains(&picks.len()));
            for pick in &picks {
                assert!(catalog.items().iter().any(|food| food.id == pick.id));
            }
        }
    }

    #[tokio::test]
    async fn analyzer_with_no_candidates_returns_nothing() {
        let analyzer =
            MockImageAnalyzer::new(Vec::new()).with_delay(Duration::from_millis(0));
        assert!(analyzer.analyze(&[]).await.unwrap().is_empty());
    }
}
