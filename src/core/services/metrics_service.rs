//! Business logic helpers for the daily metrics journal.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{DailyMetrics, MetricsJournal};

/// Provides validated upsert and query helpers over a metrics journal.
pub struct MetricsService;

impl MetricsService {
    /// Records `metrics` for its date, replacing any earlier record for
    /// the same day. Returns true when a record was replaced.
    pub fn record(journal: &mut MetricsJournal, metrics: DailyMetrics) -> ServiceResult<bool> {
        if let Some(weight) = metrics.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ServiceError::Invalid(format!(
                    "weight must be positive, got {weight}"
                )));
            }
        }
        if let Some(sleep) = metrics.sleep_hours {
            if !sleep.is_finite() || !(0.0..=24.0).contains(&sleep) {
                return Err(ServiceError::Invalid(format!(
                    "sleep hours must be between 0 and 24, got {sleep}"
                )));
            }
        }
        if let Some(water) = metrics.water_ml {
            if !water.is_finite() || water < 0.0 {
                return Err(ServiceError::Invalid(format!(
                    "water intake cannot be negative, got {water}"
                )));
            }
        }
        Ok(journal.upsert(metrics))
    }

    /// Records in reverse chronological order.
    pub fn history(journal: &MetricsJournal) -> Vec<&DailyMetrics> {
        journal.history().collect()
    }

    pub fn latest_weight(journal: &MetricsJournal) -> Option<f64> {
        journal.latest_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn metrics(weight: Option<f64>, sleep: Option<f64>, water: Option<f64>) -> DailyMetrics {
        let mut m = DailyMetrics::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        m.weight_kg = weight;
        m.sleep_hours = sleep;
        m.water_ml = water;
        m
    }

    #[test]
    fn record_rejects_out_of_range_values() {
        let mut journal = MetricsJournal::new();
        for bad in [
            metrics(Some(0.0), None, None),
            metrics(Some(-3.0), None, None),
            metrics(None, Some(25.0), None),
            metrics(None, Some(-1.0), None),
            metrics(None, None, Some(-200.0)),
        ] {
            let err = MetricsService::record(&mut journal, bad).expect_err("must reject");
            assert!(matches!(err, ServiceError::Invalid(_)));
        }
        assert!(journal.is_empty());
    }

    #[test]
    fn record_upserts_by_date() {
        let mut journal = MetricsJournal::new();
        let replaced =
            MetricsService::record(&mut journal, metrics(Some(73.5), Some(7.5), Some(2000.0)))
                .unwrap();
        assert!(!replaced);
        let replaced =
            MetricsService::record(&mut journal, metrics(Some(73.2), Some(8.0), Some(1800.0)))
                .unwrap();
        assert!(replaced);
        assert_eq!(journal.len(), 1);
        assert_eq!(MetricsService::latest_weight(&journal), Some(73.2));
    }
}
