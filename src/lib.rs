#![doc(test(attr(deny(warnings))))]

//! Fitness Core offers foundational nutrition-ledger, daily-metric, goal,
//! and workout primitives that power higher level fitness tracking
//! workflows and CLIs.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fitness Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
