#![doc(test(attr(deny(warnings))))]

//! Financy Core provides the primitives behind a personal finance manager and
//! organizer: a typed expense/income model, a credit-card installment
//! scheduler, a monthly aggregation engine, and the organizer collections
//! (notes, workout log, exam agenda), backed by a pluggable per-user document
//! store.

pub mod config;
pub mod domain;
pub mod errors;
pub mod money;
pub mod report;
pub mod schedule;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Financy Core tracing initialized.");
    });
}
