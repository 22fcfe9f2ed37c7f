#![doc(test(attr(deny(warnings))))]

//! Item Picker prepares header-annotated, search-filtered selection lists of
//! transaction items and hosts them in a small interactive shell.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Item Picker tracing initialized.");
    });
}
