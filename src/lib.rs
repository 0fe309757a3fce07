#![doc(test(attr(deny(warnings))))]

//! Client Forms is the form-state, validation and submission engine behind
//! the "new client" and "edit client" screens of a client-records front end.
//!
//! Rendering, routing and transport stay outside: screens talk to them
//! through the traits in [`api`] and [`screens`].

pub mod api;
pub mod cache;
pub mod cli;
pub mod errors;
pub mod forms;
pub mod pipeline;
pub mod screens;
pub mod time;
pub mod timer;
pub mod utils;

pub use clients_domain as domain;

use std::sync::Once;

use clients_config::Config;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup info log.
pub fn init() {
    init_with_filter(&Config::default_log_filter());
}

/// Initializes global tracing with `filter` unless `RUST_LOG` is set.
pub fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(filter);
        tracing::info!("Client forms tracing initialized.");
    });
}
