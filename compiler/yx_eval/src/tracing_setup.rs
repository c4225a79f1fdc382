//! Logging setup for hosts embedding the evaluator.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; does nothing when `RUST_LOG` is unset or a
/// global subscriber is already installed. Nested calls render as an
/// indented tree on stderr, so `display` output on stdout stays clean.
/// Enable with `RUST_LOG=yx_eval=debug` (calls) or `=trace` (every call
/// entry and lookup miss).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        let installed = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(layer)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}

#[cfg(test)]
mod tests;
