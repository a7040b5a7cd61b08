use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

const LOG_VAR: &str = "PYFRONT_LOG";

/// Install the hierarchical tracing subscriber on stderr.
///
/// Does nothing unless `PYFRONT_LOG` or `RUST_LOG` is set. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var_os(LOG_VAR).is_some() {
            EnvFilter::from_env(LOG_VAR)
        } else if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .with(filter)
            .init();
    });
}
