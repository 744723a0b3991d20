use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber if `HYPER_LOG` is set.
///
/// Safe to call more than once. Logs go to stderr so they never mix with
/// program output, e.g. `HYPER_LOG=hyper_eval=trace hyper run main.hfl`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var("HYPER_LOG") else {
            return;
        };
        let filter = EnvFilter::new(directives);
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .with(filter)
            .init();
    });
}
