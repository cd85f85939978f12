use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Variable read before `RUST_LOG`.
const LOG_VAR: &str = "MONKEY_LOG";

/// Install a hierarchical stderr subscriber when `MONKEY_LOG` or `RUST_LOG`
/// is set, e.g. `MONKEY_LOG=monkey_eval=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = std::env::var(LOG_VAR)
            .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
            .ok()
        else {
            return;
        };

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
