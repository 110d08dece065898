use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// Nothing is installed unless `RUST_LOG` is set. With `TARN_LOG_TREE` set
/// to any non-empty value, output is indented by span nesting instead of
/// printed flat.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("TARN_LOG_TREE").is_ok_and(|value| !value.is_empty());
        let registry = tracing_subscriber::registry().with(filter);
        let installed = if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
        if let Err(err) = installed {
            eprintln!("tarnc: tracing already initialized elsewhere: {err}");
        }
    });
}
