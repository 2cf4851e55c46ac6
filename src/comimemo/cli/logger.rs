use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so they never mix with listings. `RUST_LOG` wins over `--verbose`.
pub(super) fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "comimemo=debug"
    } else {
        "comimemo=error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
