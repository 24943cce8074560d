//! Subscriber setup for the command-line tools.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between info and
/// debug for this crate.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose { "coin_dp=debug,info" } else { "coin_dp=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
