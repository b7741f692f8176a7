use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Overrides `RUST_LOG` for this binary only.
pub const LOG_ENV_VAR: &str = "COFFEE_ROULETTE_LOG";

/// Filter used when neither `COFFEE_ROULETTE_LOG` nor `RUST_LOG` is set.
/// Dependencies stay at `warn` either way.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "coffee_roulette=debug,warn"
    } else {
        "coffee_roulette=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Log to stderr; stdout is reserved for the team listing.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_line_number(verbose)
                .without_time()
                .compact(),
        )
        .init();
}
