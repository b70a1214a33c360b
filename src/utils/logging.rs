use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. `debug` comes from `app.debug`.
pub fn default_filter(debug: bool) -> EnvFilter {
    let directives = if debug {
        "dewey_ebooks=debug,tower_http=debug"
    } else {
        "dewey_ebooks=info,tower_http=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_logging(debug: bool) -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(default_filter(debug))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(debug),
        )
        .try_init()?;

    Ok(())
}
