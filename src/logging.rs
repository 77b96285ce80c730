use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for library consumers
///
/// `level` overrides the default (`routegraph=warn`); the `ROUTEGRAPH_LOG`
/// environment variable overrides both.
pub fn init_tracing(level: Option<&str>, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROUTEGRAPH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("routegraph={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
