//! Tracing configuration for DeviceDeck.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the workspace crates, info elsewhere
/// - **Production**: info level everywhere
/// - Can be overridden with the RUST_LOG environment variable
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        "info".to_string(),
        if is_dev { "dd_app=debug" } else { "dd_app=info" }.to_string(),
        if is_dev {
            "dd_platform=debug"
        } else {
            "dd_platform=info"
        }
        .to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once in `main`, before anything logs. Returns `Err` if a
/// subscriber is already registered or RUST_LOG holds invalid directives.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
