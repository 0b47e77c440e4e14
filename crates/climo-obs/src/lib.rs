use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging/tracing for the service.
/// RUST_LOG respected; default to "info,climo=debug".
pub fn init(service_name: &str) {
    let default_filter = "info,climo=debug";
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::info!(service = %service_name, "Observability initialized");
}
