//! Tracing and Sentry setup for binaries driving a page.

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ShopConfig;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "shopfront_storefront=info,shopfront_cli=info";

/// Initialize Sentry error tracking and return guard that must be kept alive.
#[must_use]
pub fn init_sentry(config: &ShopConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
#[must_use]
pub fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the global subscriber and start Sentry when a DSN is configured.
///
/// Sentry starts first so the tracing layer has a client to report to.
/// Keep the returned guard alive for the life of the process.
#[must_use]
pub fn init(config: &ShopConfig) -> Option<sentry::ClientInitGuard> {
    let guard = init_sentry(config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    guard
}
