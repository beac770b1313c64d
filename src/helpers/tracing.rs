use std::borrow::Cow;
use std::time::Duration;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

const LOG_ENV: &str = "BLITZ_ACHIEVEMENTS_LOG";
const DEFAULT_LOG_DIRECTIVES: &str = "blitz_achievements=info";

/// Initialises tracing. Logs go to stderr, stdout is left for the JSON output.
pub fn init(sentry_dsn: Option<String>) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| sentry_event_filter(metadata.level()))
        .with_filter(EnvFilter::try_new("blitz_achievements=debug")?);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(stderr_filter()?);

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(stderr_layer)
        .init();

    Ok(guard)
}

fn stderr_filter() -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES)
            .with_context(|| format!("invalid default directives for `{}`", LOG_ENV)),
    }
}

/// Warnings and errors are reported, the rest only accompanies them.
fn sentry_event_filter(level: &Level) -> EventFilter {
    if *level <= Level::WARN {
        EventFilter::Event
    } else {
        EventFilter::Breadcrumb
    }
}

/// Millisecond precision is enough for request logs.
pub fn format_duration(duration: Duration) -> String {
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    humantime::format_duration(Duration::from_millis(millis)).to_string()
}

pub fn format_elapsed(instant: Instant) -> String {
    format_duration(instant.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_ok() {
        assert_eq!(format_duration(Duration::from_micros(1_500_700)), "1s 500ms");
        assert_eq!(format_duration(Duration::from_micros(300)), "0s");
    }

    #[test]
    fn sentry_event_filter_ok() {
        assert!(matches!(sentry_event_filter(&Level::ERROR), EventFilter::Event));
        assert!(matches!(sentry_event_filter(&Level::WARN), EventFilter::Event));
        assert!(matches!(sentry_event_filter(&Level::INFO), EventFilter::Breadcrumb));
        assert!(matches!(sentry_event_filter(&Level::TRACE), EventFilter::Breadcrumb));
    }
}
