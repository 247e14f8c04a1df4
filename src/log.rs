use serde::Deserialize;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

#[derive(Clone, Deserialize)]
pub struct Log {
    pub level: String,
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config level is not used
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    config: &Option<Log>,
) {
    let filter = match env_filter {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(
            config
                .as_ref()
                .map(|log| log.level.as_str())
                .unwrap_or("info"),
        ),
    };
    let sbuilder = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc3339())
        .with_level(true)
        .with_env_filter(filter);
    let ss = sbuilder.with_ansi(true).finish();
    tracing::subscriber::set_global_default(ss)
        .expect("setting tracing default subscriber failed");
}
