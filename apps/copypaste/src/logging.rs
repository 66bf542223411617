//! Tracing subscriber setup. Logs always go to stderr so stdout carries only results.

use copypaste_config::types::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given `-v` count, falling back to the configured level.
pub fn level_for(verbose: u8, cfg: Option<&LoggingConfig>) -> String {
    match verbose {
        0 => cfg.map_or_else(|| "warn".to_string(), |c| c.level.to_lowercase()),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    }
}

pub fn init(verbose: u8, cfg: Option<&LoggingConfig>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose, cfg)));
    let json = cfg.is_some_and(|c| c.json);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_config() {
        let cfg = LoggingConfig {
            level: "ERROR".into(),
            json: false,
        };
        assert_eq!(level_for(0, Some(&cfg)), "error");
        assert_eq!(level_for(0, None), "warn");
        assert_eq!(level_for(1, Some(&cfg)), "info");
        assert_eq!(level_for(2, None), "debug");
        assert_eq!(level_for(9, None), "trace");
    }
}
