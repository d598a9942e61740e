use std::env;
use std::path::PathBuf;

use crate::config::dto::{AppConfig, AppEnvironment};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "3040";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    load_config_from(|key| env::var(key).ok())
}

/// Builds the config from an arbitrary variable source.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = lookup("CALC_SERVICE_PORT")
        .or_else(|| lookup("PORT"))
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
        .trim()
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let environment = lookup("CALC_SERVICE_ENV")
        .or_else(|| lookup("APP_ENV"))
        .map(|value| AppEnvironment::from_name(&value))
        .unwrap_or(AppEnvironment::Development);

    let log_dir = lookup("CALC_SERVICE_LOG_DIR")
        .or_else(|| lookup("LOG_DIR"))
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(AppConfig {
        port,
        environment,
        log_dir,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        load_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).expect("config");
        assert_eq!(config.port, 3040);
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.log_dir, PathBuf::from("."));
    }

    #[test]
    fn service_specific_variables_win() {
        let config = load(&[
            ("CALC_SERVICE_PORT", "3000"),
            ("PORT", "8080"),
            ("APP_ENV", "Production"),
            ("LOG_DIR", "/var/log/calc"),
        ])
        .expect("config");

        assert_eq!(config.port, 3000);
        assert!(config.environment.is_production());
        assert_eq!(config.log_dir, PathBuf::from("/var/log/calc"));
    }

    #[test]
    fn unknown_environment_runs_as_development() {
        let config = load(&[("CALC_SERVICE_ENV", "staging")]).expect("config");
        assert_eq!(config.environment, AppEnvironment::Development);
    }

    #[test]
    fn invalid_port_is_a_configuration_error() {
        let error = load(&[("PORT", "not-a-port")]).expect_err("invalid port");
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
