// src/config.rs

use std::{env, net::SocketAddr, str::FromStr};

use thiserror::Error;

use crate::{
    domain::{
        calculations::DEFAULT_DB_LIMIT,
        formatters::FormatConfig,
    },
    services::dashboard_service::DashboardService,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Valor inválido para {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Endereço inválido: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
}

// Tudo que vem do ambiente (.env)
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub format: FormatConfig,
    pub db_limit: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            format: FormatConfig::default(),
            db_limit: DEFAULT_DB_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta as configurações a partir de qualquer fonte chave -> valor.
    /// Chave ausente = valor padrão.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let format = FormatConfig {
            locale: read(&lookup, "XFINANCE_LOCALE", defaults.format.locale)?,
            currency: read(&lookup, "XFINANCE_CURRENCY", defaults.format.currency)?,
            decimal_places: read(
                &lookup,
                "XFINANCE_DECIMAL_PLACES",
                defaults.format.decimal_places,
            )?,
        };

        Ok(Self {
            host: lookup("XFINANCE_HOST").unwrap_or(defaults.host),
            port: read(&lookup, "XFINANCE_PORT", defaults.port)?,
            log_level: lookup("XFINANCE_LOG_LEVEL").unwrap_or(defaults.log_level),
            format,
            db_limit: read(&lookup, "XFINANCE_DB_LIMIT", defaults.db_limit)?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = if self.host.eq_ignore_ascii_case("localhost") {
            "127.0.0.1"
        } else {
            &self.host
        };
        Ok(SocketAddr::new(host.parse()?, self.port))
    }
}

fn read<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub format: FormatConfig,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        // --- Monta o gráfico de dependências ---
        let dashboard_service = DashboardService::new(settings.db_limit);

        tracing::info!(
            "⚙️ Formato: {} / {:?} / {} casas | DB Limit: {}",
            settings.format.locale,
            settings.format.currency,
            settings.format.decimal_places,
            settings.db_limit
        );

        Self {
            format: settings.format,
            dashboard_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::domain::formatters::{Currency, LocaleTag};

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let settings = settings_from(&[]).expect("defaults load");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.format, FormatConfig::default());
        assert_eq!(settings.db_limit, DEFAULT_DB_LIMIT);
    }

    #[test]
    fn variables_override_defaults() {
        let settings = settings_from(&[
            ("XFINANCE_HOST", "localhost"),
            ("XFINANCE_PORT", " 8081 "),
            ("XFINANCE_LOCALE", "en-US"),
            ("XFINANCE_CURRENCY", "USD"),
            ("XFINANCE_DECIMAL_PLACES", "2"),
            ("XFINANCE_DB_LIMIT", "50"),
            ("XFINANCE_LOG_LEVEL", "debug"),
        ])
        .expect("overrides load");

        assert_eq!(settings.socket_addr().unwrap().to_string(), "127.0.0.1:8081");
        assert_eq!(settings.format.locale, LocaleTag::EnUs);
        assert_eq!(settings.format.currency, Currency::Usd);
        assert_eq!(settings.format.decimal_places, 2);
        assert_eq!(settings.db_limit, 50);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn unparseable_values_name_the_variable() {
        let err = settings_from(&[("XFINANCE_DECIMAL_PLACES", "duas")]).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "XFINANCE_DECIMAL_PLACES");
                assert_eq!(value, "duas");
            }
            other => panic!("erro inesperado: {other}"),
        }

        let err = settings_from(&[("XFINANCE_CURRENCY", "BTC")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "XFINANCE_CURRENCY", .. }));
    }

    #[test]
    fn defaults_match_the_brazilian_dashboard() {
        let settings = Settings::default();
        assert_eq!(settings.format.locale, LocaleTag::PtBr);
        assert_eq!(settings.format.currency, Currency::Brl);
        assert_eq!(settings.db_limit, 500);
        assert_eq!(settings.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn localhost_resolves_to_loopback() {
        let settings = Settings { host: "localhost".into(), port: 8080, ..Settings::default() };
        assert_eq!(settings.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_host_is_an_error() {
        let settings = Settings { host: "not-an-ip".into(), ..Settings::default() };
        assert!(matches!(settings.socket_addr(), Err(ConfigError::InvalidAddress(_))));
    }
}
