//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::feed::TableSource;
use crate::transfer::ValidatorConfig;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors in environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`ROUTER_ADDR`)
    pub addr: SocketAddr,

    /// Routing table document (`ROUTING_TABLE_PATH` or `ROUTING_TABLE_URL`)
    pub table: TableSource,

    /// Static assets directory (`STATIC_DIR`)
    pub static_dir: String,

    /// Validation parameters (`TRANSFER_AMOUNT_CEILING`)
    pub validator: ValidatorConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    ///
    /// A table path takes precedence over a table URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr = parse("ROUTER_ADDR", var("ROUTER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into()))?;

        let table = match (var("ROUTING_TABLE_PATH"), var("ROUTING_TABLE_URL")) {
            (Some(path), _) => TableSource::File(PathBuf::from(path)),
            (None, Some(url)) => TableSource::Url(url),
            (None, None) => TableSource::None,
        };

        let static_dir = var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        let mut validator = ValidatorConfig::default();
        if let Some(ceiling) = var("TRANSFER_AMOUNT_CEILING") {
            let ceiling: Decimal = parse("TRANSFER_AMOUNT_CEILING", ceiling)?;
            if ceiling.is_sign_negative() {
                return Err(ConfigError::Invalid {
                    name: "TRANSFER_AMOUNT_CEILING",
                    value: ceiling.to_string(),
                });
            }
            validator = validator.with_amount_ceiling(ceiling);
        }

        Ok(Self {
            addr,
            table,
            static_dir,
            validator,
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.table, TableSource::None);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.validator.amount_ceiling, Decimal::from(10));
    }

    #[test]
    fn table_path_wins_over_url() {
        let config = load(&[
            ("ROUTING_TABLE_PATH", "static/routes.json"),
            ("ROUTING_TABLE_URL", "http://localhost/routes.json"),
        ])
        .unwrap();
        assert_eq!(config.table, TableSource::File("static/routes.json".into()));

        let config = load(&[("ROUTING_TABLE_URL", "http://localhost/routes.json")]).unwrap();
        assert_eq!(
            config.table,
            TableSource::Url("http://localhost/routes.json".into())
        );
    }

    #[test]
    fn amount_ceiling_override() {
        let config = load(&[("TRANSFER_AMOUNT_CEILING", "1000.50")]).unwrap();
        assert_eq!(config.validator.amount_ceiling, Decimal::new(100050, 2));
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            load(&[("ROUTER_ADDR", "nowhere")]).unwrap_err(),
            ConfigError::Invalid {
                name: "ROUTER_ADDR",
                value: "nowhere".into()
            }
        );
        assert!(load(&[("TRANSFER_AMOUNT_CEILING", "ten")]).is_err());
        assert!(load(&[("TRANSFER_AMOUNT_CEILING", "-5")]).is_err());
    }
}
