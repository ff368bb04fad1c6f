use eyre::{eyre, Result, WrapErr};
use log::LevelFilter;
use std::env;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .wrap_err_with(|| format!("PORT is not a valid port: {port}"))?,
            None => 8080,
        };
        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .map_err(|_| eyre!("LOG_LEVEL is not a valid level: {level}"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            log_path: lookup("LOG_PATH").filter(|path| !path.is_empty()),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("LOG_PATH", "data/log.txt"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_path.as_deref(), Some("data/log.txt"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
        assert!(config(&[("LOG_LEVEL", "loud")]).is_err());
    }
}
