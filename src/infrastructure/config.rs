use crate::domain::policy::POLICY;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub waqi: WaqiSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WaqiSettings {
    #[serde(default = "default_waqi_host")]
    pub host: String,
    #[serde(default)]
    pub token: String,
    /// Half-width in degrees of the box queried around the user
    #[serde(default = "default_bounds_padding")]
    pub bounds_padding_deg: f64,
}

impl Default for WaqiSettings {
    fn default() -> Self {
        Self {
            host: default_waqi_host(),
            token: String::new(),
            bounds_padding_deg: default_bounds_padding(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingSettings {
    #[serde(default = "default_k")]
    pub default_k: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self { default_k: default_k() }
    }
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_waqi_host() -> String {
    "https://api.waqi.info".to_string()
}

fn default_bounds_padding() -> f64 {
    0.5
}

fn default_k() -> usize {
    POLICY.default_nearest_k
}

/// Load `config/app.toml` if present, then `AQF__SECTION__KEY` environment
/// overrides (e.g. `AQF__WAQI__TOKEN`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(config::File::with_name("config/app").required(false))
}

fn load_app_config_from<S>(file: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("AQF").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_when_empty() {
        let config = load_app_config_from(File::from_str("", FileFormat::Toml)).unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.waqi.host, "https://api.waqi.info");
        assert_eq!(config.waqi.token, "");
        assert_eq!(config.waqi.bounds_padding_deg, 0.5);
        assert_eq!(config.matching.default_k, 5);
    }

    #[test]
    fn test_file_values() {
        let toml = r#"
            [server]
            addr = "127.0.0.1:9000"

            [waqi]
            token = "demo"
            bounds_padding_deg = 1.25

            [matching]
            default_k = 3
        "#;
        let config = load_app_config_from(File::from_str(toml, FileFormat::Toml)).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.waqi.host, "https://api.waqi.info");
        assert_eq!(config.waqi.token, "demo");
        assert_eq!(config.waqi.bounds_padding_deg, 1.25);
        assert_eq!(config.matching.default_k, 3);
    }
}
