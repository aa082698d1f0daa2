use serde::Deserialize;

/// Environment variable replacing `[upstream] url`.
pub const UPSTREAM_URL_ENV: &str = "HUB_UPSTREAM_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Web-app URL of the sheet data service. Empty until configured.
    #[serde(default)]
    pub url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
url = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `HUB_UPSTREAM_URL` then overrides the upstream URL.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_upstream_override(&mut config, std::env::var(UPSTREAM_URL_ENV).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn apply_upstream_override(config: &mut Config, value: Option<String>) {
    if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        tracing::info!("Upstream URL taken from {}", UPSTREAM_URL_ENV);
        config.upstream.url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.upstream.url.is_empty());
    }

    #[test]
    fn test_missing_upstream_section_is_an_error() {
        let result = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\nstatic_dir = \"web\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_upstream_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();

        apply_upstream_override(&mut config, Some("   ".into()));
        assert!(config.upstream.url.is_empty());

        apply_upstream_override(&mut config, Some(" https://script.example/exec ".into()));
        assert_eq!(config.upstream.url, "https://script.example/exec");

        apply_upstream_override(&mut config, None);
        assert_eq!(config.upstream.url, "https://script.example/exec");
    }
}
