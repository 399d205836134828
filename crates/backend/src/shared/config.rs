use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub frontend: Option<FrontendConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixturesConfig {
    /// JSON object `doctype → {label, url, list_props}`
    pub routing_map: String,
    /// One `DocTypeMeta` JSON file per doctype
    pub doctypes_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Built SPA (trunk `dist`), served with `index.html` fallback
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8000

[fixtures]
routing_map = "fixtures/routing_map.json"
doctypes_dir = "fixtures/doctypes"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = exe_dir() {
        candidates.push(exe_dir.join("config.toml"));
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolves a configured path.
///
/// Absolute paths are used as is. Relative paths are tried next to the
/// executable first, then against the current directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let next_to_exe = exe_dir.join(path);
        if next_to_exe.exists() {
            return next_to_exe;
        }
    }

    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.fixtures.routing_map, "fixtures/routing_map.json");
        assert!(config.frontend.is_none());
    }

    #[test]
    fn test_frontend_section_is_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [fixtures]
            routing_map = "/srv/routing.json"
            doctypes_dir = "/srv/doctypes"

            [frontend]
            dist_dir = "dist"
            "#,
        )
        .unwrap();
        assert_eq!(config.frontend.unwrap().dist_dir, "dist");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"x\"\nport = 1\n").is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let absolute = if cfg!(windows) { "C:\\data\\map.json" } else { "/data/map.json" };
        assert_eq!(resolve_path(absolute), PathBuf::from(absolute));
    }
}
