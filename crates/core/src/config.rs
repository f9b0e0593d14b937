use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "campaign.toml";

/// Contents of campaign.toml. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignConfig {
    pub site: SiteConfig,
    pub paths: PathsConfig,
    pub server: ServerConfig,
}

/// Text shared by every generated page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Campaign".to_string(),
            tagline: "Together we can make a real difference.".to_string(),
        }
    }
}

/// Where the generator reads vendor assets and writes the site
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Generated site, also served as the static root
    pub output: PathBuf,
    /// Directory holding `htmx.min.js`
    pub vendor: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            vendor: PathBuf::from("static-vendor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Load config from a file, falling back to defaults when it does not exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CampaignConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(CampaignConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse campaign.toml from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<CampaignConfig> {
    let config: CampaignConfig = toml::from_str(content)?;

    if config.site.title.trim().is_empty() {
        return Err(Error::ConfigParse("site.title must not be blank".to_string()));
    }

    if config.server.port == 0 {
        return Err(Error::ConfigParse(
            "server.port must be between 1 and 65535".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config, CampaignConfig::default());
        assert_eq!(config.paths.output, PathBuf::from("public"));
        assert_eq!(config.paths.vendor, PathBuf::from("static-vendor"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
[site]
title = "Parks for All"

[server]
port = 8080
        "#;

        let config = parse_config_str(toml).unwrap();
        assert_eq!(config.site.title, "Parks for All");
        assert_eq!(config.site.tagline, SiteConfig::default().tagline);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[site]
title = "Parks for All"
tagline = "Green spaces in every neighbourhood"

[paths]
output = "dist"
vendor = "vendor"

[server]
host = "127.0.0.1"
port = 4000
        "#;

        let config = parse_config_str(toml).unwrap();
        assert_eq!(config.paths.output, PathBuf::from("dist"));
        assert_eq!(config.paths.vendor, PathBuf::from("vendor"));
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = parse_config_str("[site]\ntitel = \"typo\"\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Configuration parse error")
        );
    }

    #[test]
    fn test_rejects_blank_title() {
        let result = parse_config_str("[site]\ntitle = \"  \"\n");
        assert!(result.unwrap_err().to_string().contains("site.title"));
    }

    #[test]
    fn test_rejects_port_zero() {
        let result = parse_config_str("[server]\nport = 0\n");
        assert!(result.unwrap_err().to_string().contains("server.port"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = load_config("/nonexistent/campaign.toml").unwrap();
        assert_eq!(config, CampaignConfig::default());
    }
}
