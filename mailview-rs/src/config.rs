use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub templates: TemplateConfig,
    pub preview: PreviewConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Directory the email template loader resolves names against.
    /// Templates added in code by name do not require it.
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Placeholder sender shown on preview detail pages.
    pub from_address: String,
    /// Placeholder recipient shown on preview detail pages.
    pub to_address: String,
    /// Serve the bundled stylesheet under /static. Disable when the
    /// embedding application already serves these assets itself.
    pub serve_static: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::MailviewError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::MailviewError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8025".to_string(),
            },
            templates: TemplateConfig { dir: None },
            preview: PreviewConfig {
                from_address: "webmaster@example.com".to_string(),
                to_address: "recipient@example.com".to_string(),
                serve_static: true,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
