use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::resource::BaseUrls;

/// Application configuration structure
///
/// Features:
/// - AppSettings
/// - ServerConfig
/// - BaseUrls (resource hosts)
/// - SupportConfig

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub resources: BaseUrls,
    pub support: SupportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub debug: bool,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the "contact support" hint points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportConfig {
    pub contact_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "dewey-ebooks".to_string(),
                version: "0.1.0".to_string(),
                debug: true,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            resources: BaseUrls::default(),
            support: SupportConfig {
                contact_url: "https://t.me/DrHelloWorld".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Defaults, then `config.yaml`, then `APP_` variables
    /// (`APP_RESOURCES__PDF_BASE` -> `resources.pdf_base`).
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file("config.yaml"))
            .merge(Env::prefixed("APP_").split("__"))
    }

    /// Reads every layer without logging; see `log_summary`.
    pub fn load() -> Result<Self> {
        let config: AppConfig = Self::figment().extract()?;
        Ok(config)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded successfully");
        info!("name: {:?} v{}", self.app.name, self.app.version);
        info!("PDF base: {}", self.resources.pdf_base);
        info!("Flipbook base: {}", self.resources.flipbook_base);
        info!("AI tools base: {}", self.resources.ai_tools_base);
        info!("Virtual lab base: {}", self.resources.virtual_lab_base);
    }
}
