use client::RapportMethod;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/monatis.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub base_path: String,
    /// `get` (body-carrying GET, catalog default) or `post` for backends
    /// that refuse bodies on GET.
    pub rapport_method: String,
    pub log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            base_path: "/monatis".to_string(),
            rapport_method: "get".to_string(),
            log: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// API root the client talks to: base URL + base path, without
    /// doubling the path when the URL already carries it.
    pub fn racine_api(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let chemin = self.base_path.trim_matches('/');
        if chemin.is_empty() || base.ends_with(&format!("/{chemin}")) {
            base.to_string()
        } else {
            format!("{base}/{chemin}")
        }
    }

    pub fn methode_rapports(&self) -> Result<RapportMethod> {
        RapportMethod::depuis_code(&self.rapport_method).ok_or_else(|| {
            AppError::Argument(format!(
                "rapport_method inconnu : {} (attendu get ou post)",
                self.rapport_method
            ))
        })
    }
}

pub struct Overrides {
    pub config: Option<String>,
    pub base_url: Option<String>,
    pub base_path: Option<String>,
    pub rapport_method: Option<String>,
}

pub fn load(overrides: Overrides) -> Result<AppConfig> {
    let config_path = overrides.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("MONATIS"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = overrides.base_url {
        settings.base_url = base_url;
    }
    if let Some(base_path) = overrides.base_path {
        settings.base_path = base_path;
    }
    if let Some(rapport_method) = overrides.rapport_method {
        settings.rapport_method = rapport_method;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racine_api_ne_double_pas_le_chemin() {
        let mut config = AppConfig::default();
        assert_eq!(config.racine_api(), "http://localhost:8082/monatis");

        config.base_url = "http://localhost:8082/monatis/".to_string();
        assert_eq!(config.racine_api(), "http://localhost:8082/monatis");

        config.base_path = "/".to_string();
        config.base_url = "http://localhost:8082".to_string();
        assert_eq!(config.racine_api(), "http://localhost:8082");
    }
}
