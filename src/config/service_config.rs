use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{non_blank, validate_header_name, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const API_URL_ENV: &str = "PROGRAMAS_API_URL";

/// Connection settings for the programs API. The base URL is optional here;
/// a missing one only becomes an error when a request is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    api_url: Option<String>,
    headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    headers: Option<HashMap<String, String>>,
}

impl ServiceConfig {
    pub fn new(api_url: Option<String>) -> Self {
        Self {
            api_url,
            headers: HashMap::new(),
        }
    }

    /// Reads the base URL from `PROGRAMAS_API_URL`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_URL_ENV).ok())
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let file: FileConfig =
            toml::from_str(&processed_content).map_err(|e| ServiceError::TomlParse {
                message: e.to_string(),
            })?;

        let api_url = file.api.base_url.filter(|url| {
            let unresolved = url.starts_with("${") && url.ends_with('}');
            if unresolved {
                tracing::warn!("api.base_url references an unset variable: {}", url);
            }
            !unresolved
        });

        Ok(Self {
            api_url,
            headers: file.api.headers.unwrap_or_default(),
        })
    }

    /// 替換環境變數 (例如 ${PROGRAMAS_API_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::TomlParse {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for ServiceConfig {
    fn api_url(&self) -> Option<&str> {
        non_blank(self.api_url.as_deref())
    }

    fn default_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.api_url() {
            validate_url("api.base_url", url)?;
        }
        for name in self.headers.keys() {
            validate_header_name("api.headers", name)?;
        }
        Ok(())
    }
}
